//! `Flock`: the population of boids and the world they live in.

use flock_core::{BoidId, FlockError, FlockResult, WorldBounds};

use crate::Boid;

/// How far `|direction|` may stray from 1 before a boid is rejected.
pub const HEADING_TOLERANCE: f64 = 1e-9;

/// A fixed-size population of boids on a `WorldBounds` torus.
///
/// Boids are stored densely with `boids[i].id == BoidId(i)`, so an id doubles
/// as an index into per-tick scratch buffers:
///
/// ```ignore
/// let boid = &flock.boids()[id.index()];  // O(1)
/// ```
///
/// The population size never changes after construction.  Mutable access is
/// handed out per boid (for the orchestrator's apply pass); the collection
/// itself cannot grow or shrink.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flock {
    bounds: WorldBounds,
    boids:  Vec<Boid>,
}

impl Flock {
    /// Assemble a flock from explicit boids.
    ///
    /// Fails unless every boid's id equals its index, every position lies
    /// inside `bounds` and every heading is a unit vector (within
    /// [`HEADING_TOLERANCE`]).
    pub fn from_boids(bounds: WorldBounds, boids: Vec<Boid>) -> FlockResult<Self> {
        for (i, boid) in boids.iter().enumerate() {
            if boid.id.index() != i {
                return Err(FlockError::Config(format!(
                    "boid at index {i} has id {}; ids must be dense and in order",
                    boid.id
                )));
            }
            if !bounds.contains(boid.position) {
                return Err(FlockError::Config(format!(
                    "{} starts outside the world at {}",
                    boid.id, boid.position
                )));
            }
            let drift = (boid.direction.magnitude() - 1.0).abs();
            if drift.is_nan() || drift > HEADING_TOLERANCE {
                return Err(FlockError::Config(format!(
                    "{} has heading {} that is not a unit vector",
                    boid.id, boid.direction
                )));
            }
        }
        Ok(Self { bounds, boids })
    }

    #[inline]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Read-only view of every boid, in id order.
    #[inline]
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// Mutable view of every boid.  The slice length is fixed.
    #[inline]
    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn get(&self, id: BoidId) -> FlockResult<&Boid> {
        self.boids.get(id.index()).ok_or(FlockError::BoidNotFound(id))
    }

    pub fn get_mut(&mut self, id: BoidId) -> FlockResult<&mut Boid> {
        self.boids.get_mut(id.index()).ok_or(FlockError::BoidNotFound(id))
    }

    /// Iterator over all `BoidId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = BoidId> + '_ {
        self.boids.iter().map(|b| b.id)
    }

    // ── Package-private constructor used by FlockBuilder ──────────────────

    pub(crate) fn from_parts(bounds: WorldBounds, boids: Vec<Boid>) -> Self {
        Self { bounds, boids }
    }
}
