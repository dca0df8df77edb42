//! The boid entity and its two mutation primitives.

use flock_core::{BoidId, FlockError, FlockResult, Vec2, WorldBounds};

/// A single autonomous agent: a point mass with a unit heading.
///
/// # Invariants
///
/// - `|direction| == 1` (within floating tolerance) at all times, including
///   immediately after construction.
/// - `position` lies inside the world bounds after every [`integrate`].
///
/// [`integrate`]: Boid::integrate
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid {
    pub id:        BoidId,
    pub position:  Vec2,
    pub direction: Vec2,
    /// Distance covered per tick.  Constant for the boid's lifetime.
    pub speed:     f64,
}

impl Boid {
    /// Create a boid heading along `heading`, which is normalised here.
    ///
    /// Fails if `heading` is the zero vector.
    pub fn new(id: BoidId, position: Vec2, heading: Vec2, speed: f64) -> FlockResult<Self> {
        let direction = heading.normalized().ok_or_else(|| {
            FlockError::Config(format!("boid {id} has a zero-length heading"))
        })?;
        Ok(Self { id, position, direction, speed })
    }

    /// Move one step along the heading, then wrap onto the torus.
    ///
    /// Precondition: `speed` is small relative to the world, so one wrap
    /// correction per axis is enough.
    #[inline]
    pub fn integrate(&mut self, bounds: WorldBounds) {
        self.position = bounds.wrap(self.position + self.direction * self.speed);
    }

    /// Blend `force` into the heading and renormalise to unit length.
    ///
    /// Forces are applied one at a time, each followed by its own
    /// renormalisation, so the result depends on application order.
    ///
    /// If the sum is exactly the zero vector the heading is left unchanged.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        if let Some(unit) = (self.direction + force).normalized() {
            self.direction = unit;
        }
    }
}
