//! Fluent builder for constructing a randomly seeded `Flock`.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::FlockBuilder;
//! use flock_core::WorldBounds;
//!
//! # fn main() -> flock_core::FlockResult<()> {
//! let flock = FlockBuilder::new(WorldBounds::new(800.0, 600.0), 100, /*seed=*/ 42)
//!     .speed(2.0)
//!     .build()?;
//!
//! assert_eq!(flock.len(), 100);
//! # Ok(())
//! # }
//! ```

use flock_core::params::MOVE_SPEED;
use flock_core::{BoidId, FlockError, FlockResult, SimConfig, SimRng, Vec2, WorldBounds};

use crate::{Boid, Flock};

/// Fluent builder for [`Flock`].
///
/// Every boid gets
/// - an integer-valued position `floor(r · (dimension − 1))`, `r ∈ [0, 1)`,
///   on each axis;
/// - a heading drawn uniformly from `[-1, 1)²` and normalised (redrawn in
///   the vanishingly unlikely case of an exact zero draw);
/// - id `0..count` in creation order.
///
/// The same `(bounds, count, seed)` always yields the same flock.
pub struct FlockBuilder {
    bounds: WorldBounds,
    count:  usize,
    seed:   u64,
    speed:  f64,
}

impl FlockBuilder {
    /// Create a builder for `count` boids using `seed` for placement.
    ///
    /// `count` must fit in a `BoidId` (u32); [`build`](Self::build) rejects
    /// larger values.
    pub fn new(bounds: WorldBounds, count: usize, seed: u64) -> Self {
        Self { bounds, count, seed, speed: MOVE_SPEED }
    }

    /// Builder pre-filled from a run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.bounds(), config.population, config.seed).speed(config.move_speed)
    }

    /// Shared per-tick speed for every boid.  Default: `MOVE_SPEED`.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Draw the initial population.
    pub fn build(self) -> FlockResult<Flock> {
        let count = u32::try_from(self.count).map_err(|_| {
            FlockError::Config(format!("cannot number {} boids with 32-bit ids", self.count))
        })?;
        let mut rng = SimRng::new(self.seed);

        let boids = (0..count)
            .map(|i| {
                let position = Vec2::new(
                    random_coordinate(&mut rng, self.bounds.width),
                    random_coordinate(&mut rng, self.bounds.height),
                );
                Boid {
                    id: BoidId(i),
                    position,
                    direction: random_heading(&mut rng),
                    speed: self.speed,
                }
            })
            .collect();

        Ok(Flock::from_parts(self.bounds, boids))
    }
}

fn random_coordinate(rng: &mut SimRng, dimension: f64) -> f64 {
    (rng.unit() * (dimension - 1.0)).floor().max(0.0)
}

fn random_heading(rng: &mut SimRng) -> Vec2 {
    loop {
        let raw = Vec2::new(-1.0 + rng.unit() * 2.0, -1.0 + rng.unit() * 2.0);
        if let Some(unit) = raw.normalized() {
            return unit;
        }
    }
}
