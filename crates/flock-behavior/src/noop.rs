//! A no-op steering model: boids never turn.

use flock_agent::Boid;

use crate::{FlockContext, Steering, SteeringModel};

/// A [`SteeringModel`] that always returns [`Steering::ZERO`].
///
/// Useful in tests that only exercise integration and wraparound.
pub struct NoopSteering;

impl SteeringModel for NoopSteering {
    fn steer(
        &self,
        _boid:      &Boid,
        _neighbors: &[&Boid],
        _ctx:       &FlockContext<'_>,
    ) -> Steering {
        Steering::ZERO
    }
}
