//! The `SteeringModel` trait: the extension point for steering rules.

use flock_agent::Boid;

use crate::{FlockContext, Steering, forces};

/// Pluggable per-boid steering.
///
/// Called once per boid per tick during the read-only steer pass with the
/// boid's neighbor set (already filtered by the perception query) and the
/// tick's [`FlockContext`].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` and hold no per-boid state: every
/// input arrives through the arguments, and the output is a plain
/// [`Steering`] value.
///
/// # Example
///
/// ```rust,ignore
/// struct HerdOnly;
///
/// impl SteeringModel for HerdOnly {
///     fn steer(&self, boid: &Boid, neighbors: &[&Boid], ctx: &FlockContext<'_>) -> Steering {
///         Steering {
///             cohesion: forces::cohesion(boid, neighbors, ctx.params),
///             ..Steering::ZERO
///         }
///     }
/// }
/// ```
pub trait SteeringModel: Send + Sync + 'static {
    fn steer(
        &self,
        boid:      &Boid,
        neighbors: &[&Boid],
        ctx:       &FlockContext<'_>,
    ) -> Steering;
}

/// Reynolds flocking plus pointer and wall avoidance.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReynoldsSteering;

impl SteeringModel for ReynoldsSteering {
    fn steer(
        &self,
        boid:      &Boid,
        neighbors: &[&Boid],
        ctx:       &FlockContext<'_>,
    ) -> Steering {
        Steering {
            separation: forces::separation(boid, neighbors, ctx.params),
            alignment:  forces::alignment(neighbors, ctx.params),
            cohesion:   forces::cohesion(boid, neighbors, ctx.params),
            pointer:    forces::pointer_avoidance(boid, ctx.pointer, ctx.params),
            wall:       forces::wall_avoidance(boid, ctx.bounds, ctx.params),
        }
    }
}
