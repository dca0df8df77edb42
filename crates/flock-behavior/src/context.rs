//! Read-only simulation state passed to every steering callback.

use flock_core::{FlockParams, Vec2, WorldBounds};

/// The per-tick environment passed to every
/// [`SteeringModel`][crate::SteeringModel] callback.
///
/// `FlockContext` is built once per tick by flock-sim and shared (immutably)
/// across all boids during the steer pass.  The boids themselves arrive
/// through the callback's neighbor slice.
pub struct FlockContext<'a> {
    /// World dimensions, used by wall avoidance.
    pub bounds: WorldBounds,

    /// Pointer position sampled once for this tick.  `None` when no pointer
    /// is present.  May lie outside the world.
    pub pointer: Option<Vec2>,

    /// Steering constants.
    pub params: &'a FlockParams,
}

impl<'a> FlockContext<'a> {
    /// Build a new context for a single tick.
    #[inline]
    pub fn new(bounds: WorldBounds, pointer: Option<Vec2>, params: &'a FlockParams) -> Self {
        Self { bounds, pointer, params }
    }
}
