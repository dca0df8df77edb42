//! `Steering`: what one boid wants to do this tick.

use flock_core::Vec2;

/// The five force vectors computed for one boid in the steer pass.
///
/// Produced by [`SteeringModel::steer`][crate::SteeringModel::steer] and
/// consumed by flock-sim's apply pass, which feeds them to
/// `Boid::apply_force` one by one in [`in_order`](Self::in_order).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Steering {
    pub separation: Vec2,
    pub alignment:  Vec2,
    pub cohesion:   Vec2,
    pub pointer:    Vec2,
    pub wall:       Vec2,
}

impl Steering {
    pub const ZERO: Steering = Steering {
        separation: Vec2::ZERO,
        alignment:  Vec2::ZERO,
        cohesion:   Vec2::ZERO,
        pointer:    Vec2::ZERO,
        wall:       Vec2::ZERO,
    };

    /// The forces in canonical application order: separation, alignment,
    /// cohesion, pointer avoidance, wall avoidance.
    ///
    /// The heading is renormalised after each one, so reordering changes
    /// trajectories.
    #[inline]
    pub fn in_order(&self) -> [Vec2; 5] {
        [self.separation, self.alignment, self.cohesion, self.pointer, self.wall]
    }
}
