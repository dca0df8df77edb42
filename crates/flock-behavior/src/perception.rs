//! Neighbor query: which boids can a given boid see?
//!
//! A boid `p` is a neighbor of `subject` when
//!
//! 1. `|subject.position − p.position| < nearby_radius` (strict), and
//! 2. the angle between `subject.direction` and the vector from `subject`
//!    to `p` is strictly less than `fov / 2` in absolute value.
//!
//! The query scans the whole population, so a full tick is O(n²).  That is
//! an accepted limit of this engine; populations in the low thousands stay
//! comfortably inside a 60 Hz frame.

use std::f64::consts::{PI, TAU};

use flock_agent::Boid;
use flock_core::FlockParams;

/// All boids in `population` that `subject` perceives, in population order.
///
/// `subject` itself (matched by id) is never included.
pub fn find_neighbors<'a>(
    subject:    &Boid,
    population: &'a [Boid],
    params:     &FlockParams,
) -> Vec<&'a Boid> {
    population
        .iter()
        .filter(|other| is_perceived(subject, other, params))
        .collect()
}

/// `true` if `subject` can see `other`.
pub fn is_perceived(subject: &Boid, other: &Boid, params: &FlockParams) -> bool {
    if other.id == subject.id {
        return false;
    }
    let in_range = subject.position.distance(other.position) < params.nearby_radius;
    in_range && heading_offset(subject, other).abs() < params.half_fov()
}

/// Signed angle from `subject`'s heading to the bearing of `other`, in
/// `[-π, π]`.
///
/// Both `atan2` results lie in `(-π, π]`, so their difference lies in
/// `(-2π, 2π)` and one wrap is enough.
pub fn heading_offset(subject: &Boid, other: &Boid) -> f64 {
    let heading = subject.direction.angle();
    let bearing = (other.position - subject.position).angle();

    let difference = heading - bearing;
    if difference > PI {
        difference - TAU
    } else if difference < -PI {
        difference + TAU
    } else {
        difference
    }
}
