//! The five steering forces.
//!
//! Every function is pure: it reads a snapshot and returns a vector, possibly
//! [`Vec2::ZERO`].  Non-zero results have length exactly equal to the
//! configured strength (wall avoidance excepted, see [`wall_avoidance`]).
//!
//! # Zero-magnitude guard
//!
//! Rescaling divides by the magnitude of the raw vector.  That magnitude can
//! be exactly zero: two boids on the same spot, neighbor headings that
//! cancel, a neighbor centroid on top of the subject, or a boid sitting on
//! the pointer.  In all of these cases the force is [`Vec2::ZERO`] instead
//! of a NaN that would poison the boid's heading for the rest of the run.

use flock_agent::Boid;
use flock_core::{FlockParams, Vec2, WorldBounds};

/// Steer away from the neighbors: the sum of `subject − neighbor` offsets
/// (not individually normalised), rescaled to `separation_strength`.
pub fn separation(subject: &Boid, neighbors: &[&Boid], params: &FlockParams) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let away: Vec2 = neighbors
        .iter()
        .map(|n| subject.position - n.position)
        .sum();
    away.scaled_to(params.separation_strength).unwrap_or(Vec2::ZERO)
}

/// Match the neighbors' heading: the sum of their directions, rescaled to
/// `alignment_strength`.
pub fn alignment(neighbors: &[&Boid], params: &FlockParams) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let heading: Vec2 = neighbors.iter().map(|n| n.direction).sum();
    heading.scaled_to(params.alignment_strength).unwrap_or(Vec2::ZERO)
}

/// Move towards the neighbors' centroid, rescaled to `cohesion_strength`.
pub fn cohesion(subject: &Boid, neighbors: &[&Boid], params: &FlockParams) -> Vec2 {
    if neighbors.is_empty() {
        return Vec2::ZERO;
    }
    let sum: Vec2 = neighbors.iter().map(|n| n.position).sum();
    let centroid = sum / neighbors.len() as f64;
    (centroid - subject.position)
        .scaled_to(params.cohesion_strength)
        .unwrap_or(Vec2::ZERO)
}

/// Flee the pointer when it is within `nearby_radius` (inclusive), with
/// length `mouse_strength`.
pub fn pointer_avoidance(subject: &Boid, pointer: Option<Vec2>, params: &FlockParams) -> Vec2 {
    let Some(pointer) = pointer else {
        return Vec2::ZERO;
    };
    if subject.position.distance(pointer) > params.nearby_radius {
        return Vec2::ZERO;
    }
    (subject.position - pointer)
        .scaled_to(params.mouse_strength)
        .unwrap_or(Vec2::ZERO)
}

/// Turn away from the first wall closer than `wall_threshold`.
///
/// Walls are checked in the fixed priority order left, right, bottom, top;
/// only the first hit contributes a unit push on its axis.  The push is then
/// scaled per axis: x by `wall_strength / min(left, right)`, y by
/// `wall_strength / min(bottom, top)`, so the force grows sharply as the boid
/// nears the wall.
///
/// A boid sitting exactly on a wall (distance 0) is treated as being
/// `f64::EPSILON` away so the force stays finite.
pub fn wall_avoidance(subject: &Boid, bounds: WorldBounds, params: &FlockParams) -> Vec2 {
    let p = subject.position;
    let left   = p.x;
    let right  = bounds.width - p.x;
    let bottom = p.y;
    let top    = bounds.height - p.y;

    let threshold = params.wall_threshold;
    let push = if left < threshold {
        Vec2::new(1.0, 0.0)
    } else if right < threshold {
        Vec2::new(-1.0, 0.0)
    } else if bottom < threshold {
        Vec2::new(0.0, 1.0)
    } else if top < threshold {
        Vec2::new(0.0, -1.0)
    } else {
        return Vec2::ZERO;
    };

    let length = push.magnitude();
    if length == 0.0 {
        return push;
    }

    let horizontal = left.min(right).max(f64::EPSILON);
    let vertical   = bottom.min(top).max(f64::EPSILON);
    Vec2::new(
        push.x * ((params.wall_strength / horizontal) / length),
        push.y * ((params.wall_strength / vertical) / length),
    )
}
