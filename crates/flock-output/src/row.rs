//! Plain data row types written by output backends.

use flock_agent::Boid;
use flock_core::Tick;

/// One boid's kinematic state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidSnapshotRow {
    pub boid_id: u32,
    pub tick:    u64,
    pub x:       f64,
    pub y:       f64,
    /// Unit heading.
    pub dir_x:   f64,
    pub dir_y:   f64,
}

impl BoidSnapshotRow {
    pub fn from_boid(tick: Tick, boid: &Boid) -> Self {
        Self {
            boid_id: boid.id.0,
            tick:    tick.0,
            x:       boid.position.x,
            y:       boid.position.y,
            dir_x:   boid.direction.x,
            dir_y:   boid.direction.y,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    /// Simulated seconds at the start of the tick.
    pub elapsed_secs:     f64,
    /// Boids that perceived at least one neighbor.
    pub perceiving_boids: u64,
}
