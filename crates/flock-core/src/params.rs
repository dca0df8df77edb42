//! Steering constants.
//!
//! The reference values are exported as `pub const`s and collected into
//! [`FlockParams::default()`].  Applications that want to experiment can
//! override individual fields; the orchestrator reads them through a shared
//! `&FlockParams` every tick.

use std::f64::consts::PI;

/// Perception radius: other boids strictly closer than this may be seen.
pub const NEARBY_RADIUS: f64 = 300.0;
/// Full angular width of the perception cone, centred on the heading (135°).
pub const FOV: f64 = 3.0 * PI / 4.0;

pub const SEPARATION_STRENGTH: f64 = 0.075;
pub const ALIGNMENT_STRENGTH: f64 = 0.04;
pub const COHESION_STRENGTH: f64 = 0.06;
pub const MOUSE_STRENGTH: f64 = 0.15;
pub const WALL_STRENGTH: f64 = 2.0;

/// Walls closer than this trigger wall avoidance.
pub const WALL_THRESHOLD: f64 = 400.0;

/// Distance covered per tick.
pub const MOVE_SPEED: f64 = 2.0;

/// Tunable steering parameters shared by every boid in a flock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockParams {
    pub nearby_radius:       f64,
    /// Full cone width in radians; a boid sees `±fov/2` around its heading.
    pub fov:                 f64,
    pub separation_strength: f64,
    pub alignment_strength:  f64,
    pub cohesion_strength:   f64,
    pub mouse_strength:      f64,
    pub wall_strength:       f64,
    pub wall_threshold:      f64,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            nearby_radius:       NEARBY_RADIUS,
            fov:                 FOV,
            separation_strength: SEPARATION_STRENGTH,
            alignment_strength:  ALIGNMENT_STRENGTH,
            cohesion_strength:   COHESION_STRENGTH,
            mouse_strength:      MOUSE_STRENGTH,
            wall_strength:       WALL_STRENGTH,
            wall_threshold:      WALL_THRESHOLD,
        }
    }
}

impl FlockParams {
    /// Half of the perception cone, the bound used by the neighbor query.
    #[inline]
    pub fn half_fov(&self) -> f64 {
        self.fov / 2.0
    }
}
