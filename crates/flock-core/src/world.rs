//! World geometry: a `width × height` torus.

use crate::Vec2;

/// Dimensions of the simulated surface.
///
/// The surface is toroidal: a boid leaving one edge re-enters at the
/// opposite one.  Walls exist only as a steering stimulus (see the wall
/// avoidance force in `flock-behavior`); they never block movement.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    pub width:  f64,
    pub height: f64,
}

impl WorldBounds {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when `0 ≤ x < width` and `0 ≤ y < height`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// Map a point that has stepped at most one world-length outside the
    /// bounds back onto the torus.
    ///
    /// Each axis is corrected independently and at most once.  Callers must
    /// keep per-tick displacement well below the world size; a point further
    /// out than one dimension is not brought fully back in range.
    #[inline]
    pub fn wrap(self, p: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(p.x, self.width), wrap_axis(p.y, self.height))
    }
}

/// Wraps at `dimension` rather than `dimension - 1`.  The lower threshold
/// would send `[dimension - 1, dimension)` to `[-1, 0)` and break
/// `0 <= value < dimension`.
#[inline]
fn wrap_axis(value: f64, dimension: f64) -> f64 {
    if value < 0.0 {
        // A tiny negative value can round up to exactly `dimension`.
        let wrapped = value + dimension;
        if wrapped >= dimension { 0.0 } else { wrapped }
    } else if value >= dimension {
        value - dimension
    } else {
        value
    }
}
