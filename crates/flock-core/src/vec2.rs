//! Two-dimensional vector type used for positions, headings, and forces.
//!
//! `Vec2` uses `f64` components.  Headings are renormalised once per applied
//! force every tick, so single precision drifts away from unit length far
//! quicker than the 1e-9 tolerance the simulation holds itself to.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// A 2D vector (or point) with double-precision components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length, `sqrt(x² + y²)`.
    #[inline]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).magnitude()
    }

    /// Heading angle in radians, `atan2(y, x)`, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unit vector in the same direction, computed as `(x / |v|, y / |v|)`.
    ///
    /// Returns `None` for the zero vector or when the magnitude is not finite.
    #[inline]
    pub fn normalized(self) -> Option<Vec2> {
        let length = self.magnitude();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(Vec2::new(self.x / length, self.y / length))
    }

    /// Rescale to exactly `length`, computed as `v * (length / |v|)`.
    ///
    /// The factor is derived from the pre-scale magnitude and applied to
    /// both components.  Returns `None` for the zero vector.
    #[inline]
    pub fn scaled_to(self, length: f64) -> Option<Vec2> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return None;
        }
        let factor = length / magnitude;
        Some(Vec2::new(self.x * factor, self.y * factor))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Sum for Vec2 {
    /// Left fold starting from [`Vec2::ZERO`], in iteration order.
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Vec2 {
        iter.fold(Vec2::ZERO, |acc, v| acc + v)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
