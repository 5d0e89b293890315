//! 2D vector type for element positions and velocities.

use core::ops::{Add, AddAssign, Neg, Sub};

/// 2D vector in CSS pixels.
///
/// Used both for positions (relative to the container's top-left corner, or
/// client coordinates for pointer samples) and for velocities in pixels per
/// animation frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Create a new 2D vector.
    pub const fn new(x: f64, y: f64) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub const fn zero() -> Self { Vec2 { x: 0.0, y: 0.0 } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: f64) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Half of each component. Used for "pointer becomes the visual center".
    pub fn half(self) -> Self { self.scale(0.5) }

    /// True if both components are finite.
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self).scale(t)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
