//! 2D Vector
//!
//! Value-type vector used for positions, velocities, accelerations and forces.
//! Every operation is total: zero vectors normalize to zero, limits never divide by zero.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Serialize, Deserialize};

/// 2D vector with `f32` components.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    /// X component (pixels, +X right)
    pub x: f32,
    /// Y component (pixels, +Y down)
    pub y: f32,
}

impl Vector2D {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Unit vector pointing right (+X)
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    /// Unit vector pointing left (-X)
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };

    /// Unit vector pointing up on screen (-Y)
    pub const UP: Self = Self { x: 0.0, y: -1.0 };

    /// Unit vector pointing down on screen (+Y)
    pub const DOWN: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Add another vector.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtract another vector.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Scale by a scalar.
    #[inline]
    pub fn scale(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    /// Squared length (avoids sqrt - prefer this for comparisons).
    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Length (magnitude). Prefer `magnitude_squared` when possible.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        self.sub(other).magnitude_squared()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Normalize in place. No-op on the zero vector.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy. Returns ZERO if length is zero.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Clamp magnitude to `max` in place, preserving direction.
    #[inline]
    pub fn limit(&mut self, max: f32) {
        *self = self.limited(max);
    }

    /// Copy with magnitude clamped to `max`.
    ///
    /// A non-positive `max` yields ZERO.
    pub fn limited(self, max: f32) -> Self {
        if max <= 0.0 {
            return Self::ZERO;
        }
        let len_sq = self.magnitude_squared();
        if len_sq <= max * max {
            return self;
        }
        self.scale(max / len_sq.sqrt())
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Negate both components.
    #[inline]
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// True if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

// Operator overloads for ergonomics
impl Add for Vector2D {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector2D::sub(self, rhs)
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vector2D {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl fmt::Debug for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_vec2_constants() {
        assert_eq!(Vector2D::ZERO.x, 0.0);
        assert_eq!(Vector2D::ZERO.y, 0.0);
        assert_eq!(Vector2D::RIGHT.x, 1.0);
        assert_eq!(Vector2D::UP.y, -1.0);
    }

    #[test]
    fn test_vec2_pure_arithmetic() {
        let a = Vector2D::new(3.0, 4.0);
        let b = Vector2D::new(1.0, 2.0);
        assert_eq!(a + b, Vector2D::new(4.0, 6.0));
        assert_eq!(a - b, Vector2D::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vector2D::new(6.0, 8.0));
        assert_eq!(-a, Vector2D::new(-3.0, -4.0));
        // Operands untouched
        assert_eq!(a, Vector2D::new(3.0, 4.0));
    }

    #[test]
    fn test_vec2_mutating_arithmetic() {
        let mut v = Vector2D::new(1.0, 1.0);
        v += Vector2D::new(2.0, 3.0);
        assert_eq!(v, Vector2D::new(3.0, 4.0));
        v -= Vector2D::new(1.0, 1.0);
        assert_eq!(v, Vector2D::new(2.0, 3.0));
        v *= 0.5;
        assert_eq!(v, Vector2D::new(1.0, 1.5));
    }

    #[test]
    fn test_vec2_magnitude() {
        // 3-4-5 triangle
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert!((v.magnitude() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_vec2_normalize() {
        let mut v = Vector2D::new(3.0, 4.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < EPS);
        assert!((v.x - 0.6).abs() < EPS);

        // Zero vector normalizes to zero
        let mut zero = Vector2D::ZERO;
        zero.normalize();
        assert_eq!(zero, Vector2D::ZERO);
        assert!(!zero.x.is_nan());
    }

    #[test]
    fn test_vec2_limit_preserves_direction() {
        let mut v = Vector2D::new(6.0, 8.0);
        v.limit(5.0);
        assert!((v.magnitude() - 5.0).abs() < EPS);
        assert!((v.x - 3.0).abs() < EPS);
        assert!((v.y - 4.0).abs() < EPS);

        // Already within the limit
        let short = Vector2D::new(1.0, 1.0);
        assert_eq!(short.limited(5.0), short);

        // Degenerate limit
        assert_eq!(Vector2D::new(1.0, 0.0).limited(0.0), Vector2D::ZERO);
    }

    #[test]
    fn test_vec2_dot_and_distance() {
        let a = Vector2D::new(2.0, 3.0);
        let b = Vector2D::new(4.0, 5.0);
        assert_eq!(a.dot(b), 23.0);

        let origin = Vector2D::ZERO;
        let p = Vector2D::new(3.0, 4.0);
        assert_eq!(origin.distance_squared(p), 25.0);
        assert!((origin.distance(p) - 5.0).abs() < EPS);
    }
}
