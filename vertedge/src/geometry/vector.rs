use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::tolerance::EPS_LEN;

/// A 2D point or displacement.
///
/// Arithmetic produces new values; the only in-place mutation is [`Vector2::set`].
/// `NaN` components are used as a sentinel for "no cursor on the canvas".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const NAN: Vector2 = Vector2 { x: f64::NAN, y: f64::NAN };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Component-wise product.
    #[inline]
    pub fn scale(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vector2) -> f64 {
        (self - other).magnitude()
    }

    /// Unit vector in the same direction, `None` for zero-length input.
    pub fn normalized(self) -> Option<Vector2> {
        let len = self.magnitude();
        if len > EPS_LEN {
            Some(self / len)
        } else {
            None
        }
    }

    #[inline]
    pub fn lerp(self, other: Vector2, t: f64) -> Vector2 {
        self * (1.0 - t) + other * t
    }

    #[inline]
    pub fn midpoint(self, other: Vector2) -> Vector2 {
        (self + other) * 0.5
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn zero_length_does_not_normalize() {
        assert!(Vector2::ZERO.normalized().is_none());
        let n = Vector2::new(3.0, 4.0).normalized().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn nan_sentinel() {
        assert!(Vector2::NAN.is_nan());
        assert!(!Vector2::ZERO.is_nan());
    }
}
