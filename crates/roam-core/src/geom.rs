//! Geometry primitive: [`Point`], a position on a map.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A 2D point with `f64` coordinates. X grows east, Y grows north.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0.0, 0.0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at distance `dist` from the origin along a compass bearing
    /// in degrees: 0° points along +Y and bearings turn counter-clockwise,
    /// so 90° points along -X.
    #[inline]
    pub fn polar(dist: f64, bearing_deg: f64) -> Self {
        let rad = bearing_deg.to_radians();
        Self::new(-rad.sin() * dist, rad.cos() * dist)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// --- trait impls for Point ---

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(b - a, Point::new(2.0, 2.0));
        assert_eq!(a * 3.0, Point::new(3.0, 6.0));
        assert_eq!(b / 2.0, Point::new(1.5, 2.0));
    }

    #[test]
    fn distance_right_triangle() {
        let a = Point::ZERO;
        let b = Point::new(3.0, 4.0);
        assert!(close(a.distance(b), 5.0));
        assert!(close(b.distance(a), 5.0));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(-2.5, 7.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn polar_cardinal_bearings() {
        let n = Point::polar(2.0, 0.0);
        assert!(close(n.x, 0.0) && close(n.y, 2.0));
        let w = Point::polar(2.0, 90.0);
        assert!(close(w.x, -2.0) && close(w.y, 0.0));
        let s = Point::polar(2.0, 180.0);
        assert!(close(s.x, 0.0) && close(s.y, -2.0));
        let e = Point::polar(2.0, 270.0);
        assert!(close(e.x, 2.0) && close(e.y, 0.0));
    }

    #[test]
    fn polar_preserves_distance_to_origin() {
        for bearing in [0.0, 25.0, 117.0, 211.0, 333.5] {
            let p = Point::polar(42.0, bearing);
            assert!(close(p.distance(Point::ZERO), 42.0));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
