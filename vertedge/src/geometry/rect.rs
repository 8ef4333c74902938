use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use super::viewport::Viewport;

/// Axis-aligned rectangle given by an origin and a (possibly negative) size.
///
/// Drag boxes are built from an anchor and the current cursor, so width and
/// height may be negative until [`Rect::normalized`] is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_points(a: Vector2, b: Vector2) -> Self {
        Rect::new(a.x, a.y, b.x - a.x, b.y - a.y)
    }

    /// Square of side `2 * half` centred at `center`.
    pub fn around(center: Vector2, half: f64) -> Self {
        Rect::new(center.x - half, center.y - half, 2.0 * half, 2.0 * half)
    }

    #[inline] pub fn cx(&self) -> f64 { self.x + 0.5 * self.w }
    #[inline] pub fn cy(&self) -> f64 { self.y + 0.5 * self.h }
    #[inline] pub fn xw(&self) -> f64 { self.x + self.w }
    #[inline] pub fn yh(&self) -> f64 { self.y + self.h }

    #[inline] pub fn xy(&self) -> Vector2 { Vector2::new(self.x, self.y) }
    #[inline] pub fn xwy(&self) -> Vector2 { Vector2::new(self.xw(), self.y) }
    #[inline] pub fn xyh(&self) -> Vector2 { Vector2::new(self.x, self.yh()) }
    #[inline] pub fn xwyh(&self) -> Vector2 { Vector2::new(self.xw(), self.yh()) }

    /// Corners in clockwise order starting at the origin.
    pub fn corners(&self) -> [Vector2; 4] {
        [self.xy(), self.xwy(), self.xwyh(), self.xyh()]
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn normalized(&self) -> Rect {
        Rect::new(
            if self.w < 0.0 { self.x + self.w } else { self.x },
            if self.h < 0.0 { self.y + self.h } else { self.y },
            self.w.abs(),
            self.h.abs(),
        )
    }

    /// Inclusive containment test against the normalized rectangle.
    pub fn contains(&self, p: Vector2) -> bool {
        let r = self.normalized();
        r.x <= p.x && p.x <= r.xw() && r.y <= p.y && p.y <= r.yh()
    }

    /// Strict overlap between the normalized `self` and `other`.
    ///
    /// Rectangles that merely touch along a side do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let s = self.normalized();
        !(s.xw() <= other.x || s.x >= other.xw() || s.yh() <= other.y || s.y >= other.yh())
    }

    pub fn transformed(&self, view: &Viewport) -> Rect {
        let tl = view.transform(self.xy());
        let br = view.transform(self.xwyh());
        Rect::from_points(tl, br)
    }

    pub fn located(&self, view: &Viewport) -> Rect {
        let tl = view.locate(self.xy());
        let br = view.locate(self.xwyh());
        Rect::from_points(tl, br)
    }

    /// Grows the rectangle by `d` on every side.
    pub fn inflated(&self, d: f64) -> Rect {
        Rect::new(self.x - d, self.y - d, self.w + 2.0 * d, self.h + 2.0 * d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_negative_extent() {
        let r = Rect::new(10.0, 10.0, -4.0, -6.0).normalized();
        assert_eq!(r, Rect::new(6.0, 4.0, 4.0, 6.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vector2::new(10.0, 0.0)));
        assert!(!r.contains(Vector2::new(10.1, 0.0)));
        assert!(Rect::new(10.0, 10.0, -10.0, -10.0).contains(Vector2::new(5.0, 5.0)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(a.intersects(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }
}
