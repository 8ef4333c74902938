//! Quadratic Bézier evaluation and segment predicates.
//!
//! Curve functions take their points as `(p, q, r)` where `p` is the start,
//! `q` the control point and `r` the end. Callers throughout the crate rely on
//! this order.

use super::tolerance::{safe_div, EPS_LEN};
use super::vector::Vector2;

/// Position at `t`: `r·t² + q·2t(1−t) + p·(1−t)²`.
#[inline]
pub fn quadratic_curve(t: f64, p: Vector2, q: Vector2, r: Vector2) -> Vector2 {
    r * (t * t) + q * (2.0 * t * (1.0 - t)) + p * ((1.0 - t) * (1.0 - t))
}

/// First derivative at `t`: `r·2t + q·(2−4t) − p·(2−2t)`.
#[inline]
pub fn quadratic_curve_velocity(t: f64, p: Vector2, q: Vector2, r: Vector2) -> Vector2 {
    r * (2.0 * t) + q * (2.0 - 4.0 * t) - p * (2.0 - 2.0 * t)
}

#[inline]
fn extremum(p: f64, q: f64, r: f64) -> Option<f64> {
    safe_div(-q * q + 2.0 * q * r - r * r, p - 2.0 * q + r).map(|v| v + r)
}

/// X coordinate of the curve's turning point, `None` when the curve has none.
pub fn quadratic_curve_vertex_x(p: Vector2, q: Vector2, r: Vector2) -> Option<f64> {
    extremum(p.x, q.x, r.x)
}

/// Y coordinate of the curve's turning point, `None` when the curve has none.
pub fn quadratic_curve_vertex_y(p: Vector2, q: Vector2, r: Vector2) -> Option<f64> {
    extremum(p.y, q.y, r.y)
}

/// Orientation of the triple: -1, 0 (collinear) or 1.
pub fn orientation_of(p1: Vector2, p2: Vector2, p3: Vector2) -> i8 {
    let v = (p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y);
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Textbook four-orientation segment test.
///
/// Collinear overlapping segments are reported as not intersecting.
pub fn lines_intersect(p1: Vector2, q1: Vector2, p2: Vector2, q2: Vector2) -> bool {
    orientation_of(p1, q1, p2) != orientation_of(p1, q1, q2)
        && orientation_of(p2, q2, p1) != orientation_of(p2, q2, q1)
}

/// Turning angle at the control point, between chords `q − p` and `r − q`.
///
/// Zero means the three points are collinear in order. `None` if either chord
/// has zero length.
pub fn control_angle(p: Vector2, q: Vector2, r: Vector2) -> Option<f64> {
    let a = q - p;
    let b = r - q;
    let la = a.magnitude();
    let lb = b.magnitude();
    if la <= EPS_LEN || lb <= EPS_LEN {
        return None;
    }
    Some((a.dot(b) / (la * lb)).clamp(-1.0, 1.0).acos())
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Vector2 = Vector2::new(0.0, 0.0);
    const Q: Vector2 = Vector2::new(50.0, 100.0);
    const R: Vector2 = Vector2::new(100.0, 0.0);

    #[test]
    fn midpoint_of_symmetric_arch() {
        assert_eq!(quadratic_curve(0.5, P, Q, R), Vector2::new(50.0, 50.0));
        assert_eq!(quadratic_curve_velocity(0.5, P, Q, R), Vector2::new(100.0, 0.0));
    }

    #[test]
    fn vertex_matches_sampled_peak() {
        assert_eq!(quadratic_curve_vertex_y(P, Q, R), Some(50.0));
        // x is linear in t here: no turning point
        assert_eq!(quadratic_curve_vertex_x(P, Q, R), None);
    }

    #[test]
    fn orientation_signs() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        assert_eq!(orientation_of(a, b, Vector2::new(2.0, 0.0)), 0);
        assert_eq!(orientation_of(a, b, Vector2::new(1.0, 1.0)), -orientation_of(a, b, Vector2::new(1.0, -1.0)));
    }

    #[test]
    fn crossing_and_disjoint_segments() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 10.0);
        assert!(lines_intersect(a, b, Vector2::new(0.0, 10.0), Vector2::new(10.0, 0.0)));
        assert!(!lines_intersect(a, b, Vector2::new(20.0, 0.0), Vector2::new(30.0, 0.0)));
    }

    #[test]
    fn collinear_overlap_is_not_detected() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 0.0);
        assert!(!lines_intersect(a, b, Vector2::new(5.0, 0.0), Vector2::new(15.0, 0.0)));
    }

    #[test]
    fn control_angle_of_straight_and_bent() {
        let straight = control_angle(P, Vector2::new(50.0, 0.0), R).unwrap();
        assert!(straight.abs() < 1e-12);
        let bent = control_angle(P, Q, R).unwrap();
        assert!(bent > 1.0);
        assert!(control_angle(P, P, R).is_none());
    }
}
