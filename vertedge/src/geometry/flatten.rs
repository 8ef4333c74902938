use super::curve::quadratic_curve;
use super::math::seg_distance_sq;
use super::tolerance::CIRCLE_SEGMENTS;
use super::vector::Vector2;

/// Appends the quadratic `p0 → p2` (control `p1`) to `points`, excluding the
/// start point. Subdivides until the control point is within `tol` of the chord.
pub fn flatten_quadratic(points: &mut Vec<Vector2>, p0: Vector2, p1: Vector2, p2: Vector2, tol: f64, depth: u32) {
    let (d2, _) = seg_distance_sq(p1, p0, p2);
    if d2 <= tol * tol || depth > 16 {
        points.push(p2);
        return;
    }
    let p01 = p0.midpoint(p1);
    let p12 = p1.midpoint(p2);
    let mid = quadratic_curve(0.5, p0, p1, p2);
    flatten_quadratic(points, p0, p01, mid, tol, depth + 1);
    flatten_quadratic(points, mid, p12, p2, tol, depth + 1);
}

/// Closed polygon approximating a circle.
pub fn flatten_circle(center: Vector2, radius: f64) -> Vec<Vector2> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            Vector2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}
