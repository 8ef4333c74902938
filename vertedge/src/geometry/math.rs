use super::vector::Vector2;

/// Squared distance from `p` to segment `ab`, and the clamped parameter of
/// the closest point.
pub fn seg_distance_sq(p: Vector2, a: Vector2, b: Vector2) -> (f64, f64) {
    let v = b - a;
    let w = p - a;
    let vv = v.dot(v);
    let mut t = if vv > 0.0 { w.dot(v) / vv } else { 0.0 };
    if t < 0.0 { t = 0.0; } else if t > 1.0 { t = 1.0; }
    let d = p - (a + v * t);
    (d.dot(d), t)
}

/// Non-zero winding number of `p` with respect to a closed polygon.
pub fn winding_number(p: Vector2, poly: &[Vector2]) -> i32 {
    let n = poly.len();
    if n < 3 {
        return 0;
    }
    let mut wn = 0;
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 { wn += 1; }
        } else if b.y <= p.y && cross < 0.0 {
            wn -= 1;
        }
    }
    wn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_clamps_to_segment() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 0.0);
        let (d2, t) = seg_distance_sq(Vector2::new(5.0, 3.0), a, b);
        assert_eq!((d2, t), (9.0, 0.5));
        let (d2, t) = seg_distance_sq(Vector2::new(-4.0, 3.0), a, b);
        assert_eq!((d2, t), (25.0, 0.0));
    }

    #[test]
    fn winding_of_square() {
        let sq = [
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ];
        assert_ne!(winding_number(Vector2::new(5.0, 5.0), &sq), 0);
        assert_eq!(winding_number(Vector2::new(15.0, 5.0), &sq), 0);
    }
}
