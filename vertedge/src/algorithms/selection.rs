//! Rubber-band selection tests, in world coordinates.

use crate::geometry::curve::{lines_intersect, quadratic_curve};
use crate::geometry::rect::Rect;
use crate::geometry::vector::Vector2;
use crate::model::{EdgeGeometry, Element, Vertex};
use crate::Graph;

fn bbox_of(points: &[Vector2]) -> Rect {
    let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.set(min.x.min(p.x), min.y.min(p.y));
        max.set(max.x.max(p.x), max.y.max(p.y));
    }
    Rect::from_points(min, max)
}

/// The box overlaps the square of side `2r` around the vertex.
pub fn vertex_in_box(v: &Vertex, area: &Rect) -> bool {
    area.intersects(&Rect::around(v.pos(), v.r.abs()))
}

pub fn edge_in_box(geom: &EdgeGeometry, area: &Rect, interval: f64) -> bool {
    let (a, b) = geom.endpoints();
    if area.contains(a) || area.contains(b) {
        return true;
    }
    match *geom {
        EdgeGeometry::Curve { a, cp, b } => {
            if !area.intersects(&bbox_of(&[a, cp, b])) {
                return false;
            }
            let steps = if interval > 0.0 && interval.is_finite() {
                ((1.0 / interval).round() as usize).max(1)
            } else {
                1
            };
            (0..=steps).any(|k| area.contains(quadratic_curve(k as f64 / steps as f64, a, cp, b)))
        }
        EdgeGeometry::Loop { .. } => {
            let Some((center, radius)) = geom.loop_circle() else {
                return false;
            };
            if !area.intersects(&Rect::around(center, radius)) {
                return false;
            }
            let r = area.normalized();
            let closest = Vector2::new(center.x.clamp(r.x, r.xw()), center.y.clamp(r.y, r.yh()));
            // the circle must cross the box, not enclose it
            closest.distance(center) <= radius && r.corners().iter().any(|c| c.distance(center) >= radius)
        }
        EdgeGeometry::Line { a, b } => {
            let r = area.normalized();
            let [c0, c1, c2, c3] = r.corners();
            [(c0, c1), (c1, c2), (c2, c3), (c3, c0)]
                .iter()
                .any(|&(p, q)| lines_intersect(a, b, p, q))
        }
    }
}

/// Vertices touched by the box in slot order, then edges.
pub fn elements_in_box(g: &Graph, area: &Rect, interval: f64) -> Vec<Element> {
    let mut out: Vec<Element> = g
        .vertex_ids()
        .filter(|&id| g.vertex(id).is_some_and(|v| vertex_in_box(v, area)))
        .map(Element::from)
        .collect();
    out.extend(
        g.edge_ids()
            .filter(|&id| g.edge_geometry(id).is_some_and(|geom| edge_in_box(&geom, area, interval)))
            .map(Element::from),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_crossing_box_without_endpoints() {
        let geom = EdgeGeometry::Line { a: Vector2::new(-50.0, 0.0), b: Vector2::new(50.0, 0.0) };
        assert!(edge_in_box(&geom, &Rect::new(-5.0, -5.0, 10.0, 10.0), 0.01));
        assert!(!edge_in_box(&geom, &Rect::new(-5.0, 5.0, 10.0, 10.0), 0.01));
    }

    #[test]
    fn curve_is_sampled_after_hull_check() {
        let geom = EdgeGeometry::Curve {
            a: Vector2::new(-50.0, 0.0),
            cp: Vector2::new(0.0, 100.0),
            b: Vector2::new(50.0, 0.0),
        };
        // apex at y=50
        assert!(edge_in_box(&geom, &Rect::new(-5.0, 45.0, 10.0, 10.0), 0.01));
        // inside the hull but away from the curve
        assert!(!edge_in_box(&geom, &Rect::new(-5.0, 80.0, 10.0, 10.0), 0.01));
    }

    #[test]
    fn loop_inside_box_requires_crossing() {
        let geom = EdgeGeometry::Loop { anchor: Vector2::new(0.0, 0.0), cp: Vector2::new(0.0, -40.0) };
        // centre (0,-20) radius 20; a box wholly inside the circle does not select
        assert!(!edge_in_box(&geom, &Rect::new(-5.0, -25.0, 10.0, 10.0), 0.01));
        assert!(edge_in_box(&geom, &Rect::new(15.0, -25.0, 10.0, 10.0), 0.01));
        assert!(!edge_in_box(&geom, &Rect::new(30.0, -25.0, 10.0, 10.0), 0.01));
    }

    #[test]
    fn negative_extent_boxes_work() {
        let v = Vertex::at(Vector2::ZERO);
        assert!(vertex_in_box(&v, &Rect::new(20.0, 20.0, -40.0, -40.0)));
        assert!(!vertex_in_box(&v, &Rect::new(50.0, 50.0, 10.0, 10.0)));
    }
}
