//! Nearest points on edges, and splitting an edge at a click.

use crate::geometry::curve::{quadratic_curve, quadratic_curve_velocity};
use crate::geometry::tolerance::{clamp01, EPS_LEN};
use crate::geometry::vector::Vector2;
use crate::model::{EdgeGeometry, EdgeId, Vertex, VertexId};
use crate::Graph;

/// Closest point to `p` on segment `p0 p1`.
pub fn nearest_on_segment(p0: Vector2, p1: Vector2, p: Vector2) -> Vector2 {
    let d = p1 - p0;
    let len2 = d.dot(d);
    if len2 <= EPS_LEN {
        return p0;
    }
    p0 + d * clamp01((p - p0).dot(d) / len2)
}

/// Closest sampled point to `p` on the quadratic `p0, cp, p1`.
///
/// Candidates are both ends and every sample where `(pos − p)·vel` turns
/// from non-positive to non-negative, i.e. a local distance minimum.
/// Returns the curve parameter and the point.
pub fn nearest_on_curve(p0: Vector2, cp: Vector2, p1: Vector2, p: Vector2, interval: f64) -> (f64, Vector2) {
    let steps = if interval > 0.0 && interval.is_finite() {
        ((1.0 / interval).round() as usize).max(1)
    } else {
        1
    };
    let mut best = (0.0, p0, f64::INFINITY);
    let mut prev_test = f64::INFINITY;
    for k in 0..=steps {
        let t = k as f64 / steps as f64;
        let pos = quadratic_curve(t, p0, cp, p1);
        let test = (pos - p).dot(quadratic_curve_velocity(t, p0, cp, p1));
        if k == 0 || k == steps || (prev_test <= 0.0 && test >= 0.0) {
            let dist = pos.distance(p);
            if dist < best.2 {
                best = (t, pos, dist);
            }
        }
        prev_test = test;
    }
    (best.0, best.1)
}

/// Control points of the two halves of a quadratic split at `t`.
pub fn split_control_points(p0: Vector2, cp: Vector2, p1: Vector2, t: f64) -> (Vector2, Vector2) {
    (cp * t + p0 * (1.0 - t), p1 * t + cp * (1.0 - t))
}

impl Graph {
    /// Inserts a vertex on `edge` at the point nearest to `click`.
    ///
    /// The edge keeps its start and style and now ends at the new vertex; a
    /// default-styled edge continues to the old end. Curves are split so
    /// both halves trace the original. Loops are never split.
    pub fn split_edge(&mut self, edge: EdgeId, click: Vector2, interval: f64) -> Option<VertexId> {
        let geom = self.edge_geometry(edge)?;
        let (pos, cps) = match geom {
            EdgeGeometry::Loop { .. } => return None,
            EdgeGeometry::Line { a, b } => (nearest_on_segment(a, b, click), None),
            EdgeGeometry::Curve { a, cp, b } => {
                let (t, pos) = nearest_on_curve(a, cp, b, click, interval);
                (pos, Some(split_control_points(a, cp, b, t)))
            }
        };
        let old_end = self.edge(edge)?.v2;
        let mid = self.add_vertex(Vertex::at(pos));
        if let Some(e) = self.edge_mut(edge) {
            e.v2 = mid;
            e.cp = cps.map(|(first, _)| first);
        }
        let tail = self.add_edge(mid, old_end).ok()?;
        if let Some(e) = self.edge_mut(tail) {
            e.cp = cps.map(|(_, second)| second);
        }
        log::debug!("split edge {} at ({:.2}, {:.2})", edge.0, pos.x, pos.y);
        Some(mid)
    }
}
