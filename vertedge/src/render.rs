//! Drawing-surface contract and a headless implementation of it.
//!
//! Primitives build their outline through [`DrawContext`] both to paint and to
//! hit-test, so the same path feeds `fill`/`stroke` and the point queries. The
//! browser binding implements the trait for `CanvasRenderingContext2d`;
//! [`PathHitContext`] answers the queries geometrically for native hosts and tests.

use crate::geometry::flatten::{flatten_circle, flatten_quadratic};
use crate::geometry::math::{seg_distance_sq, winding_number};
use crate::geometry::vector::Vector2;

/// The subset of the HTML canvas 2D API the editor needs.
///
/// Path coordinates are CSS pixels. Point queries take device pixels, as the
/// canvas does once a device-pixel-ratio transform is installed.
pub trait DrawContext {
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    /// Full circle/ellipse around `(cx, cy)`.
    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, dash: &[f64]);
    fn is_point_in_path(&mut self, x: f64, y: f64) -> bool;
    fn is_point_in_stroke(&mut self, x: f64, y: f64) -> bool;
}

/// Appends a two-digit hex alpha to a `#rrggbb` colour.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    format!("{color}{alpha}")
}

#[derive(Clone, Debug, Default)]
struct SubPath {
    points: Vec<Vector2>,
    closed: bool,
}

/// A paint operation captured by [`PathHitContext`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill { style: String },
    Stroke { style: String, line_width: f64, dash: Vec<f64> },
}

/// Headless [`DrawContext`]: keeps the current path flattened to polylines and
/// answers point queries with non-zero winding and stroke distance.
///
/// Paint calls are recorded in [`PathHitContext::ops`] rather than rasterised.
#[derive(Clone, Debug)]
pub struct PathHitContext {
    scale: f64,
    tolerance: f64,
    subpaths: Vec<SubPath>,
    fill_style: String,
    stroke_style: String,
    line_width: f64,
    line_dash: Vec<f64>,
    pub ops: Vec<DrawOp>,
}

impl Default for PathHitContext {
    fn default() -> Self {
        PathHitContext::new(1.0)
    }
}

impl PathHitContext {
    /// `scale` is the device pixel ratio that query coordinates are expressed in.
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            tolerance: 0.1,
            subpaths: Vec::new(),
            fill_style: String::from("#000000"),
            stroke_style: String::from("#000000"),
            line_width: 1.0,
            line_dash: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    fn current(&mut self) -> Option<&mut SubPath> {
        self.subpaths.last_mut().filter(|s| !s.closed)
    }

    fn last_point(&self) -> Option<Vector2> {
        self.subpaths.last().and_then(|s| {
            if s.closed {
                s.points.first().copied()
            } else {
                s.points.last().copied()
            }
        })
    }

    fn push_closed(&mut self, points: Vec<Vector2>) {
        self.subpaths.push(SubPath { points, closed: true });
    }

    fn query_point(&self, x: f64, y: f64) -> Vector2 {
        Vector2::new(x / self.scale, y / self.scale)
    }
}

impl DrawContext for PathHitContext {
    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn close_path(&mut self) {
        if let Some(s) = self.current() {
            s.closed = true;
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(SubPath { points: vec![Vector2::new(x, y)], closed: false });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = Vector2::new(x, y);
        match self.current() {
            Some(s) => s.points.push(p),
            None => {
                let start = self.last_point().unwrap_or(p);
                self.subpaths.push(SubPath { points: vec![start, p], closed: false });
            }
        }
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        let end = Vector2::new(x, y);
        let cp = Vector2::new(cpx, cpy);
        let start = self.last_point().unwrap_or(cp);
        let mut pts = Vec::new();
        flatten_quadratic(&mut pts, start, cp, end, self.tolerance, 0);
        match self.current() {
            Some(s) => s.points.extend(pts),
            None => {
                let mut points = vec![start];
                points.extend(pts);
                self.subpaths.push(SubPath { points, closed: false });
            }
        }
    }

    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        let mut pts = flatten_circle(Vector2::ZERO, 1.0);
        for p in pts.iter_mut() {
            p.set(cx + p.x * rx.abs(), cy + p.y * ry.abs());
        }
        self.push_closed(pts);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push_closed(vec![
            Vector2::new(x, y),
            Vector2::new(x + w, y),
            Vector2::new(x + w, y + h),
            Vector2::new(x, y + h),
        ]);
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill { style: self.fill_style.clone() });
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke {
            style: self.stroke_style.clone(),
            line_width: self.line_width,
            dash: self.line_dash.clone(),
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_style = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        // Canvas ignores non-positive and non-finite widths
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.line_dash = dash.to_vec();
    }

    fn is_point_in_path(&mut self, x: f64, y: f64) -> bool {
        let p = self.query_point(x, y);
        let wn: i32 = self.subpaths.iter().map(|s| winding_number(p, &s.points)).sum();
        wn != 0
    }

    fn is_point_in_stroke(&mut self, x: f64, y: f64) -> bool {
        let p = self.query_point(x, y);
        let half = 0.5 * self.line_width;
        let half2 = half * half;
        self.subpaths.iter().any(|s| {
            let n = s.points.len();
            if n == 1 {
                return false;
            }
            let segs = if s.closed { n } else { n - 1 };
            (0..segs).any(|i| {
                let (d2, _) = seg_distance_sq(p, s.points[i], s.points[(i + 1) % n]);
                d2 <= half2
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_fill_and_stroke_queries() {
        let mut ctx = PathHitContext::new(1.0);
        ctx.begin_path();
        ctx.ellipse(50.0, 50.0, 10.0, 10.0);
        assert!(ctx.is_point_in_path(50.0, 50.0));
        assert!(!ctx.is_point_in_path(65.0, 50.0));
        ctx.set_line_width(4.0);
        assert!(ctx.is_point_in_stroke(61.5, 50.0));
        assert!(!ctx.is_point_in_stroke(50.0, 50.0));
    }

    #[test]
    fn queries_are_in_device_pixels() {
        let mut ctx = PathHitContext::new(2.0);
        ctx.begin_path();
        ctx.rect(0.0, 0.0, 10.0, 10.0);
        assert!(ctx.is_point_in_path(15.0, 15.0));
        assert!(!ctx.is_point_in_path(25.0, 15.0));
    }

    #[test]
    fn open_line_has_no_interior() {
        let mut ctx = PathHitContext::new(1.0);
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.line_to(100.0, 0.0);
        ctx.set_line_width(12.0);
        assert!(!ctx.is_point_in_path(50.0, 0.0));
        assert!(ctx.is_point_in_stroke(50.0, 5.5));
        assert!(!ctx.is_point_in_stroke(50.0, 6.5));
    }

    #[test]
    fn quadratic_stroke_follows_curve() {
        let mut ctx = PathHitContext::new(1.0);
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.quadratic_curve_to(50.0, 100.0, 100.0, 0.0);
        ctx.set_line_width(4.0);
        assert!(ctx.is_point_in_stroke(50.0, 50.0));
        assert!(!ctx.is_point_in_stroke(50.0, 0.0));
    }

    #[test]
    fn paint_calls_are_recorded() {
        let mut ctx = PathHitContext::new(1.0);
        ctx.set_stroke_style(&with_alpha("#39a0fa", "cc"));
        ctx.set_line_width(3.0);
        ctx.stroke();
        assert_eq!(
            ctx.ops,
            vec![DrawOp::Stroke { style: "#39a0facc".into(), line_width: 3.0, dash: vec![] }]
        );
    }
}
