//! Path construction, painting and hit-testing for vertices and edges.

use crate::geometry::viewport::Viewport;
use crate::geometry::vector::Vector2;
use crate::model::{Edge, EdgeGeometry, Shape, Vertex, DIAMOND_FACTOR};
use crate::render::{with_alpha, DrawContext};

/// Extra stroke width of the hover/selection halo, in screen pixels.
pub const HALO_PADDING: f64 = 4.0;
/// Smallest clickable stroke for unselected elements, in screen pixels.
pub const MIN_HIT_WIDTH: f64 = 12.0;
/// Radius of the clickable area around an edge's control point.
pub const HANDLE_HIT_RADIUS: f64 = 10.0;
/// Half-diagonal of the control point marker.
pub const HANDLE_MARKER_SIZE: f64 = 8.0;

const ALPHA_SELECTED: &str = "cc";
const ALPHA_HOVER: &str = "99";
const ALPHA_GUIDE: &str = "77";
const GUIDE_DASH: [f64; 2] = [2.0, 5.0];

fn hit_width(line_width: f64, select: bool, view: &Viewport) -> f64 {
    let w = line_width * view.zoom() + HALO_PADDING;
    if select { w } else { w.max(MIN_HIT_WIDTH) }
}

fn scaled_dash(dash: &[f64], line_width: f64, view: &Viewport) -> Vec<f64> {
    dash.iter().map(|d| d * line_width * view.zoom()).collect()
}

fn diamond(ctx: &mut dyn DrawContext, c: Vector2, half: f64) {
    ctx.move_to(c.x, c.y - half);
    ctx.line_to(c.x - half, c.y);
    ctx.line_to(c.x, c.y + half);
    ctx.line_to(c.x + half, c.y);
    ctx.close_path();
}

fn halo(ctx: &mut dyn DrawContext, select: bool, highlight: &str, line_width: f64, view: &Viewport) {
    let alpha = if select { ALPHA_SELECTED } else { ALPHA_HOVER };
    ctx.set_stroke_style(&with_alpha(highlight, alpha));
    ctx.set_line_width(line_width * view.zoom() + HALO_PADDING);
    ctx.set_line_dash(&[]);
}

impl Vertex {
    pub fn path(&self, ctx: &mut dyn DrawContext, view: &Viewport) {
        let pos = view.transform(self.pos());
        let r = self.r.abs() * view.zoom();
        ctx.begin_path();
        match self.shape {
            Shape::Circle => ctx.ellipse(pos.x, pos.y, r, r),
            Shape::Square => ctx.rect(pos.x - r, pos.y - r, 2.0 * r, 2.0 * r),
            Shape::Diamond => diamond(ctx, pos, DIAMOND_FACTOR * r),
        }
    }

    /// Paints the vertex, preceded by a highlight halo when hovered or selected.
    pub fn draw(&self, ctx: &mut dyn DrawContext, hover: bool, select: bool, highlight: &str, view: &Viewport) {
        if hover || select {
            halo(ctx, select, highlight, self.line_width, view);
            self.path(ctx, view);
            ctx.stroke();
        }
        ctx.set_fill_style(&self.fill);
        ctx.set_stroke_style(&self.stroke);
        ctx.set_line_width(self.line_width * view.zoom());
        ctx.set_line_dash(&scaled_dash(&self.line_dash, self.line_width, view));
        self.path(ctx, view);
        if self.r.abs() > 0.0 {
            ctx.fill();
        }
        if self.line_width > 0.0 {
            ctx.stroke();
        }
    }

    /// Hit test. `pos` is in world coordinates unless `screen` is set.
    pub fn contains(&self, ctx: &mut dyn DrawContext, pos: Vector2, select: bool, view: &Viewport, screen: bool) -> bool {
        let pos = if screen { pos } else { view.transform(pos) };
        ctx.set_line_width(hit_width(self.line_width, select, view));
        self.path(ctx, view);
        let (x, y) = (pos.x * view.scale(), pos.y * view.scale());
        ctx.is_point_in_path(x, y) || ctx.is_point_in_stroke(x, y)
    }
}

impl EdgeGeometry {
    pub fn path(&self, ctx: &mut dyn DrawContext, view: &Viewport) {
        ctx.begin_path();
        match *self {
            EdgeGeometry::Line { a, b } => {
                let (a, b) = (view.transform(a), view.transform(b));
                ctx.move_to(a.x, a.y);
                ctx.line_to(b.x, b.y);
            }
            EdgeGeometry::Curve { a, cp, b } => {
                let (a, cp, b) = (view.transform(a), view.transform(cp), view.transform(b));
                ctx.move_to(a.x, a.y);
                ctx.quadratic_curve_to(cp.x, cp.y, b.x, b.y);
            }
            EdgeGeometry::Loop { anchor, cp } => {
                let (a, cp) = (view.transform(anchor), view.transform(cp));
                let radius = 0.5 * a.distance(cp);
                let c = a.midpoint(cp);
                ctx.ellipse(c.x, c.y, radius, radius);
            }
        }
    }
}

impl Edge {
    /// Paints the edge. Selected curves and loops also get their control
    /// handle, and curves get guide lines from both endpoints to it.
    pub fn draw(
        &self,
        geom: &EdgeGeometry,
        ctx: &mut dyn DrawContext,
        hover: bool,
        select: bool,
        highlight: &str,
        view: &Viewport,
    ) {
        if hover || select {
            halo(ctx, select, highlight, self.line_width, view);
            geom.path(ctx, view);
            ctx.stroke();
        }
        ctx.set_stroke_style(&self.stroke);
        ctx.set_line_width(self.line_width * view.zoom());
        ctx.set_line_dash(&scaled_dash(&self.line_dash, self.line_width, view));
        geom.path(ctx, view);
        if self.line_width > 0.0 {
            ctx.stroke();
        }
        let Some(cp) = geom.control_point() else {
            return;
        };
        if !select {
            return;
        }
        let cp = view.transform(cp);
        if let EdgeGeometry::Curve { a, b, .. } = *geom {
            let (a, b) = (view.transform(a), view.transform(b));
            ctx.set_stroke_style(&with_alpha(highlight, ALPHA_GUIDE));
            ctx.set_line_width(2.0);
            ctx.set_line_dash(&GUIDE_DASH);
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(cp.x, cp.y);
            ctx.move_to(b.x, b.y);
            ctx.line_to(cp.x, cp.y);
            ctx.stroke();
        }
        ctx.set_fill_style(&with_alpha(highlight, ALPHA_SELECTED));
        ctx.set_line_dash(&[]);
        ctx.begin_path();
        diamond(ctx, cp, HANDLE_MARKER_SIZE);
        ctx.fill();
    }

    /// Hit test against the stroke, or the control handle of a curve/loop.
    pub fn contains(
        &self,
        geom: &EdgeGeometry,
        ctx: &mut dyn DrawContext,
        pos: Vector2,
        select: bool,
        view: &Viewport,
        screen: bool,
    ) -> bool {
        let pos = if screen { pos } else { view.transform(pos) };
        let (x, y) = (pos.x * view.scale(), pos.y * view.scale());
        if let Some(cp) = geom.control_point() {
            let cp = view.transform(cp);
            ctx.begin_path();
            ctx.ellipse(cp.x, cp.y, HANDLE_HIT_RADIUS, HANDLE_HIT_RADIUS);
            if ctx.is_point_in_path(x, y) {
                return true;
            }
        }
        ctx.set_line_width(hit_width(self.line_width, select, view));
        geom.path(ctx, view);
        ctx.is_point_in_stroke(x, y)
    }
}
