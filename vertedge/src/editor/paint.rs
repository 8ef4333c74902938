use super::capture::BoxRegion;
use super::drag::{DragMode, Ghost};
use super::input::PointerButton;
use super::tool::Tool;
use super::Editor;
use crate::geometry::rect::Rect;
use crate::geometry::vector::Vector2;
use crate::geometry::viewport::Viewport;
use crate::model::{color, Element};
use crate::render::{with_alpha, DrawContext};

const GRID_STYLE: &str = "#ffffff11";
const AXIS_STYLE: &str = "#ffffff33";
const CROSSHAIR_STYLE: &str = "#ffffff22";
/// Grid lines closer than this on screen are not drawn.
const MIN_GRID_SPACING: f64 = 8.0;
const CROSSHAIR_SIZE: f64 = 8.0;
const GHOST_HANDLE_SIZE: f64 = 6.0;
const DOT_RADIUS: f64 = 5.0;
const HANDLE_SIZE: f64 = 12.0;
const PREVIEW_DASH: [f64; 2] = [5.0, 5.0];

fn line(ctx: &mut dyn DrawContext, a: Vector2, b: Vector2) {
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.stroke();
}

fn dot(ctx: &mut dyn DrawContext, c: Vector2) {
    ctx.begin_path();
    ctx.ellipse(c.x, c.y, DOT_RADIUS, DOT_RADIUS);
    ctx.fill();
}

/// World-space lines of one grid axis across `[lo, hi]`.
fn grid_positions(lo: f64, hi: f64, step: f64, skip_zero: bool) -> impl Iterator<Item = f64> {
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).filter(move |i| !(skip_zero && *i == 0)).map(move |i| i as f64 * step)
}

fn draw_grid(ctx: &mut dyn DrawContext, view: &Viewport, x_step: f64, y_step: f64, skip_axes: bool) {
    let size = view.size();
    let top_left = view.locate(Vector2::ZERO);
    let bottom_right = view.locate(size);
    ctx.set_stroke_style(GRID_STYLE);
    ctx.set_line_width(2.0);
    ctx.set_line_dash(&[]);
    if x_step * view.zoom() >= MIN_GRID_SPACING {
        for x in grid_positions(top_left.x, bottom_right.x, x_step, skip_axes) {
            let sx = view.transform_x(x);
            line(ctx, Vector2::new(sx, 0.0), Vector2::new(sx, size.y));
        }
    }
    if y_step * view.zoom() >= MIN_GRID_SPACING {
        for y in grid_positions(top_left.y, bottom_right.y, y_step, skip_axes) {
            let sy = view.transform_y(y);
            line(ctx, Vector2::new(0.0, sy), Vector2::new(size.x, sy));
        }
    }
}

fn draw_axes(ctx: &mut dyn DrawContext, view: &Viewport) {
    let size = view.size();
    let origin = view.transform(Vector2::ZERO);
    ctx.set_stroke_style(AXIS_STYLE);
    ctx.set_line_width(2.0);
    ctx.set_line_dash(&[]);
    line(ctx, Vector2::new(origin.x, 0.0), Vector2::new(origin.x, size.y));
    line(ctx, Vector2::new(0.0, origin.y), Vector2::new(size.x, origin.y));
}

/// Resize handles of a screen-space box with the region each one grabs.
fn handles(area: &Rect, show_sides: bool) -> Vec<(Vector2, BoxRegion)> {
    let mut out = vec![
        (area.xy(), BoxRegion::NEGATIVE_X | BoxRegion::NEGATIVE_Y),
        (area.xwy(), BoxRegion::POSITIVE_X | BoxRegion::NEGATIVE_Y),
        (area.xyh(), BoxRegion::NEGATIVE_X | BoxRegion::POSITIVE_Y),
        (area.xwyh(), BoxRegion::POSITIVE_X | BoxRegion::POSITIVE_Y),
    ];
    if show_sides {
        out.extend([
            (Vector2::new(area.cx(), area.y), BoxRegion::NEGATIVE_Y),
            (Vector2::new(area.cx(), area.yh()), BoxRegion::POSITIVE_Y),
            (Vector2::new(area.x, area.cy()), BoxRegion::NEGATIVE_X),
            (Vector2::new(area.xw(), area.cy()), BoxRegion::POSITIVE_X),
        ]);
    }
    out
}

impl Editor {
    /// Paints the whole scene. The canvas is expected to be cleared and
    /// transformed before painting.
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        let view = &self.viewport;
        let highlight = self.highlight();
        let hover = self.hover_element(ctx);

        if self.grid.enabled {
            draw_grid(ctx, view, self.grid.x_step, self.grid.y_step, self.grid.axes_visible);
        }
        if self.grid.axes_visible {
            draw_axes(ctx, view);
        }

        self.draw_ghosts(ctx, highlight);

        for id in self.graph.edge_ids() {
            let el = Element::Edge(id);
            let (Some(e), Some(geom)) = (self.graph.edge(id), self.graph.edge_geometry(id)) else { continue };
            e.draw(&geom, ctx, hover == Some(el), self.selection.contains(&el), highlight, view);
        }
        for id in self.graph.vertex_ids() {
            let el = Element::Vertex(id);
            let Some(v) = self.graph.vertex(id) else { continue };
            v.draw(ctx, hover == Some(el), self.selection.contains(&el), highlight, view);
        }

        let state = self.drag.state();
        let panning = state.is_some_and(|s| {
            s.button == PointerButton::Right || matches!(self.tool, Tool::Move | Tool::Capture)
        });
        if panning {
            if !self.cursor.is_nan() {
                let c = self.cursor;
                ctx.set_stroke_style(CROSSHAIR_STYLE);
                ctx.set_line_width(2.0);
                ctx.set_line_dash(&[]);
                line(ctx, c - Vector2::new(CROSSHAIR_SIZE, 0.0), c + Vector2::new(CROSSHAIR_SIZE, 0.0));
                line(ctx, c - Vector2::new(0.0, CROSSHAIR_SIZE), c + Vector2::new(0.0, CROSSHAIR_SIZE));
            }
        } else if self.tool == Tool::Draw {
            self.draw_preview(ctx, hover, highlight);
        } else if let Some(s) = state.filter(|s| s.mode == DragMode::RubberBand) {
            if !self.cursor.is_nan() {
                let area = Rect::from_points(s.anchor, self.cursor);
                let [a, b, c, d] = area.corners();
                ctx.set_stroke_style(&with_alpha(highlight, "77"));
                ctx.set_line_width(2.0);
                ctx.set_line_dash(&PREVIEW_DASH);
                line(ctx, a, b);
                line(ctx, b, c);
                line(ctx, c, d);
                line(ctx, d, a);
            }
        }

        if self.tool == Tool::Capture {
            self.draw_capture(ctx);
        }
    }

    fn draw_ghosts(&self, ctx: &mut dyn DrawContext, highlight: &str) {
        let Some(state) = self.drag.state() else { return };
        let view = &self.viewport;
        for (_, ghost) in &state.ghosts {
            match ghost {
                Ghost::Vertex(v) => v.draw(ctx, false, false, highlight, view),
                Ghost::Edge(e) => {
                    let Some(geom) = self.graph.geometry_of(e) else { continue };
                    e.draw(&geom, ctx, false, false, highlight, view);
                    if let Some(cp) = geom.control_point() {
                        let c = view.transform(cp);
                        let s = GHOST_HANDLE_SIZE;
                        ctx.set_stroke_style(&with_alpha(highlight, "77"));
                        ctx.set_line_width(2.0);
                        ctx.set_line_dash(&[]);
                        ctx.begin_path();
                        ctx.move_to(c.x, c.y - s);
                        ctx.line_to(c.x - s, c.y);
                        ctx.line_to(c.x, c.y + s);
                        ctx.line_to(c.x + s, c.y);
                        ctx.close_path();
                        ctx.stroke();
                    }
                }
            }
        }
    }

    /// Dashed edge from the pending start vertex to the hovered vertex or the
    /// cursor, plus markers where a click would land.
    fn draw_preview(&self, ctx: &mut dyn DrawContext, hover: Option<Element>, highlight: &str) {
        if self.cursor.is_nan() {
            return;
        }
        let view = &self.viewport;
        let snapped = view.transform(self.grid.snap(view.locate(self.cursor)));
        let start = self.first_vertex.and_then(|id| self.graph.vertex(id)).map(|v| view.transform(v.pos()));
        ctx.set_fill_style(&with_alpha(highlight, "aa"));
        if let Some(start) = start {
            let end = match hover {
                Some(Element::Vertex(id)) => self.graph.vertex(id).map_or(snapped, |v| view.transform(v.pos())),
                _ => snapped,
            };
            ctx.set_stroke_style(&with_alpha(highlight, "aa"));
            ctx.set_line_width(2.0);
            ctx.set_line_dash(&PREVIEW_DASH);
            if self.modifiers.ctrl {
                let c = start.midpoint(snapped);
                let r = 0.5 * start.distance(snapped);
                ctx.begin_path();
                ctx.ellipse(c.x, c.y, r, r);
                ctx.stroke();
            } else {
                line(ctx, start, end);
            }
            dot(ctx, start);
        }
        if !matches!(hover, Some(Element::Vertex(_))) {
            dot(ctx, snapped);
        }
    }

    fn draw_capture(&self, ctx: &mut dyn DrawContext) {
        let Some(area) = self.capture_area else { return };
        let screen = area.transformed(&self.viewport).normalized();
        ctx.set_fill_style(&with_alpha(color::ORANGE, "33"));
        ctx.set_stroke_style(&with_alpha(color::ORANGE, "aa"));
        ctx.set_line_width(2.0);
        ctx.set_line_dash(&[]);
        ctx.begin_path();
        ctx.rect(screen.x, screen.y, screen.w, screen.h);
        ctx.fill();
        ctx.stroke();

        let dragged = self.drag.state().and_then(|s| s.capture).map(|c| c.region);
        let active = dragged.or_else(|| self.resize_box_region());
        let fill = with_alpha(color::ORANGE, if dragged.is_some() { "aa" } else { "77" });
        let proximity = self.config.resize_proximity_pixels;
        let show_sides = screen.w > 2.0 * proximity || screen.h > 2.0 * proximity;
        let half = 0.5 * HANDLE_SIZE;
        for (c, region) in handles(&screen, show_sides) {
            ctx.begin_path();
            ctx.rect(c.x - half, c.y - half, HANDLE_SIZE, HANDLE_SIZE);
            if active == Some(region) {
                ctx.set_fill_style(&fill);
                ctx.fill();
            }
            ctx.stroke();
        }
    }
}
