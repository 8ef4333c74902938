use std::f64::consts::TAU;

use js_sys::Array;
use vertedge::render::{DrawContext, PathHitContext};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// [`DrawContext`] over a browser 2D context. Fallible canvas calls only fail
/// for non-finite arguments, which the canvas ignores anyway.
pub struct CanvasContext(pub CanvasRenderingContext2d);

impl DrawContext for CanvasContext {
    fn begin_path(&mut self) { self.0.begin_path(); }
    fn close_path(&mut self) { self.0.close_path(); }
    fn move_to(&mut self, x: f64, y: f64) { self.0.move_to(x, y); }
    fn line_to(&mut self, x: f64, y: f64) { self.0.line_to(x, y); }
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.0.quadratic_curve_to(cpx, cpy, x, y);
    }
    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        // a fresh subpath keeps the circle from joining the previous point
        self.0.move_to(cx + rx, cy);
        let _ = self.0.ellipse(cx, cy, rx, ry, 0.0, 0.0, TAU);
    }
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.0.rect(x, y, w, h); }
    fn fill(&mut self) { self.0.fill(); }
    fn stroke(&mut self) { self.0.stroke(); }
    fn set_fill_style(&mut self, color: &str) { self.0.set_fill_style_str(color); }
    fn set_stroke_style(&mut self, color: &str) { self.0.set_stroke_style_str(color); }
    fn set_line_width(&mut self, width: f64) { self.0.set_line_width(width); }
    fn set_line_dash(&mut self, dash: &[f64]) {
        let arr: Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
        let _ = self.0.set_line_dash(&arr);
    }
    fn is_point_in_path(&mut self, x: f64, y: f64) -> bool { self.0.is_point_in_path_with_f64(x, y) }
    fn is_point_in_stroke(&mut self, x: f64, y: f64) -> bool {
        self.0.is_point_in_stroke_with_x_and_y(x, y)
    }
}

/// Where the editor paints and hit-tests: an attached canvas, or the
/// geometric fallback before one is attached.
pub enum Surface {
    Canvas(CanvasContext),
    Headless(PathHitContext),
}

impl Surface {
    pub fn headless(scale: f64) -> Surface { Surface::Headless(PathHitContext::new(scale)) }

    pub fn context(&mut self) -> &mut dyn DrawContext {
        match self {
            Surface::Canvas(c) => c as &mut dyn DrawContext,
            Surface::Headless(h) => {
                // nothing is painted headless; keep the op log from growing
                h.ops.clear();
                h as &mut dyn DrawContext
            }
        }
    }

    /// Resets the transform to the device pixel ratio and clears the canvas.
    /// Returns `false` for the headless surface.
    pub fn prepare_frame(&mut self, width: f64, height: f64, scale: f64) -> bool {
        match self {
            Surface::Canvas(c) => {
                let _ = c.0.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
                c.0.clear_rect(0.0, 0.0, width, height);
                true
            }
            Surface::Headless(_) => false,
        }
    }
}
