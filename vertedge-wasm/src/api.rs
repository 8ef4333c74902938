use crate::canvas::{CanvasContext, Surface};
use crate::Editor;
use js_sys::Array;
use vertedge::editor::config::EditorConfig;
use vertedge::editor::input::{Buttons, KeyEvent, Modifiers, PointerButton, PointerEvent, WheelEvent};
use vertedge::geometry::limits;
use vertedge::load::LoadToken;
use vertedge::{Shape, Vector2};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;
type JsValue = wasm_bindgen::JsValue;
use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes core logging to the browser console. Returns the level in effect.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> String {
    crate::logger::init(level).to_string()
}

fn modifiers(alt: bool, ctrl: bool, shift: bool) -> Modifiers {
    Modifiers { alt, ctrl, shift }
}

fn pointer(x: f64, y: f64, button: u8, buttons: u16, mods: Modifiers) -> Option<PointerEvent> {
    let button = PointerButton::from_index(button)?;
    Some(PointerEvent::new(Vector2::new(x, y), button).with_buttons(Buttons::from_bits(buttons)).with_modifiers(mods))
}

#[wasm_bindgen]
impl Editor {
    /// `config` is an optional partial `EditorConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Editor {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).unwrap_or_else(|e| {
                log::warn!("ignoring invalid editor config: {e}");
                EditorConfig::default()
            })
        };
        crate::Editor::rs_new(config)
    }
    pub fn version(&self) -> u64 {
        self.rs_version()
    }

    // Surface
    pub fn attach_canvas(&mut self, ctx: CanvasRenderingContext2d) {
        self.surface = Surface::Canvas(CanvasContext(ctx));
    }
    pub fn detach_canvas(&mut self) {
        self.surface = Surface::headless(self.inner.viewport.scale());
    }
    /// Canvas size in CSS pixels and the device pixel ratio.
    pub fn resize(&mut self, width: f64, height: f64, scale: f64) {
        self.inner.viewport.set_size(Vector2::new(width, height));
        if scale.is_finite() && scale > 0.0 {
            self.inner.viewport.set_scale(scale);
            if let Surface::Headless(_) = self.surface {
                self.surface = Surface::headless(scale);
            }
        }
    }
    pub fn resize_res(&mut self, width: f64, height: f64, scale: f64) -> JsValue {
        for (name, v) in [("width", width), ("height", height), ("scale", scale)] {
            if !v.is_finite() {
                return error::non_finite(name);
            }
        }
        if scale <= 0.0 {
            return error::out_of_range("scale", f64::MIN_POSITIVE, f64::MAX, scale);
        }
        self.resize(width, height, scale);
        error::ok(JsValue::UNDEFINED)
    }
    /// Clears and repaints the attached canvas. Returns `false` without one.
    pub fn render(&mut self) -> bool {
        let view = &self.inner.viewport;
        let (size, scale) = (view.size(), view.scale());
        if !self.surface.prepare_frame(size.x, size.y, scale) {
            return false;
        }
        self.inner.render(self.surface.context());
        true
    }

    // Input
    pub fn pointer_down(&mut self, x: f64, y: f64, button: u8, buttons: u16, alt: bool, ctrl: bool, shift: bool) -> bool {
        match pointer(x, y, button, buttons, modifiers(alt, ctrl, shift)) {
            Some(ev) => self.inner.pointer_down(self.surface.context(), &ev),
            None => false,
        }
    }
    pub fn pointer_move(&mut self, x: f64, y: f64, buttons: u16, alt: bool, ctrl: bool, shift: bool) -> bool {
        match pointer(x, y, 0, buttons, modifiers(alt, ctrl, shift)) {
            Some(ev) => self.inner.pointer_move(&ev),
            None => false,
        }
    }
    pub fn pointer_up(&mut self, x: f64, y: f64, button: u8, buttons: u16, alt: bool, ctrl: bool, shift: bool) -> bool {
        match pointer(x, y, button, buttons, modifiers(alt, ctrl, shift)) {
            Some(ev) => self.inner.pointer_up(self.surface.context(), &ev),
            None => false,
        }
    }
    pub fn pointer_leave(&mut self) {
        self.inner.pointer_leave();
    }
    pub fn key_down(&mut self, key: &str, alt: bool, ctrl: bool, shift: bool) -> bool {
        self.inner.key_down(&KeyEvent::new(key, modifiers(alt, ctrl, shift)))
    }
    pub fn key_up(&mut self, key: &str, alt: bool, ctrl: bool, shift: bool) {
        self.inner.key_up(&KeyEvent::new(key, modifiers(alt, ctrl, shift)));
    }
    pub fn wheel(&mut self, dy: f64) -> bool {
        self.inner.wheel(&WheelEvent { dy })
    }
    /// CSS cursor for the capture box handle under the pointer, if any.
    pub fn resize_cursor(&self) -> Option<String> {
        self.inner.resize_cursor()
    }

    // Tools
    pub fn tool(&self) -> String {
        self.inner.tools().id_of(self.inner.tool()).to_string()
    }
    pub fn set_tool(&mut self, id: &str) -> bool {
        self.inner.set_tool_by_id(id)
    }
    pub fn set_tool_res(&mut self, id: &str) -> JsValue {
        if !self.inner.set_tool_by_id(id) {
            return error::invalid_tool(id);
        }
        error::ok(JsValue::from_str(id))
    }
    /// Toolbar entries: `{ id, label, shortcut?, ctrl }`.
    pub fn tools(&self) -> Array {
        self.inner
            .tools()
            .entries()
            .iter()
            .map(|e| {
                let o = crate::interop::new_obj();
                crate::interop::set_kv(&o, "id", &JsValue::from_str(e.id));
                crate::interop::set_kv(&o, "label", &JsValue::from_str(e.label));
                if let Some(s) = &e.shortcut {
                    crate::interop::set_kv(&o, "shortcut", &JsValue::from_str(s.key));
                    crate::interop::set_kv(&o, "ctrl", &JsValue::from_bool(s.ctrl));
                }
                JsValue::from(o)
            })
            .collect()
    }
    pub fn highlight(&self) -> String {
        self.inner.highlight().to_string()
    }

    // Selection
    pub fn selection_count(&self) -> u32 {
        self.inner.selection().len() as u32
    }
    pub fn select_all(&mut self) {
        self.inner.select_all();
    }
    pub fn deselect_all(&mut self) {
        self.inner.deselect_all();
    }
    pub fn delete_selection(&mut self) -> bool {
        self.inner.delete_selection()
    }
    pub fn selection_style(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.selection_style()).unwrap_or(JsValue::NULL)
    }

    // Styling
    pub fn set_fill(&mut self, color: &str) -> bool {
        self.inner.set_fill(color)
    }
    pub fn set_stroke(&mut self, color: &str) -> bool {
        self.inner.set_stroke(color)
    }
    pub fn set_shape(&mut self, shape: u8) -> bool {
        Shape::from_index(shape).is_some_and(|s| self.inner.set_shape(s))
    }
    pub fn set_shape_res(&mut self, shape: u8) -> JsValue {
        let Some(s) = Shape::from_index(shape) else {
            return error::invalid_shape(shape);
        };
        if !self.inner.set_shape(s) {
            return error::empty_selection();
        }
        error::ok(JsValue::TRUE)
    }
    pub fn set_radius(&mut self, r: f64) -> bool {
        self.inner.set_radius(r)
    }
    pub fn set_radius_res(&mut self, r: f64) -> JsValue {
        if !r.is_finite() {
            return error::non_finite("r");
        }
        if !limits::in_radius_bounds(r) {
            return error::out_of_range("r", -limits::RADIUS_MAX, limits::RADIUS_MAX, r);
        }
        if !self.inner.set_radius(r) {
            return error::empty_selection();
        }
        error::ok(JsValue::TRUE)
    }
    pub fn set_line_width(&mut self, width: f64) -> bool {
        self.inner.set_line_width(width)
    }
    pub fn set_line_width_res(&mut self, width: f64) -> JsValue {
        if !width.is_finite() {
            return error::non_finite("width");
        }
        if !limits::in_width_bounds(width) {
            return error::out_of_range("width", 0.0, limits::WIDTH_MAX, width);
        }
        if !self.inner.set_line_width(width) {
            return error::empty_selection();
        }
        error::ok(JsValue::TRUE)
    }
    pub fn set_dashed(&mut self, dashed: bool) -> bool {
        self.inner.set_dashed(dashed)
    }

    // Grid and view
    pub fn set_grid(&mut self, enabled: bool, axes_visible: bool, x_step: f64, y_step: f64) {
        self.inner.grid.enabled = enabled;
        self.inner.grid.axes_visible = axes_visible;
        self.inner.grid.set_steps(x_step, y_step);
    }
    pub fn grid(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.grid).unwrap_or(JsValue::NULL)
    }
    pub fn center_view(&mut self) {
        self.inner.center_view();
    }
    pub fn zoom(&self) -> f64 {
        self.inner.viewport.zoom()
    }
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() || zoom <= 0.0 {
            return false;
        }
        self.inner.viewport.set_zoom(zoom);
        true
    }
    pub fn set_zoom_res(&mut self, zoom: f64) -> JsValue {
        if !zoom.is_finite() {
            return error::non_finite("zoom");
        }
        if zoom <= 0.0 {
            return error::out_of_range("zoom", f64::MIN_POSITIVE, f64::MAX, zoom);
        }
        self.inner.viewport.set_zoom(zoom);
        error::ok(JsValue::from_f64(zoom))
    }
    pub fn center(&self) -> JsValue {
        let c = self.inner.viewport.center();
        serde_wasm_bindgen::to_value(&vec![c.x, c.y]).unwrap_or(JsValue::NULL)
    }
    /// World-space capture box `{x, y, w, h}`, or `null` outside the capture tool.
    pub fn capture_area(&self) -> JsValue {
        self.inner.capture_area().map_or(JsValue::NULL, |r| crate::interop::rect_obj(&r))
    }

    // Graph data
    pub fn vertex_count(&self) -> u32 {
        self.inner.graph.vertex_count() as u32
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.graph.edge_count() as u32
    }
    /// `{ ids: Uint32Array, positions: Float64Array }` with interleaved x, y.
    pub fn get_vertex_data(&self) -> JsValue {
        let g = &self.inner.graph;
        let mut ids = Vec::with_capacity(g.vertex_count());
        let mut pos = Vec::with_capacity(2 * g.vertex_count());
        for id in g.vertex_ids() {
            if let Some(v) = g.vertex(id) {
                ids.push(id.0);
                pos.push(v.x);
                pos.push(v.y);
            }
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&ids).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f64(&pos).into());
        obj.into()
    }

    // Documents
    pub fn title(&self) -> String {
        self.inner.title().to_string()
    }
    pub fn set_title(&mut self, title: &str) {
        self.inner.graph.set_title(Some(title.to_string()));
    }
    pub fn to_json(&self) -> String {
        self.inner.to_json()
    }
    /// Starts a host-side fetch; pass the token back with the result.
    pub fn begin_load(&mut self) -> u64 {
        self.inner.begin_load().0
    }
    pub fn finish_load(&mut self, token: u64, text: &str) -> bool {
        self.inner.finish_load(LoadToken(token), text).is_ok()
    }
    pub fn finish_load_res(&mut self, token: u64, text: &str) -> JsValue {
        match self.inner.finish_load(LoadToken(token), text) {
            Ok(()) => error::ok(JsValue::from_f64(self.inner.graph.vertex_count() as f64)),
            Err(e) => error::from_graph_error(&e),
        }
    }
    pub fn fail_load(&mut self, token: u64, message: &str) {
        self.inner.fail_load(LoadToken(token), message);
    }
    /// Loads a document in one step, as for a local file.
    pub fn load_json(&mut self, text: &str) -> bool {
        let token = self.inner.begin_load();
        self.inner.finish_load(token, text).is_ok()
    }
    pub fn load_json_res(&mut self, text: &str) -> JsValue {
        let token = self.inner.begin_load();
        match self.inner.finish_load(token, text) {
            Ok(()) => error::ok(JsValue::from_f64(self.inner.graph.vertex_count() as f64)),
            Err(e) => error::from_graph_error(&e),
        }
    }
    /// Raw data editor input; `false` marks the text invalid.
    pub fn edit_json(&mut self, text: &str) -> bool {
        self.inner.edit_json(text)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(JsValue::UNDEFINED)
    }
}
