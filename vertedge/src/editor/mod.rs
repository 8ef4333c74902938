//! Interactive editing: tools, pointer/key handling and selection.
//!
//! The host forwards normalised input events and a [`DrawContext`] for hit
//! testing; the editor mutates its [`Graph`] synchronously inside each
//! handler and paints everything in [`Editor::render`].

pub mod capture;
pub mod config;
pub mod drag;
pub mod input;
pub mod tool;
mod paint;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::algorithms::bounds::{content_bounds, vertex_extent_center};
use crate::algorithms::picking::element_at;
use crate::algorithms::selection::elements_in_box;
use crate::error::{GraphError, Result};
use crate::geometry::curve::control_angle;
use crate::geometry::limits;
use crate::geometry::rect::Rect;
use crate::geometry::vector::Vector2;
use crate::geometry::viewport::Viewport;
use crate::load::{LoadToken, LoadTracker};
use crate::model::{EdgeKind, Element, Shape, Vertex, VertexId};
use crate::render::DrawContext;
use crate::Graph;

use capture::{resize_region, BoxRegion, CaptureResize};
use config::{EditorConfig, GridSettings};
use drag::{DragMode, DragPhase, DragState, Ghost};
use input::{KeyEvent, Modifiers, PointerButton, PointerEvent, WheelEvent};
use tool::{Tool, ToolRegistry};

pub const LOADING_TITLE: &str = "Loading...";

/// Style values shared by every selected element; `None` where they differ.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStyle {
    pub has_vertices: bool,
    pub fill: Option<String>,
    pub shape: Option<Shape>,
    pub radius: Option<f64>,
    pub stroke: Option<String>,
    pub line_width: Option<f64>,
    pub dashed: bool,
}

fn common<T: PartialEq>(mut values: impl Iterator<Item = T>) -> Option<T> {
    let first = values.next()?;
    values.all(|v| v == first).then_some(first)
}

pub struct Editor {
    pub graph: Graph,
    selection: Vec<Element>,
    pub viewport: Viewport,
    pub config: EditorConfig,
    pub grid: GridSettings,
    tools: ToolRegistry,
    tool: Tool,
    drag: DragPhase,
    first_vertex: Option<VertexId>,
    capture_area: Option<Rect>,
    cursor: Vector2,
    modifiers: Modifiers,
    loads: LoadTracker,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            graph: Graph::new(),
            selection: Vec::new(),
            viewport: Viewport::default(),
            config,
            grid: GridSettings::default(),
            tools: ToolRegistry::standard(),
            tool: Tool::default(),
            drag: DragPhase::Idle,
            first_vertex: None,
            capture_area: None,
            cursor: Vector2::NAN,
            modifiers: Modifiers::default(),
            loads: LoadTracker::new(),
        }
    }

    pub fn selection(&self) -> &[Element] {
        &self.selection
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn drag(&self) -> &DragPhase {
        &self.drag
    }

    /// Start vertex of an edge being drawn.
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.first_vertex
    }

    pub fn capture_area(&self) -> Option<Rect> {
        self.capture_area
    }

    /// Last pointer position in screen pixels; NaN when off the canvas.
    pub fn cursor(&self) -> Vector2 {
        self.cursor
    }

    pub fn title(&self) -> &str {
        self.graph.title().unwrap_or(&self.config.default_title)
    }

    /// Highlight colour of the active tool.
    pub fn highlight(&self) -> &str {
        self.tool.accent(&self.config.highlight_color)
    }

    fn snap(&self, pos: Vector2) -> Vector2 {
        self.grid.snap(pos)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        debug!("tool {:?} -> {:?}", self.tool, tool);
        if self.tool == Tool::Draw {
            self.first_vertex = None;
        }
        if self.tool == Tool::Capture {
            self.capture_area = None;
        }
        self.tool = tool;
        if tool == Tool::Capture {
            let targets = if self.selection.is_empty() { self.graph.elements() } else { self.selection.clone() };
            self.fit_capture_to(&targets);
        }
    }

    pub fn set_tool_by_id(&mut self, id: &str) -> bool {
        match self.tools.by_id(id) {
            Some(tool) => {
                self.set_tool(tool);
                true
            }
            None => false,
        }
    }

    pub fn hover_element(&self, ctx: &mut dyn DrawContext) -> Option<Element> {
        if self.drag.is_dragging() || !self.tool.allows_selection() {
            return None;
        }
        element_at(&self.graph, ctx, &self.viewport, self.cursor, &self.selection)
    }

    /// Capture box region under the cursor.
    pub fn resize_box_region(&self) -> Option<BoxRegion> {
        let area = self.capture_area?.transformed(&self.viewport);
        Some(resize_region(&area, self.cursor, self.config.resize_proximity_pixels))
    }

    /// CSS cursor for the capture box side or corner being hovered or dragged.
    pub fn resize_cursor(&self) -> Option<String> {
        if self.tool != Tool::Capture {
            return None;
        }
        match self.drag.state().and_then(|s| s.capture) {
            Some(c) => c.region.cursor(),
            None => self.resize_box_region().and_then(|r| r.cursor()),
        }
    }

    // ---- selection ----

    pub fn select_all(&mut self) {
        self.selection = self.graph.elements();
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Removes the selected elements. Returns `false` when nothing is selected.
    pub fn delete_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let removed = self.graph.remove_elements(&self.selection);
        debug!("deleted {} of {} selected elements", removed, self.selection.len());
        self.selection.clear();
        if self.first_vertex.is_some_and(|v| self.graph.vertex(v).is_none()) {
            self.first_vertex = None;
        }
        true
    }

    /// Centres the view on the vertices, or on the origin without any.
    pub fn center_view(&mut self) {
        self.viewport.set_center(vertex_extent_center(&self.graph).unwrap_or(Vector2::ZERO));
    }

    pub fn fit_capture_to(&mut self, elements: &[Element]) {
        self.capture_area = content_bounds(&self.graph, elements);
    }

    // ---- styling ----

    fn selected_vertices(&self) -> Vec<VertexId> {
        self.selection
            .iter()
            .filter_map(|el| match el {
                Element::Vertex(id) => Some(*id),
                Element::Edge(_) => None,
            })
            .collect()
    }

    fn for_each_vertex(&mut self, f: impl Fn(&mut Vertex)) -> bool {
        let ids = self.selected_vertices();
        for id in &ids {
            if let Some(v) = self.graph.vertex_mut(*id) {
                f(v);
            }
        }
        !ids.is_empty()
    }

    /// Applies stroke-level style to every selected element.
    fn for_each_stroke(&mut self, f: impl Fn(&mut String, &mut f64, &mut Vec<f64>)) -> bool {
        for el in self.selection.clone() {
            match el {
                Element::Vertex(id) => {
                    if let Some(v) = self.graph.vertex_mut(id) {
                        f(&mut v.stroke, &mut v.line_width, &mut v.line_dash);
                    }
                }
                Element::Edge(id) => {
                    if let Some(e) = self.graph.edge_mut(id) {
                        f(&mut e.stroke, &mut e.line_width, &mut e.line_dash);
                    }
                }
            }
        }
        !self.selection.is_empty()
    }

    pub fn set_fill(&mut self, color: &str) -> bool {
        self.for_each_vertex(|v| v.fill = color.to_string())
    }

    pub fn set_shape(&mut self, shape: Shape) -> bool {
        self.for_each_vertex(|v| v.shape = shape)
    }

    pub fn set_radius(&mut self, r: f64) -> bool {
        if !limits::in_radius_bounds(r) {
            warn!("rejected vertex radius {r}");
            return false;
        }
        self.for_each_vertex(|v| v.r = r)
    }

    pub fn set_stroke(&mut self, color: &str) -> bool {
        self.for_each_stroke(|stroke, _, _| *stroke = color.to_string())
    }

    pub fn set_line_width(&mut self, width: f64) -> bool {
        if !limits::in_width_bounds(width) {
            warn!("rejected line width {width}");
            return false;
        }
        self.for_each_stroke(|_, w, _| *w = width)
    }

    pub fn set_dashed(&mut self, dashed: bool) -> bool {
        let dash = if dashed { self.config.default_line_dash.clone() } else { Vec::new() };
        self.for_each_stroke(|_, _, d| *d = dash.clone())
    }

    pub fn selection_style(&self) -> SelectionStyle {
        let vertices: Vec<&Vertex> = self.selected_vertices().into_iter().filter_map(|id| self.graph.vertex(id)).collect();
        let strokes: Vec<(&str, f64, usize)> = self
            .selection
            .iter()
            .filter_map(|el| match *el {
                Element::Vertex(id) => self.graph.vertex(id).map(|v| (v.stroke.as_str(), v.line_width, v.line_dash.len())),
                Element::Edge(id) => self.graph.edge(id).map(|e| (e.stroke.as_str(), e.line_width, e.line_dash.len())),
            })
            .collect();
        SelectionStyle {
            has_vertices: !vertices.is_empty(),
            fill: common(vertices.iter().map(|v| v.fill.as_str())).map(String::from),
            shape: common(vertices.iter().map(|v| v.shape)),
            radius: common(vertices.iter().map(|v| v.r)),
            stroke: common(strokes.iter().map(|s| s.0)).map(String::from),
            line_width: common(strokes.iter().map(|s| s.1)),
            dashed: strokes.iter().any(|s| s.2 > 0),
        }
    }

    // ---- documents ----

    fn install(&mut self, g: Graph) {
        self.graph.replace_with(g);
        self.selection.clear();
        self.first_vertex = None;
        self.drag = DragPhase::Idle;
        if self.graph.title().is_none() {
            let title = self.config.default_title.clone();
            self.graph.set_title(Some(title));
        }
    }

    pub fn to_json(&self) -> String {
        self.graph.to_json()
    }

    /// Starts an asynchronous load; the host resolves it with
    /// [`Editor::finish_load`] or [`Editor::fail_load`].
    pub fn begin_load(&mut self) -> LoadToken {
        self.graph.set_title(Some(LOADING_TITLE.to_string()));
        self.loads.begin()
    }

    /// Applies a fetched document if `token` is still the newest request.
    pub fn finish_load(&mut self, token: LoadToken, text: &str) -> Result<()> {
        if !self.loads.is_current(token) {
            debug!("discarding stale load {}", token.0);
            return Err(GraphError::StaleLoad { token: token.0 });
        }
        self.loads.finish(token);
        match Graph::from_json(text) {
            Ok(g) => {
                info!("loaded graph: {} vertices, {} edges", g.vertex_count(), g.edge_count());
                self.install(g);
                self.center_view();
                Ok(())
            }
            Err(e) => {
                warn!("rejected graph document: {e}");
                self.restore_title();
                Err(e)
            }
        }
    }

    pub fn fail_load(&mut self, token: LoadToken, message: &str) {
        if !self.loads.finish(token) {
            debug!("ignoring failure of stale load {}", token.0);
            return;
        }
        warn!("graph load failed: {message}");
        self.restore_title();
    }

    fn restore_title(&mut self) {
        let title = self.config.default_title.clone();
        self.graph.set_title(Some(title));
    }

    /// Raw data editor input. Returns whether the text was a valid graph;
    /// an empty text clears the graph.
    pub fn edit_json(&mut self, text: &str) -> bool {
        match Graph::from_json(text) {
            Ok(g) => {
                self.install(g);
                true
            }
            Err(GraphError::Parse(_)) => false,
            Err(e) => {
                error!("graph edit rejected: {e}");
                false
            }
        }
    }

    // ---- input ----

    /// Connects the pending start vertex to `v`, or makes `v` the start.
    fn connect_or_start(&mut self, v: VertexId) {
        match self.first_vertex {
            Some(first) if first != v => {
                if let Err(e) = self.graph.add_edge(first, v) {
                    error!("could not connect vertices: {e}");
                }
                self.first_vertex = None;
            }
            _ => self.first_vertex = Some(v),
        }
    }

    fn draw_press(&mut self, target: Option<Element>, p: Vector2) -> Element {
        let interval = self.config.curve_sampling_interval;
        let v = match target {
            Some(Element::Vertex(v)) => v,
            Some(Element::Edge(e)) if self.graph.edge_kind(e) != Some(EdgeKind::Loop) => {
                match self.graph.split_edge(e, p, interval) {
                    Some(v) => v,
                    None => self.graph.add_vertex(Vertex::at(p)),
                }
            }
            _ => self.graph.add_vertex(Vertex::at(p)),
        };
        self.connect_or_start(v);
        Element::Vertex(v)
    }

    fn update_selection(&mut self, target: Option<Element>, can_select: bool, shift: bool) {
        match target {
            None => {
                if can_select && !shift {
                    self.selection.clear();
                }
            }
            Some(el) if shift => match self.selection.iter().position(|s| *s == el) {
                Some(i) => {
                    self.selection.remove(i);
                }
                None => self.selection.push(el),
            },
            Some(el) => {
                if !self.selection.contains(&el) {
                    self.selection = vec![el];
                }
            }
        }
    }

    fn ghosts(&self) -> Vec<(Element, Ghost)> {
        let highlight = self.highlight();
        let dash = &self.config.ghost_line_dash;
        self.selection
            .iter()
            .filter_map(|&el| {
                let ghost = match el {
                    Element::Vertex(id) => Ghost::vertex(self.graph.vertex(id)?, highlight, dash),
                    Element::Edge(id) => Ghost::edge(self.graph.edge(id)?, highlight, dash),
                };
                Some((el, ghost))
            })
            .collect()
    }

    pub fn pointer_down(&mut self, ctx: &mut dyn DrawContext, ev: &PointerEvent) -> bool {
        if !matches!(ev.button, PointerButton::Left | PointerButton::Right) {
            return false;
        }
        self.modifiers = ev.modifiers;
        if let Some(s) = self.drag.state() {
            if s.button != ev.button {
                return true;
            }
        }
        self.cursor = ev.screen_pos;
        let left = ev.button == PointerButton::Left;
        let can_select = left && self.tool.allows_selection();
        let p = self.snap(self.viewport.locate(ev.screen_pos));
        let mut target = if can_select {
            element_at(&self.graph, ctx, &self.viewport, ev.screen_pos, &self.selection)
        } else {
            None
        };

        if left && self.tool == Tool::Draw {
            target = Some(self.draw_press(target, p));
        } else if left && self.tool == Tool::Erase {
            if let Some(el) = target.take() {
                if !self.selection.contains(&el) {
                    self.selection = vec![el];
                }
                self.delete_selection();
            }
        }

        let shift = ev.modifiers.shift;
        self.update_selection(target, can_select, shift);

        let ghosts = if shift { Vec::new() } else { self.ghosts() };
        let region = if self.tool == Tool::Capture { self.resize_box_region() } else { None };
        let mode = if !left
            || self.tool == Tool::Move
            || (self.tool == Tool::Capture && region.map_or(true, |r| r.intersects(BoxRegion::EXTERNAL)))
        {
            DragMode::Pan
        } else if self.tool == Tool::Capture {
            DragMode::ResizeCapture
        } else if ghosts.is_empty() {
            DragMode::RubberBand
        } else {
            DragMode::MoveElements
        };
        let capture = match (self.capture_area, region) {
            (Some(area), Some(region)) => Some(CaptureResize::new(area, region)),
            _ => None,
        };
        debug!("drag start {:?} with {} ghosts", mode, ghosts.len());
        self.drag = DragPhase::Dragging(DragState {
            button: ev.button,
            anchor: ev.screen_pos,
            view: self.viewport.clone(),
            mode,
            ghosts,
            capture,
        });
        true
    }

    pub fn pointer_move(&mut self, ev: &PointerEvent) -> bool {
        self.cursor = ev.screen_pos;
        self.modifiers = ev.modifiers;
        if !ev.buttons.left && !ev.buttons.right {
            return true;
        }
        let DragPhase::Dragging(state) = &mut self.drag else {
            return true;
        };
        let (d, revert_x, revert_y) = state.delta(ev.screen_pos, self.config.revert_proximity_pixels);
        let revert = revert_x && revert_y;
        let izoom = self.viewport.izoom();
        let shift = d * izoom;

        match state.mode {
            DragMode::Pan => {
                let c = state.view.center();
                self.viewport.set_center(if revert { c } else { c - shift });
            }
            DragMode::ResizeCapture => {
                if let Some(c) = state.capture.as_mut() {
                    self.capture_area = Some(c.apply(d.x, d.y, revert_x, revert_y, izoom));
                }
            }
            DragMode::MoveElements => {
                let single = state.ghosts.len() == 1;
                let anchor_world = state.view.locate(state.anchor);
                let hold_vertices = self.tool == Tool::Draw && self.first_vertex.is_some();
                for (el, ghost) in &state.ghosts {
                    match (*el, ghost) {
                        (Element::Vertex(id), Ghost::Vertex(g)) => {
                            if hold_vertices {
                                continue;
                            }
                            let p = if revert { g.pos() } else { self.grid.snap(g.pos() + shift) };
                            if let Some(v) = self.graph.vertex_mut(id) {
                                v.set_pos(p);
                            }
                        }
                        (Element::Edge(id), Ghost::Edge(g)) if single => {
                            if revert {
                                if let Some(e) = self.graph.edge_mut(id) {
                                    e.cp = g.cp;
                                }
                                continue;
                            }
                            let cp = self.grid.snap(g.cp.unwrap_or(anchor_world) + shift);
                            let ends = self.graph.edge(id).and_then(|e| {
                                Some((e.v1 == e.v2, self.graph.vertex(e.v1)?.pos(), self.graph.vertex(e.v2)?.pos()))
                            });
                            let Some((is_loop, a, b)) = ends else { continue };
                            let straight = !is_loop
                                && control_angle(a, cp, b).map_or(true, |angle| angle < self.config.straighten_angle);
                            if let Some(e) = self.graph.edge_mut(id) {
                                e.cp = if straight { None } else { Some(cp) };
                            }
                        }
                        (Element::Edge(id), Ghost::Edge(g)) => {
                            let Some(base) = g.cp else { continue };
                            let cp = if revert { base } else { self.grid.snap(base + shift) };
                            if let Some(e) = self.graph.edge_mut(id).filter(|e| e.cp.is_some()) {
                                e.cp = Some(cp);
                            }
                        }
                        _ => {}
                    }
                }
            }
            DragMode::RubberBand => {}
        }
        true
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.cursor = Vector2::NAN;
    }

    pub fn pointer_up(&mut self, ctx: &mut dyn DrawContext, ev: &PointerEvent) -> bool {
        if self.drag.state().map_or(true, |s| s.button != ev.button) {
            return false;
        }
        let Some(state) = self.drag.take() else {
            return false;
        };
        self.cursor = ev.screen_pos;
        self.modifiers = ev.modifiers;
        let right = state.button == PointerButton::Right;
        let target = if right || !self.tool.allows_selection() {
            None
        } else {
            element_at(&self.graph, ctx, &self.viewport, self.cursor, &self.selection)
        };

        match self.tool {
            Tool::Draw => {
                if let Some(first) = self.first_vertex.take() {
                    if target != Some(Element::Vertex(first)) {
                        self.finish_stroke(first, target, ev.modifiers.ctrl);
                    }
                }
            }
            Tool::Capture => {
                if let (Some(c), Some(area)) = (state.capture, self.capture_area) {
                    self.capture_area = Some(c.finish(&area));
                }
            }
            _ if !right && self.tool != Tool::Move && state.ghosts.is_empty() => {
                if !ev.modifiers.shift {
                    self.selection.clear();
                }
                if !self.cursor.is_nan() {
                    let area = Rect::from_points(state.anchor, self.cursor).located(&self.viewport).normalized();
                    if area.area() != 0.0 {
                        for el in elements_in_box(&self.graph, &area, self.config.curve_sampling_interval) {
                            if !self.selection.contains(&el) {
                                self.selection.push(el);
                            }
                        }
                    }
                }
                if self.tool == Tool::Erase {
                    self.delete_selection();
                }
            }
            _ => {}
        }
        debug!("drag end {:?}", state.mode);
        true
    }

    /// Completes a press-drag-release edge from `first`.
    fn finish_stroke(&mut self, first: VertexId, target: Option<Element>, ctrl: bool) {
        let at = self.snap(self.viewport.locate(self.cursor));
        let created = if ctrl {
            self.graph.add_loop(first, at).map(Element::Edge)
        } else if let Some(Element::Vertex(v)) = target {
            self.graph.add_edge(first, v).map(|_| Element::Vertex(v))
        } else {
            let placed = self.graph.add_vertex(Vertex::at(at));
            self.graph.add_edge(first, placed).map(|_| Element::Vertex(placed))
        };
        match created {
            Ok(el) => self.selection = vec![el],
            Err(e) => error!("could not finish edge: {e}"),
        }
    }

    pub fn key_down(&mut self, ev: &KeyEvent) -> bool {
        self.modifiers = ev.modifiers;
        let mods = ev.modifiers;
        if let Some(tool) = self.tools.by_shortcut(&ev.key, mods) {
            self.set_tool(tool);
            return true;
        }
        match ev.key.to_lowercase().as_str() {
            "a" if mods.ctrl => {
                if mods.shift {
                    self.deselect_all();
                } else {
                    self.select_all();
                }
                true
            }
            "escape" => {
                self.first_vertex = None;
                self.deselect_all();
                true
            }
            "backspace" | "delete" => self.delete_selection(),
            "." => {
                self.center_view();
                true
            }
            "+" | "=" => {
                self.viewport.change_zoom(self.config.key_zoom_amount, None);
                true
            }
            "-" | "_" => {
                self.viewport.change_zoom(-self.config.key_zoom_amount, None);
                true
            }
            "0" => {
                self.viewport.set_zoom(1.0);
                true
            }
            _ => false,
        }
    }

    pub fn key_up(&mut self, ev: &KeyEvent) {
        self.modifiers = ev.modifiers;
    }

    /// Zooms around the cursor, or the view centre when off canvas.
    pub fn wheel(&mut self, ev: &WheelEvent) -> bool {
        if ev.dy == 0.0 || !ev.dy.is_finite() {
            return false;
        }
        let target = if self.cursor.is_nan() { None } else { Some(self.cursor) };
        self.viewport.change_zoom(-ev.dy * self.config.scroll_zoom_multiplier, target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_value_or_none() {
        assert_eq!(common([1, 1, 1].into_iter()), Some(1));
        assert_eq!(common([1, 2].into_iter()), None);
        assert_eq!(common(std::iter::empty::<u8>()), None);
    }

    #[test]
    fn leaving_draw_drops_pending_vertex() {
        let mut ed = Editor::default();
        let v = ed.graph.add_vertex(Vertex::default());
        ed.set_tool(Tool::Draw);
        ed.first_vertex = Some(v);
        ed.set_tool(Tool::Select);
        assert_eq!(ed.first_vertex(), None);
    }

    #[test]
    fn capture_fits_selection_first() {
        let mut ed = Editor::default();
        let a = ed.graph.add_vertex(Vertex::at(Vector2::ZERO));
        ed.graph.add_vertex(Vertex::at(Vector2::new(500.0, 0.0)));
        ed.selection = vec![Element::Vertex(a)];
        ed.set_tool(Tool::Capture);
        assert_eq!(ed.capture_area(), Some(Rect::new(-12.0, -12.0, 24.0, 24.0)));
    }

    #[test]
    fn tool_accent_drives_highlight() {
        let mut ed = Editor::default();
        assert_eq!(ed.highlight(), crate::model::color::BLUE);
        ed.set_tool(Tool::Erase);
        assert_eq!(ed.highlight(), crate::model::color::RED);
    }
}
