use super::capture::CaptureResize;
use super::input::PointerButton;
use crate::geometry::vector::Vector2;
use crate::geometry::viewport::Viewport;
use crate::model::{color, Edge, Element, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Pan,
    ResizeCapture,
    MoveElements,
    RubberBand,
}

/// Snapshot of a dragged element as it was at press time.
#[derive(Clone, Debug, PartialEq)]
pub enum Ghost {
    Vertex(Vertex),
    Edge(Edge),
}

impl Ghost {
    /// Copy restyled as a dashed outline in `highlight`.
    pub fn vertex(v: &Vertex, highlight: &str, dash: &[f64]) -> Ghost {
        let mut g = v.clone();
        g.fill = color::NONE.to_string();
        restyle(&mut g.stroke, &mut g.line_width, &mut g.line_dash, highlight, dash);
        Ghost::Vertex(g)
    }

    pub fn edge(e: &Edge, highlight: &str, dash: &[f64]) -> Ghost {
        let mut g = e.clone();
        restyle(&mut g.stroke, &mut g.line_width, &mut g.line_dash, highlight, dash);
        Ghost::Edge(g)
    }
}

fn restyle(stroke: &mut String, width: &mut f64, line_dash: &mut Vec<f64>, highlight: &str, dash: &[f64]) {
    *stroke = format!("{highlight}77");
    *width = 2.0;
    *line_dash = dash.to_vec();
}

/// Everything captured at pointer-down that a drag needs.
#[derive(Clone, Debug)]
pub struct DragState {
    pub button: PointerButton,
    /// Press position, screen pixels.
    pub anchor: Vector2,
    pub view: Viewport,
    pub mode: DragMode,
    /// Live ids with their press-time copies, in selection order.
    pub ghosts: Vec<(Element, Ghost)>,
    pub capture: Option<CaptureResize>,
}

impl DragState {
    /// Screen delta of `pos` from the anchor, and per-axis revert flags.
    pub fn delta(&self, pos: Vector2, revert_pixels: f64) -> (Vector2, bool, bool) {
        let d = pos - self.anchor;
        let limit = revert_pixels * self.view.scale();
        (d, d.x.abs() <= limit, d.y.abs() <= limit)
    }
}

#[derive(Clone, Debug, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragState),
}

impl DragPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging(_))
    }

    pub fn state(&self) -> Option<&DragState> {
        match self {
            DragPhase::Dragging(s) => Some(s),
            DragPhase::Idle => None,
        }
    }

    pub fn state_mut(&mut self) -> Option<&mut DragState> {
        match self {
            DragPhase::Dragging(s) => Some(s),
            DragPhase::Idle => None,
        }
    }

    pub fn take(&mut self) -> Option<DragState> {
        match std::mem::take(self) {
            DragPhase::Dragging(s) => Some(s),
            DragPhase::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revert_threshold_scales_with_device_pixels() {
        let view = Viewport::new(Vector2::ZERO, Vector2::new(100.0, 100.0), 1.0, 2.0);
        let s = DragState {
            button: PointerButton::Left,
            anchor: Vector2::new(10.0, 10.0),
            view,
            mode: DragMode::MoveElements,
            ghosts: Vec::new(),
            capture: None,
        };
        let (d, rx, ry) = s.delta(Vector2::new(26.0, 27.0), 8.0);
        assert_eq!(d, Vector2::new(16.0, 17.0));
        assert!(rx);
        assert!(!ry);
    }

    #[test]
    fn ghosts_are_dashed_outlines() {
        let Ghost::Vertex(g) = Ghost::vertex(&Vertex::default(), "#39a0fa", &[4.0, 4.0]) else {
            panic!("expected vertex ghost");
        };
        assert_eq!(g.fill, color::NONE);
        assert_eq!(g.stroke, "#39a0fa77");
        assert_eq!(g.line_width, 2.0);
        assert_eq!(g.line_dash, vec![4.0, 4.0]);
    }
}
