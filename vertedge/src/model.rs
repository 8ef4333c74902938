use serde::{Deserialize, Serialize};

use crate::geometry::vector::Vector2;

/// Palette used by the editor. Colours are CSS strings so the canvas can
/// consume them directly.
pub mod color {
    pub const NONE: &str = "transparent";
    pub const LIGHT: &str = "#cccccc";
    pub const MEDIUM: &str = "#999999";
    pub const DARK: &str = "#666666";
    pub const RED: &str = "#e84b33";
    pub const ORANGE: &str = "#ff9421";
    pub const YELLOW: &str = "#ffd731";
    pub const GREEN: &str = "#39d12a";
    pub const GREEN_DARK: &str = "#23a54c";
    pub const CYAN: &str = "#16dbbd";
    pub const BLUE: &str = "#39a0fa";
    pub const PURPLE: &str = "#b762f0";
    pub const PINK: &str = "#ff5ed5";
}

pub const DEFAULT_RADIUS: f64 = 10.0;
pub const DEFAULT_LINE_WIDTH: f64 = 4.0;
pub const DEFAULT_VERTEX_FILL: &str = color::DARK;
pub const DEFAULT_VERTEX_STROKE: &str = color::LIGHT;
pub const DEFAULT_EDGE_STROKE: &str = color::DARK;

/// Diamond vertices extend this far beyond `r` along the axes.
pub const DIAMOND_FACTOR: f64 = 1.3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u32);

/// Anything the user can hover, select, drag or erase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Element {
    Vertex(VertexId),
    Edge(EdgeId),
}

impl From<VertexId> for Element {
    fn from(id: VertexId) -> Self {
        Element::Vertex(id)
    }
}

impl From<EdgeId> for Element {
    fn from(id: EdgeId) -> Self {
        Element::Edge(id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Circle = 0,
    Square = 1,
    Diamond = 2,
}

impl Shape {
    pub fn from_index(i: u8) -> Option<Shape> {
        match i {
            0 => Some(Shape::Circle),
            1 => Some(Shape::Square),
            2 => Some(Shape::Diamond),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub shape: Shape,
    pub fill: String,
    pub stroke: String,
    pub line_width: f64,
    pub line_dash: Vec<f64>,
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex::at(Vector2::ZERO)
    }
}

impl Vertex {
    pub fn at(pos: Vector2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            r: DEFAULT_RADIUS,
            shape: Shape::Circle,
            fill: DEFAULT_VERTEX_FILL.to_string(),
            stroke: DEFAULT_VERTEX_STROKE.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            line_dash: Vec::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn set_pos(&mut self, p: Vector2) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Effective bounding radius including the stroke.
    pub fn margin(&self) -> f64 {
        let k = if self.shape == Shape::Diamond { DIAMOND_FACTOR } else { 1.0 };
        k * self.r + 0.5 * self.line_width
    }
}

/// How an edge is rendered. Exactly one applies to every edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Line,
    Curve,
    Loop,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub v1: VertexId,
    pub v2: VertexId,
    pub cp: Option<Vector2>,
    pub stroke: String,
    pub line_width: f64,
    pub line_dash: Vec<f64>,
}

impl Edge {
    pub fn new(v1: VertexId, v2: VertexId) -> Self {
        Self {
            v1,
            v2,
            cp: None,
            stroke: DEFAULT_EDGE_STROKE.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            line_dash: Vec::new(),
        }
    }

    pub fn kind(&self) -> EdgeKind {
        match self.cp {
            None => EdgeKind::Line,
            Some(_) if self.v1 == self.v2 => EdgeKind::Loop,
            Some(_) => EdgeKind::Curve,
        }
    }

    #[inline] pub fn is_curve_or_loop(&self) -> bool { self.cp.is_some() }
    #[inline] pub fn is_curve(&self) -> bool { self.kind() == EdgeKind::Curve }
    #[inline] pub fn is_loop(&self) -> bool { self.kind() == EdgeKind::Loop }

    pub fn touches(&self, v: VertexId) -> bool {
        self.v1 == v || self.v2 == v
    }

    pub fn margin(&self) -> f64 {
        0.5 * self.line_width
    }
}

/// An edge with its endpoint positions resolved, in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeGeometry {
    Line { a: Vector2, b: Vector2 },
    Curve { a: Vector2, cp: Vector2, b: Vector2 },
    /// Circle through `anchor` whose diameter ends at `cp`.
    Loop { anchor: Vector2, cp: Vector2 },
}

impl EdgeGeometry {
    pub fn kind(&self) -> EdgeKind {
        match self {
            EdgeGeometry::Line { .. } => EdgeKind::Line,
            EdgeGeometry::Curve { .. } => EdgeKind::Curve,
            EdgeGeometry::Loop { .. } => EdgeKind::Loop,
        }
    }

    pub fn control_point(&self) -> Option<Vector2> {
        match *self {
            EdgeGeometry::Line { .. } => None,
            EdgeGeometry::Curve { cp, .. } | EdgeGeometry::Loop { cp, .. } => Some(cp),
        }
    }

    /// Start and end positions; a loop starts and ends at its anchor.
    pub fn endpoints(&self) -> (Vector2, Vector2) {
        match *self {
            EdgeGeometry::Line { a, b } | EdgeGeometry::Curve { a, b, .. } => (a, b),
            EdgeGeometry::Loop { anchor, .. } => (anchor, anchor),
        }
    }

    /// Centre and radius of a loop's circle.
    pub fn loop_circle(&self) -> Option<(Vector2, f64)> {
        match *self {
            EdgeGeometry::Loop { anchor, cp } => Some((anchor.midpoint(cp), 0.5 * anchor.distance(cp))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_classification_is_exclusive() {
        let a = VertexId(0);
        let b = VertexId(1);
        let mut e = Edge::new(a, b);
        assert_eq!(e.kind(), EdgeKind::Line);
        e.cp = Some(Vector2::new(1.0, 1.0));
        assert_eq!(e.kind(), EdgeKind::Curve);
        e.v2 = a;
        assert_eq!(e.kind(), EdgeKind::Loop);
        e.cp = None;
        assert_eq!(e.kind(), EdgeKind::Line);
    }

    #[test]
    fn margins() {
        let mut v = Vertex::at(Vector2::ZERO);
        assert_eq!(v.margin(), 12.0);
        v.shape = Shape::Diamond;
        assert_eq!(v.margin(), 15.0);
        assert_eq!(Edge::new(VertexId(0), VertexId(1)).margin(), 2.0);
    }
}
