pub mod model;
pub mod render;
pub mod primitives;
pub mod error;
pub mod load;
pub mod editor;
pub mod geometry {
    pub mod curve;
    pub mod flatten;
    pub mod limits;
    pub mod math;
    pub mod rect;
    pub mod tolerance;
    pub mod vector;
    pub mod viewport;
}
pub mod algorithms {
    pub mod bounds;
    pub mod nearest;
    pub mod picking;
    pub mod selection;
}
mod json;

pub use error::{GraphError, Result};
pub use geometry::rect::Rect;
pub use geometry::vector::Vector2;
pub use geometry::viewport::Viewport;
pub use model::{Edge, EdgeGeometry, EdgeId, EdgeKind, Element, Shape, Vertex, VertexId};

/// Vertices and edges of one document.
///
/// Both collections are slot arenas: an id is the index of its slot, and a
/// removed element leaves `None` behind so surviving ids stay valid. Slot
/// order is paint order.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub(crate) vertices: Vec<Option<Vertex>>, // id is index
    pub(crate) edges: Vec<Option<Edge>>,      // id is index
    pub(crate) title: Option<String>,
    pub(crate) version: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Monotonic counter, bumped by every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
        self.bump();
    }

    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Some(vertex));
        self.bump();
        id
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0 as usize).and_then(|v| v.as_ref())
    }

    /// Mutable access counts as a mutation.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.bump();
        self.vertices.get_mut(id.0 as usize).and_then(|v| v.as_mut())
    }

    /// Removes the vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if self.vertices.get_mut(id.0 as usize).and_then(Option::take).is_none() {
            return false;
        }
        for slot in self.edges.iter_mut() {
            if slot.as_ref().is_some_and(|e| e.touches(id)) {
                *slot = None;
            }
        }
        self.bump();
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_some()).count()
    }

    /// Adds a straight edge. `v1 == v2` is allowed and becomes a loop once
    /// a control point is set.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> Result<EdgeId> {
        self.push_edge(Edge::new(v1, v2))
    }

    pub fn add_loop(&mut self, v: VertexId, cp: Vector2) -> Result<EdgeId> {
        let mut edge = Edge::new(v, v);
        edge.cp = Some(cp);
        self.push_edge(edge)
    }

    /// Inserts a fully specified edge, keeping its style.
    pub fn push_edge(&mut self, edge: Edge) -> Result<EdgeId> {
        for v in [edge.v1, edge.v2] {
            if self.vertex(v).is_none() {
                return Err(GraphError::InvalidId { kind: "vertex", id: v.0 });
            }
        }
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(edge));
        self.bump();
        Ok(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0 as usize).and_then(|e| e.as_ref())
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.bump();
        self.edges.get_mut(id.0 as usize).and_then(|e| e.as_mut())
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        if self.edges.get_mut(id.0 as usize).and_then(Option::take).is_none() {
            return false;
        }
        self.bump();
        true
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_some()).count()
    }

    /// Resolves the edge's endpoints to world positions.
    pub fn edge_geometry(&self, id: EdgeId) -> Option<EdgeGeometry> {
        self.geometry_of(self.edge(id)?)
    }

    /// Like [`Graph::edge_geometry`] for an edge value that need not be stored,
    /// such as a drag ghost.
    pub fn geometry_of(&self, e: &Edge) -> Option<EdgeGeometry> {
        let a = self.vertex(e.v1)?.pos();
        let b = self.vertex(e.v2)?.pos();
        Some(match (e.kind(), e.cp) {
            (EdgeKind::Loop, Some(cp)) => EdgeGeometry::Loop { anchor: a, cp },
            (EdgeKind::Curve, Some(cp)) => EdgeGeometry::Curve { a, cp, b },
            _ => EdgeGeometry::Line { a, b },
        })
    }

    pub fn edge_kind(&self, id: EdgeId) -> Option<EdgeKind> {
        self.edge(id).map(Edge::kind)
    }

    /// Live vertex ids in slot (paint) order.
    pub fn vertex_ids(&self) -> impl DoubleEndedIterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_some())
            .map(|(i, _)| VertexId(i as u32))
    }

    /// Live edge ids in slot (paint) order.
    pub fn edge_ids(&self) -> impl DoubleEndedIterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_some())
            .map(|(i, _)| EdgeId(i as u32))
    }

    /// All vertices, then all edges.
    pub fn elements(&self) -> Vec<Element> {
        self.vertex_ids()
            .map(Element::from)
            .chain(self.edge_ids().map(Element::from))
            .collect()
    }

    pub fn contains_element(&self, el: Element) -> bool {
        match el {
            Element::Vertex(id) => self.vertex(id).is_some(),
            Element::Edge(id) => self.edge(id).is_some(),
        }
    }

    /// Removes the given elements. Vertices take their edges with them;
    /// ids that are already gone are skipped.
    pub fn remove_elements(&mut self, elements: &[Element]) -> usize {
        let mut removed = 0;
        for el in elements {
            if let Element::Edge(id) = *el {
                removed += self.remove_edge(id) as usize;
            }
        }
        for el in elements {
            if let Element::Vertex(id) = *el {
                removed += self.remove_vertex(id) as usize;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.bump();
    }

    /// Swaps in another document wholesale. The version keeps increasing.
    pub fn replace_with(&mut self, other: Graph) {
        let version = self.version;
        *self = other;
        self.version = version;
        self.bump();
    }

    /// Parses a graph document; see the `json` module for the format.
    pub fn from_json(text: &str) -> Result<Graph> {
        json::from_json_impl(text)
    }

    pub fn to_json(&self) -> String {
        json::to_json_impl(self)
    }

    /// Replaces the contents from JSON. On error the graph is untouched.
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        let g = json::from_json_impl(text)?;
        log::info!("loaded graph: {} vertices, {} edges", g.vertex_count(), g.edge_count());
        self.replace_with(g);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_survive_removal() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::at(Vector2::new(0.0, 0.0)));
        let b = g.add_vertex(Vertex::at(Vector2::new(10.0, 0.0)));
        let c = g.add_vertex(Vertex::at(Vector2::new(20.0, 0.0)));
        assert!(g.remove_vertex(b));
        assert!(!g.remove_vertex(b));
        assert_eq!(g.vertex(c).map(|v| v.x), Some(20.0));
        assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn edges_require_live_vertices() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::default());
        let err = g.add_edge(a, VertexId(7)).unwrap_err();
        assert_eq!(err.code(), "invalid_id");
        assert!(g.add_edge(a, a).is_ok());
    }

    #[test]
    fn version_is_monotonic() {
        let mut g = Graph::new();
        let v0 = g.version();
        g.add_vertex(Vertex::default());
        let v1 = g.version();
        g.replace_with(Graph::new());
        assert!(v0 < v1 && v1 < g.version());
    }

    #[test]
    fn geometry_follows_classification() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::at(Vector2::new(0.0, 0.0)));
        let b = g.add_vertex(Vertex::at(Vector2::new(10.0, 0.0)));
        let e = g.add_edge(a, b).unwrap();
        assert!(matches!(g.edge_geometry(e), Some(EdgeGeometry::Line { .. })));
        g.edge_mut(e).unwrap().cp = Some(Vector2::new(5.0, 5.0));
        assert!(matches!(g.edge_geometry(e), Some(EdgeGeometry::Curve { .. })));
        let l = g.add_loop(a, Vector2::new(0.0, -30.0)).unwrap();
        assert_eq!(g.edge_kind(l), Some(EdgeKind::Loop));
        assert_eq!(
            g.edge_geometry(l).and_then(|geom| geom.loop_circle()),
            Some((Vector2::new(0.0, -15.0), 15.0))
        );
    }
}
