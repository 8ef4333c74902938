//! Graph documents.
//!
//! ```text
//! { "title"?: string,
//!   "vertices": [ { x, y, r?, fill?, stroke?, lineWidth?, lineDash?, shape? } ],
//!   "edges":    [ { v1, v2?, cp?: [x, y], stroke?, lineWidth?, lineDash? } ] }
//! ```
//!
//! Edge endpoints are dense indices into `vertices`. Fields equal to their
//! defaults are left out when saving.

use crate::error::{GraphError, Result};
use crate::geometry::limits;
use crate::geometry::vector::Vector2;
use crate::model::{
    Edge, Shape, Vertex, VertexId, DEFAULT_EDGE_STROKE, DEFAULT_LINE_WIDTH, DEFAULT_RADIUS,
    DEFAULT_VERTEX_FILL, DEFAULT_VERTEX_STROKE,
};
use crate::Graph;
use serde::{Deserialize, Serialize};

fn unless<T: PartialEq>(value: T, default: T) -> Option<T> {
    if value == default { None } else { Some(value) }
}

fn dash(d: &[f64]) -> Option<&[f64]> {
    if d.is_empty() { None } else { Some(d) }
}

pub fn to_json_impl(g: &Graph) -> String {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct VertexSer<'a> {
        x: f64,
        y: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        r: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line_width: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line_dash: Option<&'a [f64]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        shape: Option<u8>,
    }
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct EdgeSer<'a> {
        v1: usize,
        v2: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        cp: Option<[f64; 2]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line_width: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        line_dash: Option<&'a [f64]>,
    }
    #[derive(Serialize)]
    struct Doc<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<&'a str>,
        vertices: Vec<VertexSer<'a>>,
        edges: Vec<EdgeSer<'a>>,
    }

    // slot -> dense index
    let mut dense: Vec<Option<usize>> = vec![None; g.vertices.len()];
    let mut vertices = Vec::new();
    for (i, v) in g.vertices.iter().enumerate() {
        if let Some(v) = v {
            dense[i] = Some(vertices.len());
            vertices.push(VertexSer {
                x: v.x,
                y: v.y,
                r: unless(v.r, DEFAULT_RADIUS),
                fill: unless(v.fill.as_str(), DEFAULT_VERTEX_FILL),
                stroke: unless(v.stroke.as_str(), DEFAULT_VERTEX_STROKE),
                line_width: unless(v.line_width, DEFAULT_LINE_WIDTH),
                line_dash: dash(&v.line_dash),
                shape: unless(v.shape.index(), Shape::Circle.index()),
            });
        }
    }
    let mut edges = Vec::new();
    for e in g.edges.iter().flatten() {
        let endpoints = (
            dense.get(e.v1.0 as usize).copied().flatten(),
            dense.get(e.v2.0 as usize).copied().flatten(),
        );
        let (Some(v1), Some(v2)) = endpoints else {
            continue;
        };
        edges.push(EdgeSer {
            v1,
            v2,
            cp: e.cp.map(|c| [c.x, c.y]),
            stroke: unless(e.stroke.as_str(), DEFAULT_EDGE_STROKE),
            line_width: unless(e.line_width, DEFAULT_LINE_WIDTH),
            line_dash: dash(&e.line_dash),
        });
    }
    let doc = Doc { title: g.title(), vertices, edges };
    serde_json::to_string(&doc).unwrap_or_else(|_| String::from("{\"vertices\":[],\"edges\":[]}"))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VertexDe {
    x: f64,
    y: f64,
    r: Option<f64>,
    fill: Option<String>,
    stroke: Option<String>,
    line_width: Option<f64>,
    line_dash: Option<Vec<f64>>,
    shape: Option<u8>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeDe {
    v1: usize,
    v2: Option<usize>,
    cp: Option<[f64; 2]>,
    stroke: Option<String>,
    line_width: Option<f64>,
    line_dash: Option<Vec<f64>>,
}

#[derive(Deserialize, Default)]
struct DocDe {
    title: Option<String>,
    #[serde(default)]
    vertices: Vec<VertexDe>,
    #[serde(default)]
    edges: Vec<EdgeDe>,
}

fn out_of_bounds(item: String, field: &'static str) -> GraphError {
    GraphError::OutOfBounds { item, field }
}

fn checked_dash(dash: Option<Vec<f64>>, item: impl Fn() -> String) -> Result<Vec<f64>> {
    let dash = dash.unwrap_or_default();
    if limits::valid_dash(&dash) { Ok(dash) } else { Err(out_of_bounds(item(), "lineDash")) }
}

fn checked_width(w: Option<f64>, item: impl Fn() -> String) -> Result<f64> {
    let w = w.unwrap_or(DEFAULT_LINE_WIDTH);
    if limits::in_width_bounds(w) { Ok(w) } else { Err(out_of_bounds(item(), "lineWidth")) }
}

/// Builds a fresh graph from a document. Blank text and `null` give an
/// empty graph.
pub fn from_json_impl(text: &str) -> Result<Graph> {
    if text.trim().is_empty() {
        return Ok(Graph::new());
    }
    let doc: DocDe = serde_json::from_str::<Option<DocDe>>(text)?.unwrap_or_default();
    if doc.vertices.len() > limits::MAX_VERTICES {
        return Err(GraphError::CapsExceeded {
            what: "vertex",
            count: doc.vertices.len(),
            limit: limits::MAX_VERTICES,
        });
    }
    if doc.edges.len() > limits::MAX_EDGES {
        return Err(GraphError::CapsExceeded {
            what: "edge",
            count: doc.edges.len(),
            limit: limits::MAX_EDGES,
        });
    }

    let mut g = Graph::new();
    g.title = doc.title;
    g.vertices.reserve(doc.vertices.len());
    for (i, vd) in doc.vertices.into_iter().enumerate() {
        let item = || format!("vertex {i}");
        if !limits::in_coord_bounds(vd.x) || !limits::in_coord_bounds(vd.y) {
            return Err(out_of_bounds(item(), "position"));
        }
        let r = vd.r.unwrap_or(DEFAULT_RADIUS);
        if !limits::in_radius_bounds(r) {
            return Err(out_of_bounds(item(), "r"));
        }
        let shape = match vd.shape {
            None => Shape::Circle,
            Some(s) => Shape::from_index(s).ok_or_else(|| out_of_bounds(item(), "shape"))?,
        };
        g.vertices.push(Some(Vertex {
            x: vd.x,
            y: vd.y,
            r,
            shape,
            fill: vd.fill.unwrap_or_else(|| DEFAULT_VERTEX_FILL.to_string()),
            stroke: vd.stroke.unwrap_or_else(|| DEFAULT_VERTEX_STROKE.to_string()),
            line_width: checked_width(vd.line_width, item)?,
            line_dash: checked_dash(vd.line_dash, item)?,
        }));
    }

    let n = g.vertices.len();
    g.edges.reserve(doc.edges.len());
    for (i, ed) in doc.edges.into_iter().enumerate() {
        let item = || format!("edge {i}");
        let v2 = ed.v2.unwrap_or(ed.v1);
        for index in [ed.v1, v2] {
            if index >= n {
                return Err(GraphError::DanglingVertex { edge: i, index });
            }
        }
        let cp = match ed.cp {
            None => None,
            Some([x, y]) if limits::in_coord_bounds(x) && limits::in_coord_bounds(y) => {
                Some(Vector2::new(x, y))
            }
            Some(_) => return Err(out_of_bounds(item(), "cp")),
        };
        let mut edge = Edge::new(VertexId(ed.v1 as u32), VertexId(v2 as u32));
        edge.cp = cp;
        if let Some(stroke) = ed.stroke {
            edge.stroke = stroke;
        }
        edge.line_width = checked_width(ed.line_width, item)?;
        edge.line_dash = checked_dash(ed.line_dash, item)?;
        g.edges.push(Some(edge));
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_omitted() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::at(Vector2::new(1.0, 2.0)));
        let b = g.add_vertex(Vertex::at(Vector2::new(3.0, 4.0)));
        g.add_edge(a, b).unwrap();
        assert_eq!(
            to_json_impl(&g),
            r#"{"vertices":[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}],"edges":[{"v1":0,"v2":1}]}"#
        );
    }

    #[test]
    fn styled_fields_use_camel_case() {
        let mut g = Graph::new();
        let mut v = Vertex::at(Vector2::ZERO);
        v.line_width = 2.0;
        v.line_dash = vec![2.0, 2.0];
        v.shape = Shape::Diamond;
        let a = g.add_vertex(v);
        g.add_loop(a, Vector2::new(0.0, -40.0)).unwrap();
        let text = to_json_impl(&g);
        assert!(text.contains(r#""lineWidth":2.0"#));
        assert!(text.contains(r#""lineDash":[2.0,2.0]"#));
        assert!(text.contains(r#""shape":2"#));
        assert!(text.contains(r#""cp":[0.0,-40.0]"#));
    }

    #[test]
    fn indices_are_dense_after_removal() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::at(Vector2::ZERO));
        let b = g.add_vertex(Vertex::at(Vector2::new(1.0, 0.0)));
        let c = g.add_vertex(Vertex::at(Vector2::new(2.0, 0.0)));
        g.add_edge(b, c).unwrap();
        g.remove_vertex(a);
        assert!(to_json_impl(&g).contains(r#"{"v1":0,"v2":1}"#));
    }

    #[test]
    fn blank_and_null_load_empty() {
        assert_eq!(from_json_impl("").unwrap().vertex_count(), 0);
        assert_eq!(from_json_impl("null").unwrap().vertex_count(), 0);
        assert_eq!(from_json_impl("{}").unwrap().edge_count(), 0);
    }

    #[test]
    fn missing_v2_makes_a_loop_anchor() {
        let g = from_json_impl(r#"{"vertices":[{"x":0,"y":0}],"edges":[{"v1":0,"cp":[0,-30]}]}"#).unwrap();
        assert_eq!(g.edge_kind(crate::model::EdgeId(0)), Some(crate::model::EdgeKind::Loop));
    }

    #[test]
    fn rejects_bad_documents() {
        let code = |t: &str| from_json_impl(t).err().map(|e| e.code());
        assert_eq!(code("{"), Some("json_parse"));
        assert_eq!(code(r#"{"vertices":[{"x":0,"y":0,"shape":5}]}"#), Some("out_of_bounds"));
        assert_eq!(code(r#"{"vertices":[{"x":1e300,"y":0}]}"#), Some("out_of_bounds"));
        assert_eq!(code(r#"{"vertices":[{"x":0,"y":0}],"edges":[{"v1":0,"v2":3}]}"#), Some("dangling_vertex"));
        assert_eq!(code(r#"{"vertices":[{"x":0,"y":0,"lineWidth":-1}]}"#), Some("out_of_bounds"));
    }
}
