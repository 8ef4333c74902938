use serde_json::json;
use vertedge::{EdgeKind, Graph, GraphError};

#[test]
fn json_caps_exceeded_vertices() {
    let vertices: Vec<_> = (0..200_001).map(|_| json!({"x": 0.0, "y": 0.0})).collect();
    let doc = json!({"vertices": vertices, "edges": []}).to_string();
    match Graph::from_json(&doc) {
        Err(GraphError::CapsExceeded { what, count, .. }) => {
            assert_eq!(what, "vertex");
            assert_eq!(count, 200_001);
        }
        other => panic!("expected caps failure, got {other:?}"),
    }
}

#[test]
fn json_invalid_numbers() {
    let doc = json!({"vertices": [{"x": 1.0e38, "y": 0.0}]}).to_string();
    assert_eq!(Graph::from_json(&doc).unwrap_err().code(), "out_of_bounds");
    let doc = json!({"vertices": [{"x": 0.0, "y": 0.0, "r": 1.0e9}]}).to_string();
    assert_eq!(Graph::from_json(&doc).unwrap_err().code(), "out_of_bounds");
    let doc = json!({"vertices": [{"x": 0.0, "y": 0.0, "lineDash": [1.0, -2.0]}]}).to_string();
    assert_eq!(Graph::from_json(&doc).unwrap_err().code(), "out_of_bounds");
}

#[test]
fn failed_load_leaves_graph_untouched() {
    let mut g = Graph::from_json(r#"{"vertices":[{"x":1,"y":2}]}"#).unwrap();
    let before = g.version();
    assert!(g.load_json(r#"{"vertices":[{"x":0,"y":0}],"edges":[{"v1":2}]}"#).is_err());
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.version(), before);
}

#[test]
fn saved_document_loads_back() {
    let text = r##"{"title":"Demo","vertices":[{"x":0.0,"y":0.0,"fill":"#ff9421"},{"x":80.0,"y":0.0,"r":4.0,"shape":1}],"edges":[{"v1":0,"v2":1,"cp":[40.0,-30.0],"lineDash":[2.0,2.0]},{"v1":1,"v2":1,"cp":[80.0,-50.0]}]}"##;
    let g = Graph::from_json(text).unwrap();
    assert_eq!(g.title(), Some("Demo"));
    let kinds: Vec<_> = g.edge_ids().map(|e| g.edge_kind(e).unwrap()).collect();
    assert_eq!(kinds, vec![EdgeKind::Curve, EdgeKind::Loop]);
    assert_eq!(g.to_json(), text);
}
