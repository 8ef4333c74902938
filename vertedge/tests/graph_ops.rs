use vertedge::{Element, Graph, Vector2, Vertex};

fn triangle() -> (Graph, [vertedge::VertexId; 3]) {
    let mut g = Graph::new();
    let a = g.add_vertex(Vertex::at(Vector2::new(0.0, 0.0)));
    let b = g.add_vertex(Vertex::at(Vector2::new(100.0, 0.0)));
    let c = g.add_vertex(Vertex::at(Vector2::new(50.0, 80.0)));
    g.add_edge(a, b).unwrap();
    g.add_edge(b, c).unwrap();
    g.add_edge(c, a).unwrap();
    (g, [a, b, c])
}

#[test]
fn removing_vertex_cascades_to_edges() {
    let (mut g, [a, b, c]) = triangle();
    g.add_loop(a, Vector2::new(0.0, -40.0)).unwrap();
    assert!(g.remove_vertex(a));
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    let e = g.edge_ids().next().unwrap();
    let edge = g.edge(e).unwrap();
    assert_eq!((edge.v1, edge.v2), (b, c));
    assert!(!g.remove_vertex(a));
}

#[test]
fn remove_elements_tolerates_stale_ids() {
    let (mut g, [a, b, _]) = triangle();
    let first_edge = g.edge_ids().next().unwrap();
    // the edge goes with `a` but is also listed explicitly
    let removed = g.remove_elements(&[Element::Vertex(a), Element::Edge(first_edge), Element::Vertex(a)]);
    assert_eq!(removed, 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.contains_element(Element::Vertex(b)));
    assert!(!g.contains_element(Element::Edge(first_edge)));
}

#[test]
fn splitting_a_line_keeps_style_on_first_half() {
    let (mut g, [a, b, _]) = triangle();
    let e = g.edge_ids().next().unwrap();
    g.edge_mut(e).unwrap().stroke = String::from("#ff0000");
    let mid = g.split_edge(e, Vector2::new(30.0, 10.0), 0.01).unwrap();
    assert_eq!(g.vertex(mid).unwrap().pos(), Vector2::new(30.0, 0.0));
    let head = g.edge(e).unwrap();
    assert_eq!((head.v1, head.v2), (a, mid));
    assert_eq!(head.stroke, "#ff0000");
    assert_eq!(head.cp, None);
    let tail = g.edge_ids().last().unwrap();
    let tail = g.edge(tail).unwrap();
    assert_eq!((tail.v1, tail.v2), (mid, b));
    assert_eq!(tail.cp, None);
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn every_mutation_bumps_version() {
    let (mut g, [a, _, _]) = triangle();
    let mut last = g.version();
    let mut check = |g: &Graph| {
        assert!(g.version() > last);
        last = g.version();
    };
    g.vertex_mut(a).unwrap().r = 3.0;
    check(&g);
    g.set_title(Some(String::from("t")));
    check(&g);
    g.clear();
    check(&g);
    g.replace_with(Graph::new());
    check(&g);
}
