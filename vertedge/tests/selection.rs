use vertedge::algorithms::selection::elements_in_box;
use vertedge::editor::input::{Buttons, PointerButton, PointerEvent};
use vertedge::editor::Editor;
use vertedge::render::PathHitContext;
use vertedge::{Element, Graph, Rect, Vector2, Vertex, Viewport};

#[test]
fn rubber_band_selects_vertex_under_box() {
    let mut ed = Editor::default();
    ed.viewport = Viewport::new(Vector2::ZERO, Vector2::new(400.0, 400.0), 1.0, 1.0);
    let mut ctx = PathHitContext::new(1.0);
    let v = ed.graph.add_vertex(Vertex::at(Vector2::ZERO));
    let held = Buttons { left: true, ..Buttons::default() };

    let press = PointerEvent::new(Vector2::new(180.0, 180.0), PointerButton::Left).with_buttons(held);
    ed.pointer_down(&mut ctx, &press);
    let release = PointerEvent::new(Vector2::new(220.0, 220.0), PointerButton::Left);
    ed.pointer_up(&mut ctx, &release);
    assert_eq!(ed.selection(), &[Element::Vertex(v)]);

    // a box away from the vertex replaces the selection with nothing
    let press = PointerEvent::new(Vector2::new(250.0, 250.0), PointerButton::Left).with_buttons(held);
    ed.pointer_down(&mut ctx, &press);
    let release = PointerEvent::new(Vector2::new(260.0, 260.0), PointerButton::Left);
    ed.pointer_up(&mut ctx, &release);
    assert!(ed.selection().is_empty());
}

#[test]
fn box_picks_edges_it_crosses() {
    let mut g = Graph::new();
    let a = g.add_vertex(Vertex::at(Vector2::new(-100.0, 0.0)));
    let b = g.add_vertex(Vertex::at(Vector2::new(100.0, 0.0)));
    let e = g.add_edge(a, b).unwrap();
    let hits = elements_in_box(&g, &Rect::new(-10.0, -10.0, 20.0, 20.0), 0.01);
    assert_eq!(hits, vec![Element::Edge(e)]);
    let hits = elements_in_box(&g, &Rect::new(-10.0, 5.0, 20.0, 20.0), 0.01);
    assert!(hits.is_empty());
}
