use crate::geometry::vector::Vector2;
use crate::geometry::viewport::Viewport;
use crate::model::Element;
use crate::render::DrawContext;
use crate::Graph;

/// Topmost element under `screen`, or `None`.
///
/// Vertices paint above edges and later slots above earlier ones, so
/// vertices are tested first, each collection from the last slot back.
/// Selected elements get the tighter selected hit width.
pub fn element_at(
    g: &Graph,
    ctx: &mut dyn DrawContext,
    view: &Viewport,
    screen: Vector2,
    selection: &[Element],
) -> Option<Element> {
    if screen.is_nan() {
        return None;
    }
    for id in g.vertex_ids().rev() {
        let el = Element::Vertex(id);
        let Some(v) = g.vertex(id) else { continue };
        if v.contains(ctx, screen, selection.contains(&el), view, true) {
            return Some(el);
        }
    }
    for id in g.edge_ids().rev() {
        let el = Element::Edge(id);
        let (Some(e), Some(geom)) = (g.edge(id), g.edge_geometry(id)) else { continue };
        if e.contains(&geom, ctx, screen, selection.contains(&el), view, true) {
            return Some(el);
        }
    }
    None
}
