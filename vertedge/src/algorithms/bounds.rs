use crate::geometry::curve::{quadratic_curve_vertex_x, quadratic_curve_vertex_y};
use crate::geometry::rect::Rect;
use crate::geometry::vector::Vector2;
use crate::model::{EdgeGeometry, Element, VertexId};
use crate::Graph;

#[derive(Clone, Copy, Debug)]
struct Extent {
    min: Vector2,
    max: Vector2,
}

impl Extent {
    fn empty() -> Self {
        Self {
            min: Vector2::new(f64::INFINITY, f64::INFINITY),
            max: Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    fn add_x(&mut self, x: f64, margin: f64) {
        self.min.x = self.min.x.min(x - margin);
        self.max.x = self.max.x.max(x + margin);
    }

    fn add_y(&mut self, y: f64, margin: f64) {
        self.min.y = self.min.y.min(y - margin);
        self.max.y = self.max.y.max(y + margin);
    }

    fn add(&mut self, p: Vector2, margin: f64) {
        self.add_x(p.x, margin);
        self.add_y(p.y, margin);
    }

    fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }
}

fn beyond_both(c: f64, a: f64, b: f64) -> bool {
    (c < a && c < b) || (c > a && c > b)
}

/// Bounding box of `elements` including stroke margins, rounded to whole
/// units. Edges bring their endpoint vertices along.
pub fn content_bounds(g: &Graph, elements: &[Element]) -> Option<Rect> {
    let mut ext = Extent::empty();
    let add_vertex = |ext: &mut Extent, id: VertexId| {
        if let Some(v) = g.vertex(id) {
            ext.add(v.pos(), v.margin());
        }
    };
    for &el in elements {
        match el {
            Element::Vertex(id) => add_vertex(&mut ext, id),
            Element::Edge(id) => {
                let (Some(e), Some(geom)) = (g.edge(id), g.edge_geometry(id)) else { continue };
                add_vertex(&mut ext, e.v1);
                add_vertex(&mut ext, e.v2);
                let m = e.margin();
                match geom {
                    EdgeGeometry::Line { a, b } => {
                        ext.add(a, m);
                        ext.add(b, m);
                    }
                    EdgeGeometry::Curve { a, cp, b } => {
                        ext.add(a, m);
                        ext.add(b, m);
                        if beyond_both(cp.x, a.x, b.x) {
                            if let Some(vx) = quadratic_curve_vertex_x(a, cp, b) {
                                ext.add_x(vx, m);
                            }
                        }
                        if beyond_both(cp.y, a.y, b.y) {
                            if let Some(vy) = quadratic_curve_vertex_y(a, cp, b) {
                                ext.add_y(vy, m);
                            }
                        }
                    }
                    EdgeGeometry::Loop { .. } => {
                        if let Some((c, r)) = geom.loop_circle() {
                            ext.add(c, r + m);
                        }
                    }
                }
            }
        }
    }
    if ext.is_empty() {
        return None;
    }
    let (x0, y0) = (ext.min.x.round(), ext.min.y.round());
    let (x1, y1) = (ext.max.x.round(), ext.max.y.round());
    Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Centre of the box spanned by vertex positions.
pub fn vertex_extent_center(g: &Graph) -> Option<Vector2> {
    let mut ext = Extent::empty();
    for v in g.vertices.iter().flatten() {
        ext.add(v.pos(), 0.0);
    }
    if ext.is_empty() { None } else { Some(ext.min.midpoint(ext.max)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vertex;

    #[test]
    fn curve_apex_extends_bounds() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::at(Vector2::new(0.0, 0.0)));
        let b = g.add_vertex(Vertex::at(Vector2::new(100.0, 0.0)));
        let e = g.add_edge(a, b).unwrap();
        g.edge_mut(e).unwrap().cp = Some(Vector2::new(50.0, 100.0));
        // vertices reach ±12, the apex at y=50 plus the 2 unit stroke margin
        assert_eq!(content_bounds(&g, &[Element::Edge(e)]), Some(Rect::new(-12.0, -12.0, 124.0, 64.0)));
    }

    #[test]
    fn loop_uses_its_circle() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::at(Vector2::ZERO));
        let l = g.add_loop(a, Vector2::new(0.0, -60.0)).unwrap();
        assert_eq!(content_bounds(&g, &[Element::Edge(l)]), Some(Rect::new(-32.0, -62.0, 64.0, 74.0)));
    }

    #[test]
    fn empty_inputs() {
        let g = Graph::new();
        assert_eq!(content_bounds(&g, &[]), None);
        assert_eq!(vertex_extent_center(&g), None);
    }
}
