use std::time::Instant;

use vertedge::algorithms::picking::element_at;
use vertedge::render::PathHitContext;
use vertedge::{Graph, Vector2, Vertex, Viewport};

const SPACING: f64 = 40.0;

fn build_grid_graph(edges_target: usize) -> (Graph, usize) {
    let mut g = Graph::new();
    // rows of vertices joined horizontally until ~edges_target
    let w = 60usize;
    let h = 60usize;
    let mut ids = Vec::with_capacity(w * h);
    for j in 0..h {
        for i in 0..w {
            let mut v = Vertex::at(Vector2::new(i as f64 * SPACING, j as f64 * SPACING));
            v.r = 6.0;
            ids.push(g.add_vertex(v));
        }
    }
    let mut ecount = 0usize;
    'outer: for j in 0..h {
        for i in 0..(w - 1) {
            if g.add_edge(ids[j * w + i], ids[j * w + i + 1]).is_ok() {
                ecount += 1;
            }
            if ecount >= edges_target {
                break 'outer;
            }
        }
    }
    (g, w)
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut edges = 2000usize;
    let mut picks = 2000usize;
    let mut zoom = 1.0f64;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--edges=") {
            if let Ok(v) = val.parse() {
                edges = v;
            }
        } else if let Some(val) = a.strip_prefix("--picks=") {
            if let Ok(v) = val.parse() {
                picks = v;
            }
        } else if let Some(val) = a.strip_prefix("--zoom=") {
            if let Ok(v) = val.parse() {
                zoom = v;
            }
        } else if let Some(val) = a.strip_prefix("--assert-ms=") {
            if let Ok(v) = val.parse() {
                assert_ms = Some(v);
            }
        }
    }

    let (g, w) = build_grid_graph(edges);
    let extent = w as f64 * SPACING;
    let view = Viewport::new(Vector2::new(0.5 * extent, 0.5 * extent), Vector2::new(extent, extent), zoom, 1.0);
    let mut ctx = PathHitContext::new(view.scale());

    // alternate between vertex centres and edge midpoints
    let mut times_ms: Vec<f64> = Vec::with_capacity(picks);
    let start_all = Instant::now();
    let mut hits = 0usize;
    for k in 0..picks {
        let i = (k % w) as f64;
        let j = ((k / w) % w) as f64;
        let offset = if k % 2 == 0 { 0.0 } else { 0.5 * SPACING };
        let world = Vector2::new(i * SPACING + offset, j * SPACING + 0.7);
        let screen = view.transform(world);
        let t0 = Instant::now();
        if element_at(&g, &mut ctx, &view, screen, &[]).is_some() {
            hits += 1;
        }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!(
        "vertices={} edges={} picks={} zoom={} hits={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}",
        g.vertex_count(),
        g.edge_count(),
        picks,
        zoom,
        hits,
        dur_all,
        med,
        p90,
        p99
    );
    if let Some(th) = assert_ms {
        if med > th {
            eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th);
            std::process::exit(1);
        }
    }
}
