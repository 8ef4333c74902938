// Centralized ingestion limits to harden against untrusted graph JSON

// Scene size caps
pub const MAX_VERTICES: usize = 200_000;
pub const MAX_EDGES: usize = 300_000;

// Dash patterns are tiny in practice; anything longer is garbage input
pub const MAX_DASH_ENTRIES: usize = 64;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;
pub const RADIUS_MAX: f64 = 1_000_000.0;
pub const WIDTH_MAX: f64 = 10_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_radius_bounds(r: f64) -> bool { r.is_finite() && r.abs() <= RADIUS_MAX }

#[inline]
pub fn in_width_bounds(w: f64) -> bool { w.is_finite() && w >= 0.0 && w <= WIDTH_MAX }

#[inline]
pub fn valid_dash(dash: &[f64]) -> bool {
    dash.len() <= MAX_DASH_ENTRIES && dash.iter().all(|d| d.is_finite() && *d >= 0.0)
}
