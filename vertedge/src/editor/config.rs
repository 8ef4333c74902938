use serde::{Deserialize, Serialize};

use crate::geometry::vector::Vector2;
use crate::model::color;

/// Interaction tuning. Every field has a default, so hosts may pass a
/// partial object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Parameter step used when sampling curves.
    pub curve_sampling_interval: f64,
    /// Drags shorter than this on both axes snap back, in device pixels.
    pub revert_proximity_pixels: f64,
    /// Reach of the capture box resize handles, in screen pixels.
    pub resize_proximity_pixels: f64,
    /// A dragged curve straightens below this turning angle, in radians.
    pub straighten_angle: f64,
    pub scroll_zoom_multiplier: f64,
    pub key_zoom_amount: f64,
    pub default_line_dash: Vec<f64>,
    pub highlight_color: String,
    pub default_title: String,
    pub ghost_line_dash: Vec<f64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            curve_sampling_interval: 0.01,
            revert_proximity_pixels: 8.0,
            resize_proximity_pixels: 12.0,
            straighten_angle: 0.3,
            scroll_zoom_multiplier: 0.0005,
            key_zoom_amount: 0.1,
            default_line_dash: vec![2.0, 2.0],
            highlight_color: color::BLUE.to_string(),
            default_title: String::from("Untitled Graph"),
            ghost_line_dash: vec![4.0, 4.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub enabled: bool,
    pub axes_visible: bool,
    pub x_step: f64,
    pub y_step: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { enabled: false, axes_visible: false, x_step: 50.0, y_step: 50.0 }
    }
}

impl GridSettings {
    /// Steps below one unit are raised to one.
    pub fn set_steps(&mut self, x_step: f64, y_step: f64) {
        let fix = |s: f64| if s.is_finite() && s >= 1.0 { s } else { 1.0 };
        self.x_step = fix(x_step);
        self.y_step = fix(y_step);
    }

    pub fn snap(&self, pos: Vector2) -> Vector2 {
        if !self.enabled {
            return pos;
        }
        Vector2::new(
            (pos.x / self.x_step).round() * self.x_step,
            (pos.y / self.y_step).round() * self.y_step,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let c: EditorConfig = serde_json::from_str(r#"{"revert_proximity_pixels": 4}"#).unwrap();
        assert_eq!(c.revert_proximity_pixels, 4.0);
        assert_eq!(c.curve_sampling_interval, 0.01);
        assert_eq!(c.default_title, "Untitled Graph");
    }

    #[test]
    fn snapping_only_when_enabled() {
        let mut g = GridSettings::default();
        let p = Vector2::new(74.0, -26.0);
        assert_eq!(g.snap(p), p);
        g.enabled = true;
        assert_eq!(g.snap(p), Vector2::new(50.0, -50.0));
        g.set_steps(0.0, 20.0);
        assert_eq!(g.x_step, 1.0);
        assert_eq!(g.snap(p), Vector2::new(74.0, -20.0));
    }
}
