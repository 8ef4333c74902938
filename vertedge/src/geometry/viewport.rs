use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::vector::Vector2;

/// Pan/zoom transform between world coordinates and canvas pixels.
///
/// `zoom` and its inverse are stored together and only change through the
/// setters, so `izoom == 1 / zoom` holds at all times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    center: Vector2,
    size: Vector2,
    zoom: f64,
    izoom: f64,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(Vector2::ZERO, Vector2::ZERO, 1.0, 1.0)
    }
}

impl Viewport {
    pub fn new(center: Vector2, size: Vector2, zoom: f64, scale: f64) -> Self {
        Self {
            center,
            size,
            zoom,
            izoom: 1.0 / zoom,
            scale,
        }
    }

    #[inline] pub fn center(&self) -> Vector2 { self.center }
    #[inline] pub fn size(&self) -> Vector2 { self.size }
    #[inline] pub fn zoom(&self) -> f64 { self.zoom }
    #[inline] pub fn izoom(&self) -> f64 { self.izoom }
    /// Device pixel ratio of the backing canvas.
    #[inline] pub fn scale(&self) -> f64 { self.scale }

    pub fn set_center(&mut self, center: Vector2) {
        self.center = center;
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.size = size;
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        self.izoom = 1.0 / zoom;
    }

    pub fn set_izoom(&mut self, izoom: f64) {
        self.izoom = izoom;
        self.zoom = 1.0 / izoom;
    }

    #[inline]
    pub fn transform_x(&self, world_x: f64) -> f64 {
        (world_x - self.center.x) * self.zoom + self.size.x * 0.5
    }

    #[inline]
    pub fn transform_y(&self, world_y: f64) -> f64 {
        (world_y - self.center.y) * self.zoom + self.size.y * 0.5
    }

    /// World position to screen position.
    pub fn transform(&self, world: Vector2) -> Vector2 {
        Vector2::new(self.transform_x(world.x), self.transform_y(world.y))
    }

    #[inline]
    pub fn locate_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.size.x * 0.5) * self.izoom + self.center.x
    }

    #[inline]
    pub fn locate_y(&self, screen_y: f64) -> f64 {
        (screen_y - self.size.y * 0.5) * self.izoom + self.center.y
    }

    /// Screen position to world position.
    pub fn locate(&self, screen: Vector2) -> Vector2 {
        Vector2::new(self.locate_x(screen.x), self.locate_y(screen.y))
    }

    pub fn transform_rect(&self, world: &Rect) -> Rect {
        world.transformed(self)
    }

    pub fn locate_rect(&self, screen: &Rect) -> Rect {
        screen.located(self)
    }

    /// Multiplies zoom by `1 + amount` (or divides by `1 - amount` when
    /// negative). With a screen `target`, the world point under it stays put.
    pub fn change_zoom(&mut self, amount: f64, target: Option<Vector2>) {
        if amount == 0.0 || !amount.is_finite() {
            return;
        }
        let old_pos = target.map(|t| self.locate(t));
        if amount > 0.0 {
            self.set_zoom(self.zoom * (1.0 + amount));
        } else {
            self.set_zoom(self.zoom / (1.0 - amount));
        }
        if let (Some(target), Some(old_pos)) = (target, old_pos) {
            self.center = self.center + (old_pos - self.locate(target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_and_inverse_stay_in_sync() {
        let mut v = Viewport::default();
        v.set_zoom(4.0);
        assert_eq!(v.izoom(), 0.25);
        v.set_izoom(0.5);
        assert_eq!(v.zoom(), 2.0);
    }

    #[test]
    fn origin_maps_to_canvas_center() {
        let v = Viewport::new(Vector2::ZERO, Vector2::new(800.0, 600.0), 2.0, 1.0);
        assert_eq!(v.transform(Vector2::ZERO), Vector2::new(400.0, 300.0));
        assert_eq!(v.transform(Vector2::new(10.0, -5.0)), Vector2::new(420.0, 290.0));
        assert_eq!(v.locate(Vector2::new(420.0, 290.0)), Vector2::new(10.0, -5.0));
    }

    #[test]
    fn zoom_keeps_target_fixed() {
        let mut v = Viewport::new(Vector2::new(5.0, 5.0), Vector2::new(200.0, 100.0), 1.0, 1.0);
        let target = Vector2::new(30.0, 70.0);
        let before = v.locate(target);
        v.change_zoom(0.5, Some(target));
        let after = v.locate(target);
        assert!((before - after).magnitude() < 1e-9);
        assert_eq!(v.zoom(), 1.5);
        v.change_zoom(-0.5, None);
        assert!((v.zoom() - 1.0).abs() < 1e-12);
    }
}
