//! Capture box hit regions and resizing.

use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, BitXorAssign};

use serde::{Deserialize, Serialize};

use crate::geometry::rect::Rect;
use crate::geometry::vector::Vector2;

/// Which part of a box the cursor is over. Side bits combine into corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxRegion(pub u8);

impl BoxRegion {
    pub const NONE: BoxRegion = BoxRegion(0b0000);
    /// East side.
    pub const POSITIVE_X: BoxRegion = BoxRegion(0b0001);
    /// West side.
    pub const NEGATIVE_X: BoxRegion = BoxRegion(0b0010);
    /// South side.
    pub const POSITIVE_Y: BoxRegion = BoxRegion(0b0100);
    /// North side.
    pub const NEGATIVE_Y: BoxRegion = BoxRegion(0b1000);
    pub const INTERNAL: BoxRegion = BoxRegion(0b01_0000);
    pub const EXTERNAL: BoxRegion = BoxRegion(0b10_0000);
    pub const ALL_X: BoxRegion = BoxRegion(0b0011);
    pub const ALL_Y: BoxRegion = BoxRegion(0b1100);
    pub const INTERNAL_ALL: BoxRegion = BoxRegion(0b01_1111);
    pub const EXTERNAL_ALL: BoxRegion = BoxRegion(0b10_1111);

    #[inline]
    pub fn contains(self, other: BoxRegion) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn intersects(self, other: BoxRegion) -> bool {
        self.0 & other.0 != 0
    }

    /// Compass name of a side or corner, as used by CSS `*-resize` cursors.
    pub fn compass(self) -> Option<&'static str> {
        const E: u8 = BoxRegion::POSITIVE_X.0;
        const W: u8 = BoxRegion::NEGATIVE_X.0;
        const S: u8 = BoxRegion::POSITIVE_Y.0;
        const N: u8 = BoxRegion::NEGATIVE_Y.0;
        match self.0 {
            x if x == N => Some("n"),
            x if x == E => Some("e"),
            x if x == S => Some("s"),
            x if x == W => Some("w"),
            x if x == N | E => Some("ne"),
            x if x == N | W => Some("nw"),
            x if x == S | E => Some("se"),
            x if x == S | W => Some("sw"),
            _ => None,
        }
    }

    pub fn cursor(self) -> Option<String> {
        self.compass().map(|c| format!("{c}-resize"))
    }
}

impl BitOr for BoxRegion {
    type Output = BoxRegion;
    fn bitor(self, rhs: BoxRegion) -> BoxRegion {
        BoxRegion(self.0 | rhs.0)
    }
}

impl BitOrAssign for BoxRegion {
    fn bitor_assign(&mut self, rhs: BoxRegion) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BoxRegion {
    type Output = BoxRegion;
    fn bitand(self, rhs: BoxRegion) -> BoxRegion {
        BoxRegion(self.0 & rhs.0)
    }
}

impl BitXor for BoxRegion {
    type Output = BoxRegion;
    fn bitxor(self, rhs: BoxRegion) -> BoxRegion {
        BoxRegion(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for BoxRegion {
    fn bitxor_assign(&mut self, rhs: BoxRegion) {
        self.0 ^= rhs.0;
    }
}

/// Region of the screen-space box `area` under `cursor`.
///
/// A side is grabbed when the cursor is within `proximity` of it and
/// strictly nearer to it than to the opposite side. Inside without any
/// grabbed side the whole box moves.
pub fn resize_region(area: &Rect, cursor: Vector2, proximity: f64) -> BoxRegion {
    if !area.inflated(proximity).contains(cursor) {
        return BoxRegion::EXTERNAL;
    }
    let de = (area.xw() - cursor.x).abs();
    let dw = (area.x - cursor.x).abs();
    let ds = (area.yh() - cursor.y).abs();
    let dn = (area.y - cursor.y).abs();
    let mut region = BoxRegion::NONE;
    if de <= proximity && de < dw {
        region |= BoxRegion::POSITIVE_X;
    }
    if dw <= proximity && dw < de {
        region |= BoxRegion::NEGATIVE_X;
    }
    if ds <= proximity && ds < dn {
        region |= BoxRegion::POSITIVE_Y;
    }
    if dn <= proximity && dn < ds {
        region |= BoxRegion::NEGATIVE_Y;
    }
    if region == BoxRegion::NONE { BoxRegion::INTERNAL_ALL } else { region }
}

/// World-space capture box as it was when the drag started, together with
/// the region being dragged.
///
/// Dragging a side across its opposite mirrors the snapshot and swaps the
/// region's bits for that axis, so the grabbed side keeps tracking the
/// cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureResize {
    pub area: Rect,
    pub region: BoxRegion,
}

impl CaptureResize {
    pub fn new(area: Rect, region: BoxRegion) -> Self {
        Self { area, region }
    }

    /// New capture box for a screen delta `(dx, dy)` since the drag began.
    /// Axes flagged for revert are left alone.
    pub fn apply(&mut self, dx: f64, dy: f64, revert_x: bool, revert_y: bool, izoom: f64) -> Rect {
        let a = self.area;
        let (mut l, mut r, mut t, mut b) = (a.x, a.xw(), a.y, a.yh());
        if !revert_y {
            if self.region.intersects(BoxRegion::NEGATIVE_Y) {
                t += dy * izoom;
            }
            if self.region.intersects(BoxRegion::POSITIVE_Y) {
                b += dy * izoom;
            }
        }
        if !revert_x {
            if self.region.intersects(BoxRegion::POSITIVE_X) {
                r += dx * izoom;
            }
            if self.region.intersects(BoxRegion::NEGATIVE_X) {
                l += dx * izoom;
            }
        }
        if t > b {
            self.region ^= BoxRegion::ALL_Y;
            self.area.y = a.yh();
            self.area.h = -a.h;
        }
        if l > r {
            self.region ^= BoxRegion::ALL_X;
            self.area.x = a.xw();
            self.area.w = -a.w;
        }
        Rect::new(l.min(r), t.min(b), (r - l).abs(), (b - t).abs())
    }

    /// Normalises `area` and enforces a minimum 1×1 size; a collapsed
    /// negative side is pushed back outward.
    pub fn finish(&self, area: &Rect) -> Rect {
        let mut out = area.normalized();
        if out.w < 1.0 {
            out.w = 1.0;
            if self.region.intersects(BoxRegion::NEGATIVE_X) {
                out.x -= 1.0;
            }
        }
        if out.h < 1.0 {
            out.h = 1.0;
            if self.region.intersects(BoxRegion::NEGATIVE_Y) {
                out.y -= 1.0;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(100.0, 100.0, 200.0, 100.0);

    #[test]
    fn regions_around_box() {
        assert_eq!(resize_region(&AREA, Vector2::new(0.0, 0.0), 12.0), BoxRegion::EXTERNAL);
        assert_eq!(resize_region(&AREA, Vector2::new(200.0, 150.0), 12.0), BoxRegion::INTERNAL_ALL);
        assert_eq!(resize_region(&AREA, Vector2::new(305.0, 150.0), 12.0), BoxRegion::POSITIVE_X);
        let corner = resize_region(&AREA, Vector2::new(95.0, 95.0), 12.0);
        assert_eq!(corner, BoxRegion::NEGATIVE_X | BoxRegion::NEGATIVE_Y);
        assert_eq!(corner.cursor().as_deref(), Some("nw-resize"));
        assert_eq!(BoxRegion::INTERNAL_ALL.compass(), None);
    }

    #[test]
    fn tiny_box_prefers_nearer_side() {
        let tiny = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(resize_region(&tiny, Vector2::new(3.0, 2.0), 12.0), BoxRegion::POSITIVE_X);
        // equidistant: neither side wins
        assert_eq!(resize_region(&tiny, Vector2::new(2.0, 2.0), 12.0), BoxRegion::INTERNAL_ALL);
    }

    #[test]
    fn dragging_east_side_grows_box() {
        let mut c = CaptureResize::new(AREA, BoxRegion::POSITIVE_X);
        let out = c.apply(50.0, 3.0, false, true, 0.5);
        assert_eq!(out, Rect::new(100.0, 100.0, 225.0, 100.0));
    }

    #[test]
    fn crossing_flips_region() {
        let mut c = CaptureResize::new(AREA, BoxRegion::NEGATIVE_Y);
        let out = c.apply(0.0, 150.0, true, false, 1.0);
        assert_eq!(out, Rect::new(100.0, 200.0, 200.0, 50.0));
        assert_eq!(c.region, BoxRegion::POSITIVE_Y);
        // the grabbed edge keeps following the cursor
        let out = c.apply(0.0, 160.0, true, false, 1.0);
        assert_eq!(out, Rect::new(100.0, 200.0, 200.0, 60.0));
    }

    #[test]
    fn finish_enforces_minimum_size() {
        let c = CaptureResize::new(AREA, BoxRegion::NEGATIVE_X);
        assert_eq!(c.finish(&Rect::new(50.0, 10.0, 0.0, 0.5)), Rect::new(49.0, 10.0, 1.0, 1.0));
    }
}
