use super::{Rect, Vec2};

/// Integer draw bounds supplied by the host on every draw call.
///
/// Edges are stored as given; nothing here assumes `right >= left` or
/// `bottom >= top`. Extents are computed in `i64`, so any pair of `i32` edges
/// is valid input.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Bounds of `width × height` anchored at `(x, y)`; far edges saturate.
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    #[inline]
    pub const fn width(self) -> i64 {
        self.right as i64 - self.left as i64
    }

    #[inline]
    pub const fn height(self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// `(right - left) / 2`, `(bottom - top) / 2` in float, sign preserved.
    #[inline]
    pub fn half_extents(self) -> Vec2 {
        Vec2::new(self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        let half = self.half_extents();
        Vec2::new(self.left as f32 + half.x, self.top as f32 + half.y)
    }

    /// Largest radius that fits half of the shorter dimension.
    ///
    /// Shared by the inscribed circle and as the clamp ceiling for every
    /// rounded corner.
    #[inline]
    pub fn max_radius(self) -> f32 {
        let half = self.half_extents();
        half.x.abs().min(half.y.abs())
    }

    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}
