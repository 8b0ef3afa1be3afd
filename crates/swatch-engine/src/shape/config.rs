use crate::coords::CornerRadii;
use crate::paint::{Argb, Opacity};

use super::ShapeMode;

/// Immutable description of a filled shape, reused across redraws.
///
/// Constructors mirror the common ways hosts ask for a swatch: a circle by
/// default, a circle-or-square switch, a uniform corner radius, or four
/// independent radii.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeConfig {
    color: Argb,
    mode: ShapeMode,
}

impl ShapeConfig {
    #[inline]
    pub fn with_mode(color: Argb, mode: ShapeMode) -> Self {
        Self { color, mode }
    }

    /// Circle inscribed in the bounds.
    #[inline]
    pub fn circle(color: Argb) -> Self {
        Self::with_mode(color, ShapeMode::Circle)
    }

    /// Sharp-cornered rectangle filling the bounds.
    #[inline]
    pub fn rect(color: Argb) -> Self {
        Self::with_mode(color, ShapeMode::PlainRect)
    }

    /// Circle when `is_circle`, plain rectangle otherwise.
    #[inline]
    pub fn new(color: Argb, is_circle: bool) -> Self {
        if is_circle { Self::circle(color) } else { Self::rect(color) }
    }

    /// Same radius on all four corners.
    #[inline]
    pub fn rounded(color: Argb, radius: f32) -> Self {
        Self::with_mode(color, ShapeMode::RoundedRect(CornerRadii::all(radius)))
    }

    /// Independent radius per corner, clockwise from top-left.
    #[inline]
    pub fn rounded_corners(
        color: Argb,
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    ) -> Self {
        let radii = CornerRadii::new(top_left, top_right, bottom_right, bottom_left);
        Self::with_mode(color, ShapeMode::RoundedRect(radii))
    }

    #[inline]
    pub fn color(&self) -> Argb {
        self.color
    }

    #[inline]
    pub fn mode(&self) -> ShapeMode {
        self.mode
    }

    /// Always true; kept on the config so backends read it from one place.
    #[inline]
    pub fn anti_alias(&self) -> bool {
        true
    }

    /// Classification of the configured color, not of any runtime override.
    #[inline]
    pub fn opacity(&self) -> Opacity {
        self.color.opacity()
    }
}
