use crate::coords::CornerRadii;

/// What kind of shape a configuration describes.
///
/// Radii only exist on the rounded variant; a circle has nothing to ignore.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeMode {
    Circle,
    PlainRect,
    RoundedRect(CornerRadii),
}

/// The fill path actually taken for a mode.
///
/// Differs from [`ShapeMode`] in one case: a rounded rectangle whose radii are
/// all zero renders as a plain rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderPath {
    Circle,
    PlainRect,
    RoundedRect(CornerRadii),
}

impl RenderPath {
    #[inline]
    pub fn select(mode: &ShapeMode) -> Self {
        match *mode {
            ShapeMode::Circle => RenderPath::Circle,
            ShapeMode::PlainRect => RenderPath::PlainRect,
            ShapeMode::RoundedRect(radii) if radii.is_zero() => RenderPath::PlainRect,
            ShapeMode::RoundedRect(radii) => RenderPath::RoundedRect(radii),
        }
    }
}
