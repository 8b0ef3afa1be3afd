use crate::coords::{Bounds, CornerRadii, Rect, Vec2};
use crate::path::{Arc, Path};

use super::RenderPath;

/// Fill region handed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Circle { center: Vec2, radius: f32 },
    Rect(Rect),
    Path(Path),
}

impl Geometry {
    /// Builds the geometry for `path` inside `bounds`.
    pub fn build(path: RenderPath, bounds: Bounds) -> Self {
        match path {
            RenderPath::Circle => {
                let (center, radius) = circle_geometry(bounds);
                Geometry::Circle { center, radius }
            }
            RenderPath::PlainRect => Geometry::Rect(bounds.to_rect()),
            RenderPath::RoundedRect(radii) => Geometry::Path(rounded_rect_path(bounds, radii)),
        }
    }
}

/// Circle inscribed in `bounds`, touching the shorter dimension.
///
/// Zero-area bounds give a zero radius at the bounds' center.
#[inline]
pub fn circle_geometry(bounds: Bounds) -> (Vec2, f32) {
    (bounds.center(), bounds.max_radius())
}

/// Closed rounded-rectangle outline: four quarter arcs, clockwise from top-left.
///
/// Each requested radius is clamped on its own against `bounds.max_radius()`;
/// no space is shared out between neighbours. A zero radius yields a point arc
/// on the exact corner, so that corner stays sharp.
pub fn rounded_rect_path(bounds: Bounds, radii: CornerRadii) -> Path {
    let r = radii.clamped(bounds.max_radius());
    let (l, t, rt, b) = (
        bounds.left as f32,
        bounds.top as f32,
        bounds.right as f32,
        bounds.bottom as f32,
    );

    let corner = |x: f32, y: f32, radius: f32| Rect::new(x, y, 2.0 * radius, 2.0 * radius);

    let mut path = Path::new();
    path.arc_to(Arc::new(corner(l, t, r.top_left), 180.0, 90.0))
        .arc_to(Arc::new(corner(rt - 2.0 * r.top_right, t, r.top_right), 270.0, 90.0))
        .arc_to(Arc::new(
            corner(rt - 2.0 * r.bottom_right, b - 2.0 * r.bottom_right, r.bottom_right),
            0.0,
            90.0,
        ))
        .arc_to(Arc::new(corner(l, b - 2.0 * r.bottom_left, r.bottom_left), 90.0, 90.0))
        .close();

    log::trace!("rounded_rect_path bounds={bounds:?} clamped={r:?}");
    path
}
