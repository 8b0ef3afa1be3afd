//! Coordinate and geometry types shared across shapes and backends.
//!
//! Canonical CPU space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! Angles are in degrees, 0° along +X and 90° along +Y (clockwise on screen).

mod bounds;
mod corner_radii;
mod rect;
mod vec2;

pub use bounds::Bounds;
pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
