//! Shape configuration and geometry.
//!
//! Responsibilities:
//! - describe what to draw (`ShapeConfig`, `ShapeMode`)
//! - pick the render path for a mode (`RenderPath`)
//! - turn draw bounds into a fill geometry (`Geometry`)
//! - expose the drawable contract used by hosts (`Shape`, `ShapeDrawable`)

mod config;
mod drawable;
mod geometry;
mod mode;

pub use config::ShapeConfig;
pub use drawable::{Shape, ShapeDrawable};
pub use geometry::{Geometry, circle_geometry, rounded_rect_path};
pub use mode::{RenderPath, ShapeMode};
