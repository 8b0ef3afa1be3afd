//! Paint model shared between shapes and backends.
//!
//! Scope:
//! - packed ARGB color and its opacity classification
//! - per-draw paint state (alpha override, color filter)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod filter;
pub mod state;

pub use color::{Argb, Opacity};
pub use filter::{ColorFilter, LightingFilter, TintFilter};
pub use state::PaintState;
