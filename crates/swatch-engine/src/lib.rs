//! Swatch engine crate.
//!
//! Turns a shape configuration (circle, plain rectangle, rounded rectangle) plus
//! per-draw bounds into a fill geometry, and hands it to a fill backend.

pub mod backend;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod shape;
