//! Fill backends.
//!
//! A backend receives one already-built [`Geometry`] per draw together with
//! the paint state and does the actual rasterization (or records the call).
//! Backends must accept degenerate geometry (zero radius, zero area) and
//! treat it as a no-op.

mod error;
mod pixmap;
mod recording;

pub use error::BackendError;
pub use pixmap::PixmapBackend;
pub use recording::{FillCall, RecordingBackend};

use crate::coords::{Rect, Vec2};
use crate::paint::PaintState;
use crate::path::Path;
use crate::shape::Geometry;

/// Primitive fill operations a 2D backend must provide.
pub trait FillBackend {
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &PaintState);

    fn fill_rect(&mut self, rect: Rect, paint: &PaintState);

    fn fill_path(&mut self, path: &Path, paint: &PaintState);

    /// Dispatches `geometry` to the matching primitive.
    fn fill(&mut self, geometry: &Geometry, paint: &PaintState) {
        match geometry {
            Geometry::Circle { center, radius } => self.fill_circle(*center, *radius, paint),
            Geometry::Rect(rect) => self.fill_rect(*rect, paint),
            Geometry::Path(path) => self.fill_path(path, paint),
        }
    }
}
