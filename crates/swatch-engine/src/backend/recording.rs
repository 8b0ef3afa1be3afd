use crate::coords::{Rect, Vec2};
use crate::paint::{Argb, PaintState};
use crate::path::Path;

use super::FillBackend;

/// A fill recorded by [`RecordingBackend`], with the color already resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum FillCall {
    Circle { center: Vec2, radius: f32, color: Argb, anti_alias: bool },
    Rect { rect: Rect, color: Argb, anti_alias: bool },
    Path { path: Path, color: Argb, anti_alias: bool },
}

impl FillCall {
    #[inline]
    pub fn color(&self) -> Argb {
        match self {
            FillCall::Circle { color, .. }
            | FillCall::Rect { color, .. }
            | FillCall::Path { color, .. } => *color,
        }
    }
}

/// Backend that records fills in call order instead of drawing them.
///
/// Useful for hosts that replay draws later and for inspecting geometry.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<FillCall>,
}

impl RecordingBackend {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn calls(&self) -> &[FillCall] {
        &self.calls
    }

    /// Drops recorded calls, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl FillBackend for RecordingBackend {
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &PaintState) {
        self.calls.push(FillCall::Circle {
            center,
            radius,
            color: paint.effective_color(),
            anti_alias: paint.anti_alias,
        });
    }

    fn fill_rect(&mut self, rect: Rect, paint: &PaintState) {
        self.calls.push(FillCall::Rect {
            rect,
            color: paint.effective_color(),
            anti_alias: paint.anti_alias,
        });
    }

    fn fill_path(&mut self, path: &Path, paint: &PaintState) {
        self.calls.push(FillCall::Path {
            path: path.clone(),
            color: paint.effective_color(),
            anti_alias: paint.anti_alias,
        });
    }
}
