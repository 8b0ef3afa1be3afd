use std::sync::Arc;

use super::{Argb, ColorFilter};

/// Brush state handed to a backend alongside the geometry.
///
/// `alpha` is a runtime override applied on top of the color's own alpha; it
/// does not replace it. The filter, when present, runs before the override.
#[derive(Debug, Clone)]
pub struct PaintState {
    pub color: Argb,
    pub anti_alias: bool,
    pub alpha: u8,
    pub color_filter: Option<Arc<dyn ColorFilter>>,
}

impl PaintState {
    #[inline]
    pub fn new(color: Argb) -> Self {
        Self {
            color,
            anti_alias: true,
            alpha: 255,
            color_filter: None,
        }
    }

    /// Color the backend should actually fill with.
    pub fn effective_color(&self) -> Argb {
        let filtered = match &self.color_filter {
            Some(filter) => filter.apply(self.color),
            None => self.color,
        };
        filtered.modulate_alpha(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::TintFilter;

    #[test]
    fn defaults_are_antialiased_and_unmodulated() {
        let p = PaintState::new(Argb(0xFF12_3456));
        assert!(p.anti_alias);
        assert_eq!(p.alpha, 255);
        assert_eq!(p.effective_color(), Argb(0xFF12_3456));
    }

    #[test]
    fn alpha_override_composes_with_color_alpha() {
        let mut p = PaintState::new(Argb(0x8012_3456));
        p.alpha = 128;
        assert_eq!(p.effective_color(), Argb(0x4012_3456));
    }

    #[test]
    fn filter_runs_before_alpha_override() {
        let mut p = PaintState::new(Argb(0xFF12_3456));
        p.color_filter = Some(Arc::new(TintFilter(Argb(0xFF00_00FF))));
        p.alpha = 0;
        assert_eq!(p.effective_color(), Argb(0x0000_00FF));
        p.alpha = 255;
        assert_eq!(p.effective_color(), Argb(0xFF00_00FF));
    }
}
