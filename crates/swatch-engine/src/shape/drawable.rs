use std::sync::Arc;

use crate::backend::FillBackend;
use crate::coords::Bounds;
use crate::paint::{ColorFilter, Opacity, PaintState};

use super::{Geometry, RenderPath, ShapeConfig};

/// Drawable contract consumed by host renderers.
///
/// Implementors compute their fill region from the bounds handed in for the
/// current frame; nothing about the bounds is retained between calls.
pub trait Shape {
    fn geometry(&self, bounds: Bounds) -> Geometry;

    fn paint_state(&self) -> &PaintState;

    /// Computes the geometry for `bounds` and fills it on `backend`.
    fn draw(&self, bounds: Bounds, backend: &mut dyn FillBackend) {
        let geometry = self.geometry(bounds);
        backend.fill(&geometry, self.paint_state());
    }
}

/// Solid-color swatch: a [`ShapeConfig`] plus the host-adjustable paint state.
#[derive(Debug, Clone)]
pub struct ShapeDrawable {
    config: ShapeConfig,
    paint: PaintState,
}

impl ShapeDrawable {
    pub fn new(config: ShapeConfig) -> Self {
        Self {
            config,
            paint: PaintState::new(config.color()),
        }
    }

    #[inline]
    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Runtime alpha applied on top of the configured color's alpha.
    #[inline]
    pub fn set_alpha(&mut self, alpha: u8) {
        self.paint.alpha = alpha;
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.paint.alpha
    }

    #[inline]
    pub fn set_color_filter(&mut self, filter: Option<Arc<dyn ColorFilter>>) {
        self.paint.color_filter = filter;
    }

    /// Opacity of the configured color. Alpha overrides and filters are not
    /// taken into account.
    #[inline]
    pub fn opacity(&self) -> Opacity {
        self.config.opacity()
    }
}

impl Shape for ShapeDrawable {
    fn geometry(&self, bounds: Bounds) -> Geometry {
        let path = RenderPath::select(&self.config.mode());
        log::trace!("draw {path:?} in {bounds:?}");
        Geometry::build(path, bounds)
    }

    #[inline]
    fn paint_state(&self) -> &PaintState {
        &self.paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FillCall, RecordingBackend};
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Argb, TintFilter};

    #[test]
    fn circle_config_fills_circle() {
        let drawable = ShapeDrawable::new(ShapeConfig::circle(Argb(0xFF11_2233)));
        let mut backend = RecordingBackend::new();
        drawable.draw(Bounds::new(0, 0, 40, 40), &mut backend);

        let [FillCall::Circle { center, radius, color, anti_alias }] = backend.calls() else {
            panic!("expected one circle fill, got {:?}", backend.calls());
        };
        assert_eq!(*center, Vec2::new(20.0, 20.0));
        assert_eq!(*radius, 20.0);
        assert_eq!(*color, Argb(0xFF11_2233));
        assert!(*anti_alias);
    }

    #[test]
    fn rect_config_fills_bounds() {
        let drawable = ShapeDrawable::new(ShapeConfig::rect(Argb(0xFF00_0000)));
        let mut backend = RecordingBackend::new();
        drawable.draw(Bounds::new(1, 2, 3, 4), &mut backend);

        assert!(matches!(
            backend.calls(),
            [FillCall::Rect { rect, .. }] if *rect == Rect::from_ltrb(1.0, 2.0, 3.0, 4.0)
        ));
    }

    #[test]
    fn rounded_config_fills_path() {
        let drawable = ShapeDrawable::new(ShapeConfig::rounded(Argb(0xFF00_0000), 8.0));
        let mut backend = RecordingBackend::new();
        drawable.draw(Bounds::new(0, 0, 64, 32), &mut backend);

        let [FillCall::Path { path, .. }] = backend.calls() else {
            panic!("expected one path fill");
        };
        assert_eq!(path.arcs().count(), 4);
    }

    #[test]
    fn geometry_is_recomputed_per_bounds() {
        let drawable = ShapeDrawable::new(ShapeConfig::circle(Argb(0xFF00_0000)));
        let small = drawable.geometry(Bounds::new(0, 0, 10, 10));
        let large = drawable.geometry(Bounds::new(0, 0, 100, 100));
        assert_ne!(small, large);
    }

    #[test]
    fn alpha_and_filter_reach_backend_but_not_opacity() {
        let mut drawable = ShapeDrawable::new(ShapeConfig::circle(Argb(0xFFFF_0000)));
        drawable.set_alpha(0);
        drawable.set_color_filter(Some(Arc::new(TintFilter(Argb(0xFF00_00FF)))));
        assert_eq!(drawable.alpha(), 0);
        assert_eq!(drawable.opacity(), Opacity::Opaque);

        let mut backend = RecordingBackend::new();
        drawable.draw(Bounds::new(0, 0, 10, 10), &mut backend);
        assert_eq!(backend.calls()[0].color(), Argb(0x0000_00FF));

        drawable.set_color_filter(None);
        drawable.set_alpha(255);
        backend.clear();
        drawable.draw(Bounds::new(0, 0, 10, 10), &mut backend);
        assert_eq!(backend.calls()[0].color(), Argb(0xFFFF_0000));
    }

    #[test]
    fn extreme_and_inverted_bounds_draw_without_panicking() {
        let mut backend = RecordingBackend::new();
        let wide = Bounds::new(-2_000_000_000, 0, 2_000_000_000, 10);
        let inverted = Bounds::new(100, 50, 0, 0);
        for config in [
            ShapeConfig::circle(Argb(0xFF00_0000)),
            ShapeConfig::rect(Argb(0xFF00_0000)),
            ShapeConfig::rounded(Argb(0xFF00_0000), 4.0),
        ] {
            let drawable = ShapeDrawable::new(config);
            drawable.draw(wide, &mut backend);
            drawable.draw(inverted, &mut backend);
        }

        assert_eq!(backend.calls().len(), 6);
        assert!(matches!(
            backend.calls()[0],
            FillCall::Circle { center, radius, .. }
                if center == Vec2::new(0.0, 5.0) && radius == 5.0
        ));
        assert!(matches!(
            backend.calls()[1],
            FillCall::Circle { center, radius, .. }
                if center == Vec2::new(50.0, 25.0) && radius == 25.0
        ));
    }
}
