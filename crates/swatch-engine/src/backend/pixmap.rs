use resvg::tiny_skia::{self, FillRule, Pixmap, Transform};

use crate::coords::{Rect, Vec2};
use crate::paint::{Argb, PaintState};
use crate::path::{Path, PathSegment};

use super::{BackendError, FillBackend};

/// CPU raster target backed by a tiny-skia pixmap.
///
/// Pixels are stored premultiplied; accessors return straight alpha.
pub struct PixmapBackend {
    pixmap: Pixmap,
}

impl PixmapBackend {
    pub fn new(width: u32, height: u32) -> Result<Self, BackendError> {
        let pixmap = Pixmap::new(width, height).ok_or(BackendError::InvalidSize { width, height })?;
        log::debug!("pixmap backend {width}x{height}");
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Argb) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    /// Straight-alpha color at `(x, y)`, `None` outside the target.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Argb::from_argb(c.alpha(), c.red(), c.green(), c.blue())
        })
    }

    /// Row-major straight-alpha RGBA bytes, ready for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    fn fill_skia_path(&mut self, path: &tiny_skia::Path, paint: &PaintState) {
        self.pixmap
            .fill_path(path, &skia_paint(paint), FillRule::Winding, Transform::identity(), None);
    }
}

impl FillBackend for PixmapBackend {
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &PaintState) {
        if radius.is_nan() || radius <= 0.0 {
            log::debug!("skipping zero-radius circle at {center:?}");
            return;
        }
        match tiny_skia::PathBuilder::from_circle(center.x, center.y, radius) {
            Some(path) => self.fill_skia_path(&path, paint),
            None => log::debug!("skipping non-finite circle at {center:?} r={radius}"),
        }
    }

    fn fill_rect(&mut self, rect: Rect, paint: &PaintState) {
        if !rect.is_finite() {
            log::debug!("skipping non-finite rect {rect:?}");
            return;
        }
        let r = rect.normalized();
        if r.is_empty() {
            log::debug!("skipping empty rect {rect:?}");
            return;
        }
        match tiny_skia::Rect::from_ltrb(r.left(), r.top(), r.right(), r.bottom()) {
            Some(skia_rect) => {
                self.pixmap
                    .fill_rect(skia_rect, &skia_paint(paint), Transform::identity(), None);
            }
            None => log::debug!("skipping rect tiny-skia cannot represent {rect:?}"),
        }
    }

    fn fill_path(&mut self, path: &Path, paint: &PaintState) {
        if path.is_empty() || path.anchor_points().len() < 3 {
            log::debug!("skipping degenerate path");
            return;
        }
        match to_skia_path(path) {
            Some(skia_path) => self.fill_skia_path(&skia_path, paint),
            None => log::debug!("skipping path with no fillable area"),
        }
    }
}

fn skia_paint(paint: &PaintState) -> tiny_skia::Paint<'static> {
    let [r, g, b, a] = paint.effective_color().to_rgba8();
    let mut out = tiny_skia::Paint::default();
    out.set_color_rgba8(r, g, b, a);
    out.anti_alias = paint.anti_alias;
    out
}

/// Lowers arcs to cubics; tiny-skia has no elliptical arc primitive.
fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for seg in path.segments() {
        match *seg {
            PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
            PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
            PathSegment::ArcTo(arc) => {
                for [_, c1, c2, to] in arc.cubics() {
                    pb.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                }
            }
            PathSegment::Close => pb.close(),
        }
    }
    pb.finish()
}
