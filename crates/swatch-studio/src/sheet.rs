use std::sync::Arc;

use anyhow::{Context, Result};
use swatch_engine::backend::PixmapBackend;
use swatch_engine::coords::Bounds;
use swatch_engine::paint::{Argb, LightingFilter, TintFilter};
use swatch_engine::shape::{Shape, ShapeConfig, ShapeDrawable};

use crate::config::StudioConfig;

const BACKGROUND: Argb = Argb(0xFFF4_F1EA);
const PADDING_DIVISOR: u32 = 8;

/// One labelled drawable on the sheet.
pub struct Sample {
    pub label: &'static str,
    pub drawable: ShapeDrawable,
    /// Aspect of the drawn bounds inside the square cell, as `(w, h)` fractions.
    pub aspect: (f32, f32),
}

impl Sample {
    fn new(label: &'static str, config: ShapeConfig) -> Self {
        Self { label, drawable: ShapeDrawable::new(config), aspect: (1.0, 1.0) }
    }

    fn wide(mut self) -> Self {
        self.aspect = (1.0, 0.5);
        self
    }
}

/// Every configuration the engine supports, in sheet order.
pub fn samples() -> Vec<Sample> {
    let mut alpha = ShapeDrawable::new(ShapeConfig::rounded(Argb(0xFF2E_7D32), 12.0));
    alpha.set_alpha(96);

    let mut tinted = ShapeDrawable::new(ShapeConfig::circle(Argb(0xFF90_A4AE)));
    tinted.set_color_filter(Some(Arc::new(TintFilter(Argb(0xFFE6_5100)))));

    let mut lit = ShapeDrawable::new(ShapeConfig::rect(Argb(0xFF40_4040)));
    let lighting = LightingFilter::new(Argb(0x00FF_FFFF), Argb(0x0000_4080));
    lit.set_color_filter(Some(Arc::new(lighting)));

    vec![
        Sample::new("circle", ShapeConfig::circle(Argb(0xFFD3_2F2F))),
        Sample::new("circle (wide bounds)", ShapeConfig::circle(Argb(0xFFC2_185B))).wide(),
        Sample::new("plain rect", ShapeConfig::rect(Argb(0xFF19_76D2))),
        Sample::new("rounded 16", ShapeConfig::rounded(Argb(0xFF00_897B), 16.0)),
        Sample::new("rounded 40 (clamped)", ShapeConfig::rounded(Argb(0xFF6A_1B9A), 40.0))
            .wide(),
        Sample::new(
            "per-corner 60/10/10/10",
            ShapeConfig::rounded_corners(Argb(0xFFF9_A825), 60.0, 10.0, 10.0, 10.0),
        ),
        Sample::new(
            "per-corner 0/24/0/24",
            ShapeConfig::rounded_corners(Argb(0xFF5D_4037), 0.0, 24.0, 0.0, 24.0),
        ),
        Sample::new("translucent", ShapeConfig::circle(Argb(0x8003_9BE5))),
        Sample { label: "alpha override", drawable: alpha, aspect: (1.0, 1.0) },
        Sample { label: "tint filter", drawable: tinted, aspect: (1.0, 1.0) },
        Sample { label: "lighting filter", drawable: lit, aspect: (1.0, 1.0) },
    ]
}

/// Bounds of cell `index` in a grid of `columns`, padded and shaped by `aspect`.
pub fn cell_bounds(index: u32, columns: u32, cell_size: u32, aspect: (f32, f32)) -> Bounds {
    let cell = i64::from(cell_size);
    let pad = cell / i64::from(PADDING_DIVISOR);
    let inner = cell - 2 * pad;
    let w = (inner as f32 * aspect.0).round() as i64;
    let h = (inner as f32 * aspect.1).round() as i64;

    let col = i64::from(index % columns.max(1));
    let row = i64::from(index / columns.max(1));
    let x = col * cell + pad + (inner - w) / 2;
    let y = row * cell + pad + (inner - h) / 2;
    Bounds::from_xywh(to_i32(x), to_i32(y), to_i32(w), to_i32(h))
}

#[inline]
fn to_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Renders all samples into a freshly allocated pixmap.
pub fn render(config: &StudioConfig) -> Result<PixmapBackend> {
    config.validate()?;

    let samples = samples();
    let count = samples.len() as u32;
    let rows = count.div_ceil(config.columns);

    let width = config
        .columns
        .checked_mul(config.cell_size)
        .context("sheet width overflows")?;
    let height = rows
        .checked_mul(config.cell_size)
        .context("sheet height overflows")?;
    let mut backend = PixmapBackend::new(width, height)
        .with_context(|| format!("allocating {width}x{height} sheet"))?;
    backend.clear(BACKGROUND);

    for (index, sample) in samples.iter().enumerate() {
        let bounds = cell_bounds(index as u32, config.columns, config.cell_size, sample.aspect);
        log::info!(
            "{:<24} {:?} opacity={:?}",
            sample.label,
            bounds,
            sample.drawable.opacity()
        );
        sample.drawable.draw(bounds, &mut backend);
    }

    Ok(backend)
}
