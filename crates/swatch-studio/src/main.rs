mod config;
mod sheet;

use std::path::Path;

use anyhow::{Context, Result};
use swatch_engine::backend::PixmapBackend;
use swatch_engine::logging::{LoggingConfig, init_logging};

use crate::config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_args(std::env::args().skip(1))?;
    log::debug!("{config:?}");

    let backend = sheet::render(&config)?;
    save_png(&backend, &config.output)?;

    log::info!(
        "wrote {}x{} sheet to {}",
        backend.width(),
        backend.height(),
        config.output.display()
    );
    Ok(())
}

fn save_png(backend: &PixmapBackend, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(backend.width(), backend.height(), backend.to_rgba8())
        .context("pixmap buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}
