use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Run configuration for the studio binary.
///
/// Positional arguments: `[OUTPUT.png] [CELL_SIZE] [COLUMNS]`.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub output: PathBuf,
    /// Side of one square grid cell in pixels, padding included.
    pub cell_size: u32,
    pub columns: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("swatches.png"),
            cell_size: 96,
            columns: 4,
        }
    }
}

impl StudioConfig {
    pub const MIN_CELL_SIZE: u32 = 8;
    pub const MAX_CELL_SIZE: u32 = 4096;
    pub const MAX_COLUMNS: u32 = 64;

    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(output) = args.next() {
            config.output = PathBuf::from(output);
        }
        if let Some(cell) = args.next() {
            config.cell_size = cell
                .parse()
                .with_context(|| format!("invalid cell size {cell:?}"))?;
        }
        if let Some(cols) = args.next() {
            config.columns = cols
                .parse()
                .with_context(|| format!("invalid column count {cols:?}"))?;
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument {extra:?}");
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the grid dimensions are in range.
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_CELL_SIZE..=Self::MAX_CELL_SIZE).contains(&self.cell_size) {
            bail!(
                "cell size must be within {}..={}, got {}",
                Self::MIN_CELL_SIZE,
                Self::MAX_CELL_SIZE,
                self.cell_size
            );
        }
        if !(1..=Self::MAX_COLUMNS).contains(&self.columns) {
            bail!("column count must be within 1..={}, got {}", Self::MAX_COLUMNS, self.columns);
        }
        Ok(())
    }
}
