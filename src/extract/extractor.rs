use std::path::Path;

use anyhow::Result;
use image::RgbaImage;
use log::{debug, info};
use rayon::prelude::*;

use crate::cli::CompressionLevel;
use crate::output::SpriteWriter;
use crate::sheet::{GridSpec, crop_cell, trim_to_content};

/// Result of an extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Sprites written
    pub emitted: u32,
    /// Cells with no visible pixel
    pub skipped: u32,
}

/// Run context for slicing one sheet
pub struct Extractor {
    grid: GridSpec,
    compress: Option<CompressionLevel>,
}

impl Extractor {
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            compress: None,
        }
    }

    pub fn compress(mut self, compress: Option<CompressionLevel>) -> Self {
        self.compress = compress;
        self
    }

    /// Slice the sheet, writing one file per non-empty cell.
    ///
    /// Trims are computed in parallel, but sprites are emitted
    /// sequentially in row-major cell order, so index assignment is
    /// deterministic regardless of scheduling. The first write failure
    /// aborts the run.
    pub fn extract(&self, sheet: &RgbaImage, out_dir: &Path) -> Result<ExtractSummary> {
        let mut writer = SpriteWriter::create(out_dir, self.compress)?;

        let cells: Vec<_> = self.grid.cells().collect();
        let trimmed: Vec<_> = cells
            .par_iter()
            .map(|&(row, col, rect)| (row, col, trim_to_content(&crop_cell(sheet, rect))))
            .collect();

        let mut skipped = 0u32;
        for (row, col, sprite) in trimmed {
            match sprite {
                Some(sprite) => {
                    let path = writer.write(&sprite)?;
                    debug!("Cell ({row}, {col}) -> {}", path.display());
                }
                None => {
                    debug!("Cell ({row}, {col}) is empty, skipping");
                    skipped += 1;
                }
            }
        }

        info!(
            "Extracted {} sprites ({} empty cells skipped)",
            writer.count(),
            skipped
        );

        Ok(ExtractSummary {
            emitted: writer.count(),
            skipped,
        })
    }
}
