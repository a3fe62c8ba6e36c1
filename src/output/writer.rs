use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{ImageFormat, RgbaImage};
use log::debug;

use crate::cli::CompressionLevel;
use crate::error::SpliceError;

/// Writes trimmed sprites as sequentially numbered PNG files.
///
/// Holds the output counter, the only mutable state of a run. The
/// counter advances only on successful writes, so emitted indices
/// always form the contiguous range `[0, count)` no matter how many
/// cells were skipped.
pub struct SpriteWriter {
    out_dir: PathBuf,
    counter: u32,
    compress: Option<CompressionLevel>,
}

impl SpriteWriter {
    /// Create the output directory and a writer for it.
    ///
    /// Directory creation is idempotent: an existing (even non-empty)
    /// directory is not an error.
    pub fn create(out_dir: &Path, compress: Option<CompressionLevel>) -> Result<Self> {
        fs::create_dir_all(out_dir).map_err(|e| SpliceError::DirectoryCreate {
            path: out_dir.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            out_dir: out_dir.to_path_buf(),
            counter: 0,
            compress,
        })
    }

    /// Number of sprites written so far.
    pub fn count(&self) -> u32 {
        self.counter
    }

    fn next_path(&self) -> PathBuf {
        // Index zero-padded to at least two digits
        self.out_dir.join(format!("sprite_{:02}.png", self.counter))
    }

    /// Persist a sprite as PNG, then advance the counter.
    pub fn write(&mut self, sprite: &RgbaImage) -> Result<PathBuf> {
        let index = self.counter;
        let path = self.next_path();

        // Encode to PNG in memory
        let mut png_data = Cursor::new(Vec::new());
        sprite
            .write_to(&mut png_data, ImageFormat::Png)
            .map_err(|e| SpliceError::SpriteEncode {
                path: path.clone(),
                index,
                source: e,
            })?;

        let output_data = if let Some(level) = self.compress {
            // Compress with oxipng
            let opts = match level {
                CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
                CompressionLevel::Max => oxipng::Options::max_compression(),
            };
            oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
                SpliceError::PngCompress {
                    path: path.clone(),
                    index,
                    message: e.to_string(),
                }
            })?
        } else {
            png_data.into_inner()
        };

        fs::write(&path, output_data).map_err(|e| SpliceError::SpriteWrite {
            path: path.clone(),
            index,
            source: e,
        })?;

        debug!(
            "Wrote sprite {} ({}x{})",
            path.display(),
            sprite.width(),
            sprite.height()
        );

        self.counter += 1;
        Ok(path)
    }
}
