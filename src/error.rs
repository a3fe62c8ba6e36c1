use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("Failed to load sheet '{path}': {source}")]
    SheetLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode sprite {index} ('{path}'): {source}")]
    SpriteEncode {
        path: PathBuf,
        index: u32,
        source: image::ImageError,
    },

    #[error("Failed to compress sprite {index} ('{path}'): {message}")]
    PngCompress {
        path: PathBuf,
        index: u32,
        message: String,
    },

    #[error("Failed to write sprite {index} to '{path}': {source}")]
    SpriteWrite {
        path: PathBuf,
        index: u32,
        source: std::io::Error,
    },
}
