use std::path::Path;

use anyhow::Result;
use image::{ImageReader, RgbaImage};
use log::debug;

use crate::error::SpliceError;

/// Load the source sheet and normalize it to RGBA.
///
/// Sources without an alpha channel get a fully opaque one synthesized
/// by the RGBA conversion.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    let sheet = ImageReader::open(path)
        .map_err(|e| SpliceError::SheetLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SpliceError::SheetLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    debug!(
        "Loaded sheet {} ({}x{})",
        path.display(),
        sheet.width(),
        sheet.height()
    );

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_load_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_sheet(&dir.path().join("missing.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_undecodable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_sheet(&path).is_err());
    }

    #[test]
    fn test_load_rgb_synthesizes_opaque_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        let mut img = RgbImage::new(3, 2);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([10, 20, 30]);
        }
        img.save(&path).unwrap();

        let sheet = load_sheet(&path).unwrap();
        assert_eq!(sheet.dimensions(), (3, 2));
        assert!(sheet.pixels().all(|p| p[3] == 255));
    }
}
