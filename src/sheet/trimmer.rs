use image::{RgbaImage, imageops};

/// Minimal rectangle enclosing every pixel with nonzero alpha.
///
/// Half-open on `right` and `bottom`: a single visible pixel at
/// `(x, y)` yields `(x, y, x+1, y+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Scan for the bounding box of non-transparent pixels.
///
/// Returns `None` when no pixel has alpha > 0, including for
/// zero-sized buffers.
pub fn alpha_bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        return None;
    }

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;

    for y in 0..height {
        for x in 0..width {
            let pixel = image.get_pixel(x, y);
            if pixel[3] > 0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    // Fully transparent image (extrema never moved)
    if min_x > max_x || min_y > max_y {
        return None;
    }

    Some(BoundingBox {
        left: min_x,
        top: min_y,
        right: max_x + 1,
        bottom: max_y + 1,
    })
}

/// Crop an image to its non-transparent content.
///
/// Returns `None` for a fully transparent image.
pub fn trim_to_content(image: &RgbaImage) -> Option<RgbaImage> {
    let bbox = alpha_bounding_box(image)?;

    Some(
        imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image(),
    )
}
