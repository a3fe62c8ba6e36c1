use image::{RgbaImage, imageops};

/// One grid cell's rectangle in sheet pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Fixed grid geometry of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl GridSpec {
    pub fn new(columns: u32, rows: u32, cell_width: u32, cell_height: u32) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
        }
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Enumerate `(row, col, CellRect)` in row-major order.
    ///
    /// Pure function of the spec: finite, deterministic, restartable.
    /// No bounds check against the sheet happens here; `crop_cell`
    /// clamps cells that extend past the sheet extent.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, CellRect)> + use<> {
        let spec = *self;
        (0..spec.rows).flat_map(move |row| {
            (0..spec.columns).map(move |col| {
                let rect = CellRect::new(
                    col * spec.cell_width,
                    row * spec.cell_height,
                    spec.cell_width,
                    spec.cell_height,
                );
                (row, col, rect)
            })
        })
    }
}

/// Extract a cell's pixel sub-buffer, clamping to the sheet extent.
///
/// Cells partially past the sheet edge yield partially-sized buffers;
/// cells fully outside yield a 0x0 buffer, which trims to empty.
pub fn crop_cell(sheet: &RgbaImage, rect: CellRect) -> RgbaImage {
    let (sheet_w, sheet_h) = sheet.dimensions();
    let x = rect.x.min(sheet_w);
    let y = rect.y.min(sheet_h);
    let width = rect.width.min(sheet_w - x);
    let height = rect.height.min(sheet_h - y);

    imageops::crop_imm(sheet, x, y, width, height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_cells_row_major_order() {
        let spec = GridSpec::new(3, 2, 16, 8);
        let cells: Vec<_> = spec.cells().collect();

        assert_eq!(cells.len(), 6);
        assert_eq!(spec.cell_count(), 6);

        let (row, col, rect) = cells[0];
        assert_eq!((row, col), (0, 0));
        assert_eq!(rect, CellRect::new(0, 0, 16, 8));

        // Second element advances along the row, not down the column
        let (row, col, rect) = cells[1];
        assert_eq!((row, col), (0, 1));
        assert_eq!(rect, CellRect::new(16, 0, 16, 8));

        let (row, col, rect) = cells[5];
        assert_eq!((row, col), (1, 2));
        assert_eq!(rect, CellRect::new(32, 8, 16, 8));
    }

    #[test]
    fn test_cells_restartable() {
        let spec = GridSpec::new(4, 3, 256, 256);
        let first: Vec<_> = spec.cells().collect();
        let second: Vec<_> = spec.cells().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_crop_cell_within_bounds() {
        let mut sheet = RgbaImage::new(32, 32);
        sheet.put_pixel(17, 5, Rgba([255, 0, 0, 255]));

        let cell = crop_cell(&sheet, CellRect::new(16, 0, 16, 16));
        assert_eq!(cell.dimensions(), (16, 16));
        assert_eq!(cell.get_pixel(1, 5), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_crop_cell_clamps_past_edge() {
        let sheet = RgbaImage::new(20, 20);

        // Cell extends 12px past the right and bottom edges
        let cell = crop_cell(&sheet, CellRect::new(16, 16, 16, 16));
        assert_eq!(cell.dimensions(), (4, 4));
    }

    #[test]
    fn test_crop_cell_fully_outside_is_empty() {
        let sheet = RgbaImage::new(20, 20);

        let cell = crop_cell(&sheet, CellRect::new(40, 40, 16, 16));
        assert_eq!(cell.dimensions(), (0, 0));
    }
}
