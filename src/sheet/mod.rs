mod grid;
mod loader;
mod trimmer;

pub use grid::{CellRect, GridSpec, crop_cell};
pub use loader::load_sheet;
pub use trimmer::{BoundingBox, alpha_bounding_box, trim_to_content};
