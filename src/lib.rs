pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod sheet;

pub use cli::{CliArgs, CompressionLevel};
pub use error::SpliceError;
pub use extract::{ExtractSummary, Extractor};
pub use sheet::{BoundingBox, CellRect, GridSpec};
