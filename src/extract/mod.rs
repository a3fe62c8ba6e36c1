mod extractor;

pub use extractor::{ExtractSummary, Extractor};
