use serde::{Deserialize, Serialize};

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Splice configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpliceConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Source sheet image path
    pub input: String,
    /// Output directory for sprite files
    pub output_dir: String,
    /// Number of grid columns
    pub columns: u32,
    /// Number of grid rows
    pub rows: u32,
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: String::new(),
            output_dir: ".".to_string(),
            columns: 0,
            rows: 0,
            cell_width: 0,
            cell_height: 0,
            compress: None,
        }
    }
}
