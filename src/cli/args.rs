use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "splice")]
#[command(version, about = "Grid sprite sheet splicer", long_about = None)]
pub struct CliArgs {
    /// Source sheet image
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Load settings from a .splice config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for sprite files [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of grid columns
    #[arg(long, required_unless_present = "config")]
    pub columns: Option<NonZeroU32>,

    /// Number of grid rows
    #[arg(long, required_unless_present = "config")]
    pub rows: Option<NonZeroU32>,

    /// Cell width in pixels
    #[arg(long, value_name = "PIXELS", required_unless_present = "config")]
    pub cell_width: Option<NonZeroU32>,

    /// Cell height in pixels
    #[arg(long, value_name = "PIXELS", required_unless_present = "config")]
    pub cell_height: Option<NonZeroU32>,

    /// Compress sprite PNGs (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
