use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use splice::cli::{CliArgs, CompressionLevel};
use splice::config::{CompressConfig, LoadedConfig};
use splice::extract::Extractor;
use splice::sheet::{GridSpec, load_sheet};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(&cli)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Splice sheet splicer v{}", env!("CARGO_PKG_VERSION"));

    let sheet = load_sheet(&merged.input)?;

    let summary = Extractor::new(merged.grid)
        .compress(merged.compress)
        .extract(&sheet, &merged.output)?;

    info!(
        "Wrote {} tight sprites into {}",
        summary.emitted,
        merged.output.display()
    );

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: PathBuf,
    output: PathBuf,
    grid: GridSpec,
    compress: Option<CompressionLevel>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    // Load config if specified
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Determine input sheet: CLI arg overrides config
    let input = if let Some(input) = &args.input {
        input.clone()
    } else if let Some(input) = loaded_config.as_ref().and_then(LoadedConfig::resolve_input) {
        input
    } else {
        // This shouldn't happen due to clap's required_unless_present
        anyhow::bail!("no input sheet given on the command line or in the config file");
    };

    // Determine output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_output_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    // Grid geometry: CLI > config; every dimension must be positive
    let columns = match args.columns {
        Some(n) => n.get(),
        None => require_positive(
            loaded_config.as_ref().map(|lc| lc.config.columns),
            "columns",
        )?,
    };
    let rows = match args.rows {
        Some(n) => n.get(),
        None => require_positive(loaded_config.as_ref().map(|lc| lc.config.rows), "rows")?,
    };
    let cell_width = match args.cell_width {
        Some(n) => n.get(),
        None => require_positive(
            loaded_config.as_ref().map(|lc| lc.config.cell_width),
            "cell_width",
        )?,
    };
    let cell_height = match args.cell_height {
        Some(n) => n.get(),
        None => require_positive(
            loaded_config.as_ref().map(|lc| lc.config.cell_height),
            "cell_height",
        )?,
    };

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.config.compress.as_ref().map(|c| match c {
            CompressConfig::Level(n) => CompressionLevel::Level(*n),
            CompressConfig::Max(_) => CompressionLevel::Max,
        })
    } else {
        None
    };

    Ok(MergedConfig {
        input,
        output,
        grid: GridSpec::new(columns, rows, cell_width, cell_height),
        compress,
        verbose: args.verbose,
    })
}

fn require_positive(value: Option<u32>, name: &str) -> Result<u32> {
    match value {
        Some(n) if n > 0 => Ok(n),
        Some(_) => anyhow::bail!("{} must be a positive integer in the config file", name),
        None => anyhow::bail!(
            "{} missing: set it on the command line or in the config file",
            name
        ),
    }
}
