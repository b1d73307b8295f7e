//! TOML configuration file parsing
//!
//! ```toml
//! [generation]
//! region = "Poland"
//! error_rate = 3
//! seed = 42
//!
//! [limits]
//! max_error_rate = 10
//!
//! [output]
//! format = "csv"
//! dir = "exports"
//! pages = 5
//! ```

use super::*;
use crate::config::cli::Cli;
use crate::generator::seed::SeedDeriver;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override generation settings
    if let Some(ref region) = cli.region {
        config.generation.region = RegionSelector::from(region.as_str());
    }
    if let Some(error_rate) = cli.error_rate {
        config.generation.error_rate = error_rate;
    }
    if let Some(ref seed) = cli.seed {
        config.generation.seed = validator::parse_seed_text(seed)
            .context("Invalid --seed")?
            .map(SeedInput::Number);
    }
    if cli.random_seed {
        config.generation.seed = Some(SeedInput::Number(SeedDeriver::random_base()));
    }

    // Override limits
    if let Some(max) = cli.max_error_rate {
        config.limits.max_error_rate = max;
    }

    // Override output settings
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(ref dir) = cli.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(pages) = cli.pages {
        config.output.pages = pages;
    }

    Ok(config)
}

/// Load the configuration file named on the command line, if any, and apply CLI overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    merge_cli_with_config(cli, base)
}
