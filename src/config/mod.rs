//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! Raw settings ([`Config`]) keep user input as entered: the error rate is a
//! signed integer and the seed may be text, so that out-of-range values can be
//! reported by [`validator`] instead of failing deserialization. Validation
//! turns them into a [`GenerationConfig`], the only input the engine accepts.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::region::RegionSelector;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Upper bound of the error-rate slider
pub const SLIDER_MAX_ERROR_RATE: u32 = 10;

/// Upper bound of the numeric error-rate field, the default limit
pub const FIELD_MAX_ERROR_RATE: u32 = 1000;

/// Inputs that fully determine the generated records
///
/// The page counter is owned by the pagination engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub region: RegionSelector,
    /// Upper bound (exclusive) on corruption passes per record
    pub error_rate: u32,
    /// Base seed; a random one is drawn per configuration when absent
    pub seed: Option<u64>,
}

impl GenerationConfig {
    pub fn new(region: impl Into<RegionSelector>, error_rate: u32, seed: Option<u64>) -> Self {
        Self {
            region: region.into(),
            error_rate,
            seed,
        }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Generation settings as entered by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default)]
    pub region: RegionSelector,
    #[serde(default)]
    pub error_rate: i64,
    /// Seed, either as an integer or as text
    #[serde(default)]
    pub seed: Option<SeedInput>,
}

/// Seed value from a config file or text input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedInput {
    Number(u64),
    Text(String),
}

/// Validation limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Largest accepted error rate
    #[serde(default = "default_max_error_rate")]
    pub max_error_rate: u32,
}

fn default_max_error_rate() -> u32 {
    FIELD_MAX_ERROR_RATE
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_error_rate: default_max_error_rate(),
        }
    }
}

/// Rendering format for the generated records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Text table on stdout
    Table,
    /// CSV file named `data-page-<page>.csv` in the output directory
    Csv,
    /// JSON snapshot on stdout
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Directory for CSV exports
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Pages to generate before rendering
    #[serde(default = "default_pages")]
    pub pages: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_pages() -> u64 {
    1
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dir: default_output_dir(),
            pages: default_pages(),
        }
    }
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Generation: {}", self.generation)?;
        writeln!(f, "  Limits: max_error_rate={}", self.limits.max_error_rate)?;
        writeln!(f, "  Output: {}", self.output)?;
        Ok(())
    }
}

impl fmt::Display for GenerationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region={}, error_rate={}", self.region, self.error_rate)?;
        match &self.seed {
            Some(seed) => write!(f, ", seed={}", seed),
            None => write!(f, ", seed=random"),
        }
    }
}

impl fmt::Display for SeedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region={}, error_rate={}", self.region, self.error_rate)?;
        match self.seed {
            Some(seed) => write!(f, ", seed={}", seed),
            None => write!(f, ", seed=random"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={}, pages={}", self.format, self.pages)?;
        if self.format == OutputFormat::Csv {
            write!(f, ", dir={}", self.dir.display())?;
        }
        Ok(())
    }
}
