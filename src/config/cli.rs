//! CLI argument parsing using clap

use super::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// fakeuser - Reproducible fake personal record generator
#[derive(Parser, Debug)]
#[command(name = "fakeuser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (CLI flags take precedence)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    // === Generation Options ===
    /// Region: Poland, USA, Georgia or Bangladesh (others use default rules)
    #[arg(short = 'r', long, env = "FAKEUSER_REGION")]
    pub region: Option<String>,

    /// Corruption passes per record are drawn from [0, error_rate)
    #[arg(short = 'e', long, env = "FAKEUSER_ERROR_RATE", allow_negative_numbers = true)]
    pub error_rate: Option<i64>,

    /// Base seed (unsigned integer); omitted means a random seed per run
    #[arg(short = 's', long, env = "FAKEUSER_SEED", conflicts_with = "random_seed")]
    pub seed: Option<String>,

    /// Draw a random base seed and print it so the run can be reproduced
    #[arg(long)]
    pub random_seed: bool,

    /// Largest accepted error rate
    #[arg(long)]
    pub max_error_rate: Option<u32>,

    // === Output Options ===
    /// Number of pages to generate
    #[arg(short = 'p', long)]
    pub pages: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Directory for CSV exports
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    // === Runtime Options ===
    /// Validate and print the configuration without generating
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.pages == Some(0) {
            anyhow::bail!("pages must be at least 1");
        }

        if let Some(dir) = &self.output_dir {
            if self.format.is_some_and(|f| f != OutputFormat::Csv) {
                tracing::warn!(dir = %dir.display(), "--output-dir only applies to csv output");
            }
        }

        Ok(())
    }
}
