//! Configuration validation

use super::*;
use crate::error::GenError;
use crate::region::RegionCatalog;
use anyhow::{Context, Result};

/// Validate complete configuration and build the engine's generation input
pub fn validate_config(config: &Config) -> Result<GenerationConfig> {
    let generation = validate_generation(&config.generation, &config.limits)
        .context("Invalid generation settings")?;
    validate_output(&config.output)?;
    Ok(generation)
}

/// Validate generation settings against the limits
pub fn validate_generation(settings: &GenerationSettings, limits: &Limits) -> Result<GenerationConfig, GenError> {
    // Unknown regions are recovered by the synthesizer's fallback
    if let Err(err) = RegionCatalog::template_for(&settings.region) {
        tracing::warn!(%err, "region not in catalog, default synthesis rules apply");
    }

    let error_rate = validate_error_rate(settings.error_rate, limits.max_error_rate)?;
    let seed = settings.seed.as_ref().map(parse_seed).transpose()?;

    Ok(GenerationConfig {
        region: settings.region.clone(),
        error_rate,
        seed,
    })
}

/// Accept error rates in `[0, max]`
pub fn validate_error_rate(value: i64, max: u32) -> Result<u32, GenError> {
    if value < 0 || value > i64::from(max) {
        return Err(GenError::InvalidErrorRate { value, max });
    }

    if value > i64::from(SLIDER_MAX_ERROR_RATE) {
        tracing::debug!(value, "error rate above slider range");
    }

    Ok(value as u32)
}

/// Parse a seed input; blank text means "no seed"
pub fn parse_seed(input: &SeedInput) -> Result<u64, GenError> {
    match input {
        SeedInput::Number(n) => Ok(*n),
        SeedInput::Text(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| GenError::InvalidSeed(text.clone())),
    }
}

/// Seed text from a text field, where an empty field means random
pub fn parse_seed_text(text: &str) -> Result<Option<u64>, GenError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_seed(&SeedInput::Text(text.to_string())).map(Some)
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.pages == 0 {
        anyhow::bail!("output.pages must be at least 1");
    }

    if output.format == OutputFormat::Csv && output.dir.as_os_str().is_empty() {
        anyhow::bail!("output.dir must not be empty for csv output");
    }

    Ok(())
}
