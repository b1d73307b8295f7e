//! fakeuser CLI entry point

use anyhow::{Context, Result};
use fakeuser::config::{cli::Cli, toml::load_config, validator, Config, GenerationConfig, OutputFormat};
use fakeuser::engine::{Advance, PaginationEngine};
use fakeuser::output;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    cli.validate()?;

    // Build configuration: file, then CLI overrides
    let config = load_config(&cli)?;
    let generation = validator::validate_config(&config)
        .context("Configuration validation failed")?;

    if cli.dry_run {
        print_configuration(&config, &generation);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let report_seed = cli.random_seed || config.generation.seed.is_none();
    run(&config, generation, report_seed)
}

/// Install the stderr log subscriber; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Generate the requested pages and render the snapshot
fn run(config: &Config, generation: GenerationConfig, report_seed: bool) -> Result<()> {
    let mut engine = PaginationEngine::new();
    engine.configure(generation).context("Failed to generate first page")?;

    while engine.current_page() < config.output.pages {
        match engine.advance_page().context("Failed to generate page")? {
            Advance::Appended { .. } => {}
            Advance::Ignored => {
                engine.resume().context("Failed to resume pending page")?;
            }
        }
    }

    let snapshot = engine
        .snapshot()
        .context("Engine has no configuration")?;

    match config.output.format {
        OutputFormat::Table => output::text::print_snapshot(&snapshot),
        OutputFormat::Json => output::json::write_snapshot(std::io::stdout().lock(), &snapshot)?,
        OutputFormat::Csv => {
            let path = output::csv::export_snapshot(&snapshot, &config.output.dir)?;
            println!("Wrote {} record(s) to {}", snapshot.records.len(), path.display());
        }
    }

    // Random sessions report their resolved seed
    if report_seed {
        eprintln!("Seed: {}", snapshot.base_seed);
    }

    Ok(())
}

/// Display the effective configuration
fn print_configuration(config: &Config, generation: &GenerationConfig) {
    println!("fakeuser v{}", env!("CARGO_PKG_VERSION"));
    println!();
    print!("{}", config);
    println!("  Effective: {}", generation);
}
