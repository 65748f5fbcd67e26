//! pairsum - CLI tool summing (a, b) records with a pool of workers

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use pairsum::{load_records, PipelineConfig};
use std::process;
use std::time::Instant;
use tracing::info;

use cli::Cli;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    }
    .with_workers(cli.workers);

    if !cli.directory.exists() {
        anyhow::bail!("Input directory not found: {}", cli.directory.display());
    }

    let loaded = load_records(&cli.directory)
        .with_context(|| format!("Failed to load records from {}", cli.directory.display()))?;

    // Timing covers the parallel sum only
    let start = Instant::now();
    let report = pairsum::run(&loaded.records, &config).context("Failed to calculate sum")?;
    let elapsed = start.elapsed();

    info!(
        "Summed {} records with {} of {} requested workers",
        loaded.records.len(),
        report.workers_used(),
        config.workers
    );

    println!("Total sum: {}", report.total);
    if !cli.quiet {
        println!("Time taken: {:?}", elapsed);
    }

    Ok(())
}
