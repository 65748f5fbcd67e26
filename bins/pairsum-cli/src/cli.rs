//! Command-line argument parsing for pairsum

use clap::Parser;
use pairsum::WorkerCount;
use std::path::PathBuf;

/// pairsum - Sum (a, b) records from a JSON file in parallel
#[derive(Parser, Debug)]
#[command(name = "pairsum")]
#[command(author, version, about = "pairsum - Sum (a, b) records from a JSON file in parallel", long_about = None)]
pub struct Cli {
    /// Directory searched (depth-first) for the first .json file
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Number of concurrent workers (1-10000)
    #[arg(value_name = "WORKERS")]
    pub workers: WorkerCount,

    /// JSON pipeline configuration; WORKERS overrides its worker count
    #[arg(short, long, value_name = "FILE", env = "PAIRSUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print the total
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
