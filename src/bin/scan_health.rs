// src/bin/scan_health.rs
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use scan_health_core::cli::{self, Cli};
use scan_health_core::exit::ScanHealthExit;

fn main() -> ScanHealthExit {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    match cli::run(&cli) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ScanHealthExit::Error
        }
    }
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
