//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `castle_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use castle_status::initialization::init_logger_with;
use castle_status::{run_poll, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_poll(config).await {
        Ok(report) => {
            println!(
                "✅ Collected {} world snapshot{} and {} block snapshot{} in {:.1}s",
                report.local_items,
                if report.local_items == 1 { "" } else { "s" },
                report.global_items,
                if report.global_items == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!(
                "Artifacts written to {} and {}",
                report.local_path.display(),
                report.global_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("castle_status error: {:#}", e);
            process::exit(1);
        }
    }
}
