//! castle_status library: guild-battle snapshot collection.
//!
//! Polls a public game-statistics API and reshapes per-target battle
//! results into two per-region snapshot artifacts: one for the local
//! battle mode (one entry per world) and one for the cross-region mode
//! (one entry per group x class x block cell). The heart of it is a
//! bounded-concurrency fetch queue with linear-backoff retries, applied
//! once per mode over a dynamically discovered target list.
//!
//! # Example
//!
//! ```no_run
//! use castle_status::{run_poll, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     server: "1".to_string(),
//!     concurrency: 3,
//!     ..Default::default()
//! };
//!
//! let report = run_poll(config).await?;
//! println!(
//!     "{} world and {} block snapshots",
//!     report.local_items, report.global_items
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

mod collect;
pub mod config;
pub mod error_handling;
mod export;
mod fetch;
pub mod initialization;
pub mod models;
mod queue;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_poll, PollReport};

// Internal run module (contains the poll orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use strum::IntoEnumIterator;

    use crate::collect::{collect_global, collect_local};
    use crate::config::Config;
    use crate::error_handling::{FetchErrorKind, FetchStats};
    use crate::export::write_artifact;
    use crate::initialization::init_client;

    /// Summary of one completed poll run.
    #[derive(Debug, Clone)]
    pub struct PollReport {
        /// World snapshots in the local artifact
        pub local_items: usize,
        /// Block snapshots in the cross-region artifact
        pub global_items: usize,
        /// Path of the written local artifact
        pub local_path: PathBuf,
        /// Path of the written cross-region artifact
        pub global_path: PathBuf,
        /// Elapsed wall-clock seconds
        pub elapsed_seconds: f64,
    }

    /// Runs both collector passes and writes their artifacts.
    ///
    /// The local pass runs first and its artifact is written before the
    /// cross-region pass starts, with a pause in between to go easy on the
    /// API. An index failure aborts the run before that pass's artifact is
    /// rewritten; targets that stay unreachable after retries merely
    /// shrink the output.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, an index
    /// endpoint stays unavailable, or an artifact cannot be written.
    pub async fn run_poll(config: Config) -> Result<PollReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let stats = FetchStats::new();
        let start = Instant::now();

        info!("=== local battle (server {}) ===", config.server);
        let local = collect_local(&client, &stats, &config)
            .await
            .context("Local battle collection failed")?;
        let local_path = config.out_dir.join("local.json");
        write_artifact(&local_path, &local)?;

        tokio::time::sleep(config.inter_mode_pause()).await;

        info!("=== cross-region battle (server {}) ===", config.server);
        let global = collect_global(&client, &stats, &config)
            .await
            .context("Cross-region battle collection failed")?;
        let global_path = config.out_dir.join("global.json");
        write_artifact(&global_path, &global)?;

        print_fetch_statistics(&stats);

        Ok(PollReport {
            local_items: local.items.len(),
            global_items: global.items.len(),
            local_path,
            global_path,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Logs the non-zero fetch failure counters.
    fn print_fetch_statistics(stats: &FetchStats) {
        let total = stats.total();
        if total == 0 {
            return;
        }
        info!("Fetch failure counts ({} total):", total);
        for kind in FetchErrorKind::iter() {
            let count = stats.count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}
