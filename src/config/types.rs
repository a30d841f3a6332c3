//! Configuration types and CLI options.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_API_BASE, DEFAULT_CONCURRENCY, DEFAULT_INTER_MODE_PAUSE_MS, DEFAULT_OUT_DIR,
    DEFAULT_SERVER, DEFAULT_USER_AGENT, DEFAULT_WORKER_DELAY_MS, HTTP_TIMEOUT_SECS,
    RETRY_MAX_ATTEMPTS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and configuration.
///
/// Everything the poll run depends on is injected through this struct; the
/// defaults match the values the scheduled job runs with, so a bare
/// `castle_status` invocation does the real thing.
///
/// # Examples
///
/// ```bash
/// # Basic usage (JP server, artifacts under ./data)
/// castle_status
///
/// # Korean server, gentler request rate
/// castle_status --server 2 --concurrency 2 --worker-delay-ms 250
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "castle_status",
    about = "Polls guild-battle results and writes per-region castle snapshots."
)]
pub struct Config {
    /// Base URL of the battle-statistics API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Server selector: leading digit(s) of world ids ("1" = JP)
    #[arg(long, default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Number of concurrent fetch workers
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-worker delay between tasks, in milliseconds
    #[arg(long, default_value_t = DEFAULT_WORKER_DELAY_MS)]
    pub worker_delay_ms: u64,

    /// Fetch attempts per URL before giving up on a target
    #[arg(long, default_value_t = RETRY_MAX_ATTEMPTS)]
    pub max_retries: usize,

    /// Pause between the local and cross-region passes, in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTER_MODE_PAUSE_MS)]
    pub inter_mode_pause_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output directory for the snapshot artifacts
    #[arg(long, value_parser, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Per-worker delay between queue tasks.
    pub fn worker_delay(&self) -> Duration {
        Duration::from_millis(self.worker_delay_ms)
    }

    /// Pause between the two collector passes.
    pub fn inter_mode_pause(&self) -> Duration {
        Duration::from_millis(self.inter_mode_pause_ms)
    }

    /// Per-request HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            server: DEFAULT_SERVER.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            worker_delay_ms: DEFAULT_WORKER_DELAY_MS,
            max_retries: RETRY_MAX_ATTEMPTS,
            inter_mode_pause_ms: DEFAULT_INTER_MODE_PAUSE_MS,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
