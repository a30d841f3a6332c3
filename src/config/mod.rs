//! Configuration: CLI options, defaults, and tuning constants.

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
