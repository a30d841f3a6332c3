//! Typed errors and failure statistics.

pub mod stats;
pub mod types;

pub use stats::FetchStats;
pub use types::{AttemptError, CollectError, FetchError, FetchErrorKind, InitializationError};
