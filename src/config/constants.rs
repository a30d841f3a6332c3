//! Tuning constants, used as CLI defaults.

/// Default base URL of the battle-statistics API.
pub const DEFAULT_API_BASE: &str = "https://api.mentemori.icu";

/// Default server selector: the leading digit(s) of world ids ("1" = JP).
pub const DEFAULT_SERVER: &str = "1";

/// Default number of concurrent queue workers.
///
/// Deliberately small: the upstream API is a community service and the
/// per-worker delay below already throttles the aggregate request rate to
/// roughly `concurrency / delay` requests per second.
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Delay each worker sleeps after finishing a task, in milliseconds.
pub const DEFAULT_WORKER_DELAY_MS: u64 = 100;

/// Fetch attempts per URL before a target is given up on.
pub const RETRY_MAX_ATTEMPTS: usize = 3;

/// Base retry delay in milliseconds; attempt N waits N times this
/// (linear backoff: 1s, 2s, 3s, ...).
pub const RETRY_BASE_DELAY_MS: u64 = 1000;

/// Pause between the local and cross-region collector passes, in
/// milliseconds. Spaces the two bursts of requests apart.
pub const DEFAULT_INTER_MODE_PAUSE_MS: u64 = 2000;

/// Per-request HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Every Nth completed queue task emits a progress log line.
pub const PROGRESS_LOG_INTERVAL: usize = 20;

/// Default output directory for snapshot artifacts.
pub const DEFAULT_OUT_DIR: &str = "data";

/// User-Agent header sent with every API request.
pub const DEFAULT_USER_AGENT: &str = concat!("castle_status/", env!("CARGO_PKG_VERSION"));

/// Skill classes a cross-region battle is partitioned into.
pub const BATTLE_CLASSES: [u8; 3] = [1, 2, 3];

/// Sub-blocks within each skill class.
pub const BATTLE_BLOCKS: [u8; 4] = [0, 1, 2, 3];
