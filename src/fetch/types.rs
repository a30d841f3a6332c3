//! Wire-format types for the battle-statistics API.
//!
//! Every endpoint wraps its payload in the same envelope; the payload shape
//! varies per endpoint. Unknown fields are ignored throughout — the API
//! carries more than the snapshots need.

use std::collections::HashMap;

use serde::Deserialize;

/// The common response envelope.
///
/// `status` is the application-level result code (200 = success),
/// independent of the HTTP status line. `timestamp` is when the wrapped
/// result was produced; index endpoints may omit it.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Application-level status code.
    pub status: u32,
    /// Epoch timestamp of the wrapped result (0 when absent).
    #[serde(default)]
    pub timestamp: i64,
    /// The endpoint-specific payload. Absent payloads stay `None` rather
    /// than failing the decode.
    pub data: Option<T>,
}

/// One entry of the worlds index.
#[derive(Debug, Deserialize)]
pub struct WorldEntry {
    /// World id; its leading decimal digit identifies the server.
    pub world_id: u32,
    /// Whether this world runs the local battle mode.
    #[serde(default)]
    pub localgvg: bool,
}

/// One entry of the world-groups index.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldGroup {
    /// Group id.
    pub group_id: u32,
    /// Member world ids; the first member determines the group's region.
    #[serde(default)]
    pub worlds: Vec<u32>,
    /// Whether this group runs the cross-region battle mode.
    #[serde(default)]
    pub globalgvg: bool,
}

/// One castle record of a battle result.
#[derive(Debug, Deserialize)]
pub struct CastleRecord {
    /// Castle id.
    #[serde(rename = "CastleId")]
    pub castle_id: u32,
    /// Occupying guild id; null or 0 means no guild holds the castle.
    #[serde(rename = "GuildId", default)]
    pub guild_id: Option<u64>,
}

/// Payload of a latest-battle-result endpoint.
#[derive(Debug, Deserialize)]
pub struct BattleResult {
    /// Castle ownership records. Absent when the target has no data yet;
    /// such responses are skipped, not retried.
    #[serde(default)]
    pub castles: Option<Vec<CastleRecord>>,
    /// Guild id (as a decimal string) to display name. Treated as empty
    /// when absent.
    #[serde(default)]
    pub guilds: HashMap<String, String>,
}
