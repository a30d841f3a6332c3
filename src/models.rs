//! Snapshot artifact types.
//!
//! The serialized field names are part of the artifact contract consumed
//! downstream, hence the camelCase and abbreviated renames — changing them
//! breaks the readers of `local.json` / `global.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The occupant of one castle, as rendered downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleOwner {
    /// Raw owning guild id as reported by the API (`null` or `0` = no
    /// guild).
    #[serde(rename = "guildId")]
    pub guild_id: Option<u64>,
    /// Resolved display name: the guilds-map entry, `"ID:<n>"` when the map
    /// lacks the id, `"NPC"` for unowned castles.
    #[serde(rename = "guildName")]
    pub guild_name: String,
}

/// Castle ownership of one world's local battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Raw world id; the local-mode sort key.
    pub wid: u32,
    /// World number with the leading server digit stripped.
    pub label: String,
    /// Castle id to occupant.
    pub castles: BTreeMap<u32, CastleOwner>,
    /// Envelope timestamp of the fetched result.
    pub timestamp: i64,
}

/// Castle ownership of one (group, class, block) cell of a cross-region
/// battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    /// Display label: `"<region> G<group> <class> <block>"`.
    pub label: String,
    /// Group id.
    pub gid: u32,
    /// Skill class (1-3).
    pub cls: u8,
    /// Sub-block (0-3).
    pub blk: u8,
    /// Region display name, derived from the group's first member world.
    pub sn: String,
    /// Member world labels joined with `", "`.
    pub wds: String,
    /// Castle id to occupant.
    pub castles: BTreeMap<u32, CastleOwner>,
    /// Envelope timestamp of the fetched result.
    pub timestamp: i64,
}

/// One mode's final artifact: snapshots in the mode's total order plus the
/// newest timestamp among them. Built once per run, never mutated, fully
/// replaces the previous run's artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSnapshot<T> {
    /// Ordered snapshots.
    pub items: Vec<T>,
    /// Max of the item timestamps, floored at zero.
    pub timestamp: i64,
}

/// Newest timestamp across items, never below zero (zero when empty).
pub fn aggregate_timestamp<I: IntoIterator<Item = i64>>(timestamps: I) -> i64 {
    timestamps.into_iter().fold(0, i64::max)
}
