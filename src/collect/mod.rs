//! Region data collectors.
//!
//! Two instantiations share the fetcher and the worker queue: the local
//! mode walks the eligible worlds of one server, the cross-region mode
//! walks eligible world groups expanded by skill class and sub-block. They
//! differ only in target discovery, URL template, labeling, and sort order.

pub mod labels;

mod global;
mod local;

pub use global::collect_global;
pub use local::collect_local;

use std::collections::{BTreeMap, HashMap};

use crate::fetch::CastleRecord;
use crate::models::CastleOwner;

use labels::guild_home_group;

/// Sentinel display name for castles no guild holds.
pub const NPC_LABEL: &str = "NPC";

/// Builds the castle-to-occupant map for one battle result.
///
/// Owned castles resolve their display name through the guilds map, falling
/// back to `"ID:<n>"` for ids the map lacks. A null or zero guild id marks
/// an unowned castle. Cross-region results additionally tag each owner with
/// its home group.
fn castle_owners(
    records: Vec<CastleRecord>,
    guilds: &HashMap<String, String>,
    tag_home_group: bool,
) -> BTreeMap<u32, CastleOwner> {
    let mut castles = BTreeMap::new();
    for record in records {
        let owner = match record.guild_id.filter(|&id| id != 0) {
            Some(id) => {
                let mut name = guilds
                    .get(&id.to_string())
                    .cloned()
                    .unwrap_or_else(|| format!("ID:{id}"));
                if tag_home_group {
                    name = format!("{name} ({})", guild_home_group(id));
                }
                CastleOwner {
                    guild_id: record.guild_id,
                    guild_name: name,
                }
            }
            None => CastleOwner {
                guild_id: record.guild_id,
                guild_name: NPC_LABEL.to_string(),
            },
        };
        castles.insert(record.castle_id, owner);
    }
    castles
}
