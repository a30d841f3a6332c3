//! Cross-region collector: one snapshot per (group, class, block) cell.

use log::info;
use reqwest::Client;

use crate::config::{Config, BATTLE_BLOCKS, BATTLE_CLASSES};
use crate::error_handling::{CollectError, FetchErrorKind, FetchStats};
use crate::fetch::{fetch_json, BattleResult, Envelope, WorldGroup};
use crate::models::{aggregate_timestamp, BlockSnapshot, RegionSnapshot};
use crate::queue::run_queue;

use super::castle_owners;
use super::labels::{block_name, class_name, server_name, world_label};

/// One fetchable cell of a cross-region battle.
#[derive(Debug, Clone)]
struct BlockTarget {
    group_id: u32,
    worlds: Vec<u32>,
    class: u8,
    block: u8,
}

/// Collects castle snapshots for every eligible world group of the
/// configured server region, expanded across all skill classes and
/// sub-blocks.
///
/// Same failure contract as the local pass: a missing groups index is
/// fatal, individual cells that stay unreachable are silently dropped.
pub async fn collect_global(
    client: &Client,
    stats: &FetchStats,
    config: &Config,
) -> Result<RegionSnapshot<BlockSnapshot>, CollectError> {
    let index_url = format!("{}/wgroups", config.api_base);
    let index: Envelope<Vec<WorldGroup>> =
        fetch_json(client, stats, &index_url, config.max_retries)
            .await
            .map_err(|source| CollectError::IndexUnavailable {
                mode: "wgroups",
                source,
            })?;

    let groups: Vec<WorldGroup> = index
        .data
        .ok_or(CollectError::EmptyIndex { mode: "wgroups" })?
        .into_iter()
        .filter(|group| {
            group.globalgvg
                && group
                    .worlds
                    .first()
                    .is_some_and(|world| world.to_string().starts_with(&config.server))
        })
        .collect();

    let mut targets = Vec::with_capacity(groups.len() * BATTLE_CLASSES.len() * BATTLE_BLOCKS.len());
    for group in &groups {
        for &class in &BATTLE_CLASSES {
            for &block in &BATTLE_BLOCKS {
                targets.push(BlockTarget {
                    group_id: group.group_id,
                    worlds: group.worlds.clone(),
                    class,
                    block,
                });
            }
        }
    }
    info!("  {} blocks", targets.len());

    let handler = |target: BlockTarget| async move {
        let url = format!(
            "{}/wg/{}/globalgvg/{}/{}/latest",
            config.api_base, target.group_id, target.class, target.block
        );
        let envelope: Envelope<BattleResult> =
            match fetch_json(client, stats, &url, config.max_retries).await {
                Ok(envelope) => envelope,
                Err(_) => return None,
            };

        let Some(battle) = envelope.data else {
            stats.increment(FetchErrorKind::MissingCastles);
            return None;
        };
        let Some(records) = battle.castles else {
            stats.increment(FetchErrorKind::MissingCastles);
            return None;
        };

        let region = target.worlds.first().map_or("?", |&world| server_name(world));
        let member_worlds = target
            .worlds
            .iter()
            .map(|&world| world_label(world))
            .collect::<Vec<_>>()
            .join(", ");

        Some(BlockSnapshot {
            label: format!(
                "{region} G{} {} {}",
                target.group_id,
                class_name(target.class),
                block_name(target.block)
            ),
            gid: target.group_id,
            cls: target.class,
            blk: target.block,
            sn: region.to_string(),
            wds: member_worlds,
            castles: castle_owners(records, &battle.guilds, true),
            timestamp: envelope.timestamp,
        })
    };

    let mut items = run_queue(targets, config.concurrency, config.worker_delay(), handler).await;

    sort_blocks(&mut items);
    let timestamp = aggregate_timestamp(items.iter().map(|item| item.timestamp));
    info!("  {} block snapshots collected", items.len());

    Ok(RegionSnapshot { items, timestamp })
}

/// Region name, then group id, class, block; each later key is compared
/// only when all earlier keys tie.
fn sort_blocks(items: &mut [BlockSnapshot]) {
    items.sort_by(|a, b| {
        a.sn.cmp(&b.sn)
            .then_with(|| a.gid.cmp(&b.gid))
            .then_with(|| a.cls.cmp(&b.cls))
            .then_with(|| a.blk.cmp(&b.blk))
    });
}
