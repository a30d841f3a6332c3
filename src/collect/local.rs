//! Local-battle collector: one snapshot per eligible world of the server.

use log::info;
use reqwest::Client;

use crate::config::Config;
use crate::error_handling::{CollectError, FetchErrorKind, FetchStats};
use crate::fetch::{fetch_json, BattleResult, Envelope, WorldEntry};
use crate::models::{aggregate_timestamp, RegionSnapshot, WorldSnapshot};
use crate::queue::run_queue;

use super::castle_owners;
use super::labels::world_label;

/// Collects castle snapshots for every eligible world on the configured
/// server.
///
/// The worlds index is the one fatal dependency — without it there is no
/// target universe. Individual worlds that stay unreachable after retries
/// are dropped from the output silently; the snapshot just has fewer
/// entries.
pub async fn collect_local(
    client: &Client,
    stats: &FetchStats,
    config: &Config,
) -> Result<RegionSnapshot<WorldSnapshot>, CollectError> {
    let index_url = format!("{}/worlds", config.api_base);
    let index: Envelope<Vec<WorldEntry>> =
        fetch_json(client, stats, &index_url, config.max_retries)
            .await
            .map_err(|source| CollectError::IndexUnavailable {
                mode: "worlds",
                source,
            })?;

    let targets: Vec<u32> = index
        .data
        .ok_or(CollectError::EmptyIndex { mode: "worlds" })?
        .into_iter()
        .filter(|world| world.localgvg && world.world_id.to_string().starts_with(&config.server))
        .map(|world| world.world_id)
        .collect();
    info!("  {} worlds", targets.len());

    let handler = |world_id: u32| async move {
        let url = format!("{}/{}/localgvg/latest", config.api_base, world_id);
        let envelope: Envelope<BattleResult> =
            match fetch_json(client, stats, &url, config.max_retries).await {
                Ok(envelope) => envelope,
                // Already logged and counted per attempt; the target is
                // simply absent from the snapshot.
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

        Some(WorldSnapshot {
            wid: world_id,
            label: world_label(world_id),
            castles: castle_owners(records, &battle.guilds, false),
            timestamp: envelope.timestamp,
        })
    };

    let mut items = run_queue(targets, config.concurrency, config.worker_delay(), handler).await;

    items.sort_by_key(|item| item.wid);
    let timestamp = aggregate_timestamp(items.iter().map(|item| item.timestamp));
    info!("  {} world snapshots collected", items.len());

    Ok(RegionSnapshot { items, timestamp })
}
