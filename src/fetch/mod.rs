//! HTTP fetching with bounded retry.
//!
//! The API signals success through an application-level `status` field in
//! the response envelope, independent of the HTTP status line. A fetch
//! attempt therefore only counts as successful when the body parses as an
//! envelope and that field says 200; everything else — transport errors,
//! 503s, decode failures, bad envelope status — is one failed attempt,
//! retried with linear backoff until the allowed attempts run out.

pub mod types;

use std::time::Duration;

use log::warn;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::RETRY_BASE_DELAY_MS;
use crate::error_handling::{AttemptError, FetchError, FetchErrorKind, FetchStats};

pub use types::{BattleResult, CastleRecord, Envelope, WorldEntry, WorldGroup};

/// Envelope `status` value that signals application-level success.
const API_STATUS_OK: u32 = 200;

/// Fetches `url` and decodes its JSON envelope, retrying transient failures.
///
/// Makes up to `max_retries` attempts, sleeping `1s * attempt_number` after
/// each failed one (1s, 2s, ... — also after the final failure). Every
/// failed attempt is logged with its number and reason and counted in
/// `stats`. Exhausting all attempts yields a [`FetchError`]: a soft failure
/// the caller treats as "no data for this target".
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    stats: &FetchStats,
    url: &str,
    max_retries: usize,
) -> Result<Envelope<T>, FetchError> {
    for attempt in 1..=max_retries {
        match fetch_once::<T>(client, url).await {
            Ok(envelope) => return Ok(envelope),
            Err(e) => {
                stats.increment(e.kind());
                warn!("  retry {attempt}/{max_retries}: {url} ({e})");
            }
        }
        tokio::time::sleep(Duration::from_millis(RETRY_BASE_DELAY_MS * attempt as u64)).await;
    }
    stats.increment(FetchErrorKind::RetriesExhausted);
    Err(FetchError {
        url: url.to_string(),
        attempts: max_retries,
    })
}

/// One GET attempt.
///
/// A 503 is classified on its own before the body is read; any other HTTP
/// status goes straight into JSON decoding, so a non-JSON error page
/// surfaces as a decode failure.
async fn fetch_once<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Envelope<T>, AttemptError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(AttemptError::Transport)?;

    if response.status() == StatusCode::SERVICE_UNAVAILABLE {
        return Err(AttemptError::ServiceUnavailable);
    }

    let envelope: Envelope<T> = response.json().await.map_err(AttemptError::Decode)?;
    if envelope.status != API_STATUS_OK {
        return Err(AttemptError::ApiStatus(envelope.status));
    }
    Ok(envelope)
}
