//! Error type definitions.
//!
//! The taxonomy separates three failure tiers: a single failed attempt
//! ([`AttemptError`], retried), a target whose retries ran out
//! ([`FetchError`], soft — the target is dropped from the output), and a
//! missing index ([`CollectError`], fatal — without the index there is no
//! target universe and the run aborts).

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// One failed fetch attempt.
///
/// An HTTP 503 is classified on its own even though it is retried exactly
/// like every other failure; the distinction only changes the logged reason.
#[derive(Error, Debug)]
pub enum AttemptError {
    /// The request never produced a response (connect/timeout/transport).
    #[error("request failed: {0}")]
    Transport(#[source] ReqwestError),

    /// The server answered 503 Service Unavailable.
    #[error("503 service unavailable")]
    ServiceUnavailable,

    /// The response body was not a valid JSON envelope.
    #[error("invalid JSON body: {0}")]
    Decode(#[source] ReqwestError),

    /// The envelope's application-level status field was not 200.
    #[error("api status {0}")]
    ApiStatus(u32),
}

impl AttemptError {
    /// The statistics bucket this attempt failure counts toward.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            AttemptError::Transport(_) => FetchErrorKind::TransportError,
            AttemptError::ServiceUnavailable => FetchErrorKind::ServiceUnavailable,
            AttemptError::Decode(_) => FetchErrorKind::DecodeError,
            AttemptError::ApiStatus(_) => FetchErrorKind::ApiStatusError,
        }
    }
}

/// Soft failure: a URL produced no usable response after all retries.
///
/// Callers treat this as "no data for this target" and continue; a snapshot
/// with fewer entries than expected is a normal outcome.
#[derive(Error, Debug)]
#[error("no response after {attempts} attempts: {url}")]
pub struct FetchError {
    /// The URL that kept failing.
    pub url: String,
    /// How many attempts were made.
    pub attempts: usize,
}

/// Fatal failure: a collector pass could not establish its target universe.
///
/// Propagated to the process boundary; no artifact is written for the run.
#[derive(Error, Debug)]
pub enum CollectError {
    /// The index endpoint stayed unreachable through all retries.
    #[error("{mode} index unavailable: {source}")]
    IndexUnavailable {
        /// Which index endpoint failed (`worlds` or `wgroups`).
        mode: &'static str,
        /// The exhausted fetch underneath.
        #[source]
        source: FetchError,
    },

    /// The index endpoint answered successfully but carried no data.
    #[error("{mode} index returned no data")]
    EmptyIndex {
        /// Which index endpoint was empty (`worlds` or `wgroups`).
        mode: &'static str,
    },
}

/// Categories of fetch failures tracked by [`super::FetchStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    /// Request never produced a response.
    TransportError,
    /// HTTP 503 responses.
    ServiceUnavailable,
    /// Response bodies that failed JSON decoding.
    DecodeError,
    /// Envelopes whose application-level status was not 200.
    ApiStatusError,
    /// Targets dropped after exhausting all retries.
    RetriesExhausted,
    /// Successful responses that carried no castle data.
    MissingCastles,
}

impl FetchErrorKind {
    /// Human-readable label for the end-of-run summary.
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::TransportError => "transport errors",
            FetchErrorKind::ServiceUnavailable => "503 responses",
            FetchErrorKind::DecodeError => "JSON decode failures",
            FetchErrorKind::ApiStatusError => "non-200 api status",
            FetchErrorKind::RetriesExhausted => "targets exhausted retries",
            FetchErrorKind::MissingCastles => "responses without castle data",
        }
    }
}
