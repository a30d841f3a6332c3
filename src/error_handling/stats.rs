//! Fetch failure statistics tracking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::FetchErrorKind;

/// Thread-safe counters over the fetch-failure taxonomy.
///
/// Shared across queue workers; every failed attempt, every exhausted
/// target, and every castle-less response increments one counter. All kinds
/// are seeded to zero on creation so `increment` never has to insert.
pub struct FetchStats {
    counters: HashMap<FetchErrorKind, AtomicUsize>,
}

impl FetchStats {
    /// Creates a tracker with every failure kind initialized to zero.
    pub fn new() -> Self {
        let mut counters = HashMap::new();
        for kind in FetchErrorKind::iter() {
            counters.insert(kind, AtomicUsize::new(0));
        }
        FetchStats { counters }
    }

    /// Increment the counter for a failure kind.
    ///
    /// All kinds are seeded in `new()`; a missing counter indicates an
    /// initialization bug, so it is logged rather than panicking.
    pub fn increment(&self, kind: FetchErrorKind) {
        if let Some(counter) = self.counters.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "No counter for {:?}; FetchStats was not fully initialized.",
                kind
            );
        }
    }

    /// Current count for one failure kind.
    pub fn count(&self, kind: FetchErrorKind) -> usize {
        self.counters
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all kinds.
    pub fn total(&self) -> usize {
        self.counters.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

impl Default for FetchStats {
    fn default() -> Self {
        Self::new()
    }
}
