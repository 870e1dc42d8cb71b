//! Suggestion list cache with TTL, invalidated wholesale on change.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use kith_core::config::SuggestConfig;
use kith_core::models::ConnectionChange;
use kith_events::ChangeHandler;

use crate::engine::Suggestion;

/// Moka-backed cache of suggestion lists, keyed by viewer id.
///
/// One new accepted edge shifts mutual counts for arbitrary third parties,
/// so a change event clears the whole cache rather than guessing which
/// viewers are affected. Clearing is idempotent — duplicate delivery of the
/// same change is a no-op.
pub struct SuggestionCache {
    cache: Cache<String, Arc<Vec<Suggestion>>>,
}

impl SuggestionCache {
    /// Create a cache with the given capacity and TTL.
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Create a cache from config.
    pub fn with_config(config: &SuggestConfig) -> Self {
        Self::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        )
    }

    /// Cached suggestions for a viewer, if present.
    pub fn get(&self, member_id: &str) -> Option<Arc<Vec<Suggestion>>> {
        self.cache.get(member_id)
    }

    /// Store a freshly generated list.
    pub fn insert(&self, member_id: String, suggestions: Vec<Suggestion>) {
        self.cache.insert(member_id, Arc::new(suggestions));
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ChangeHandler for SuggestionCache {
    fn apply(&self, _change: &ConnectionChange) {
        self.clear();
    }

    fn refresh(&self) {
        self.clear();
    }
}
