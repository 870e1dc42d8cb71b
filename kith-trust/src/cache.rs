//! Optional trust-score cache for render stability.

use moka::sync::Cache;

use kith_core::models::ConnectionChange;
use kith_events::ChangeHandler;

/// Moka-backed cache of computed trust scores, keyed by member id.
///
/// A member's score depends only on their own edges, participation, and
/// events, so a connection change invalidates exactly the two parties.
/// Invalidation replaces — the next read recomputes from authoritative
/// inputs; nothing is patched in place, which is what makes duplicate
/// delivery of the same change a no-op.
pub struct TrustCache {
    cache: Cache<String, u8>,
}

impl TrustCache {
    /// Create a cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Cached score for a member, if present.
    pub fn get(&self, member_id: &str) -> Option<u8> {
        self.cache.get(member_id)
    }

    /// Store a freshly computed score.
    pub fn insert(&self, member_id: String, score: u8) {
        self.cache.insert(member_id, score);
    }

    /// Drop one member's cached score.
    pub fn invalidate(&self, member_id: &str) {
        self.cache.invalidate(member_id);
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

impl ChangeHandler for TrustCache {
    fn apply(&self, change: &ConnectionChange) {
        self.invalidate(change.member_a.as_str());
        self.invalidate(change.member_b.as_str());
    }

    fn refresh(&self) {
        self.clear();
    }
}
