//! ProfileProjection — concurrent in-memory replica of the external
//! Profile Store, refreshed by the hosting environment.

use dashmap::DashMap;
use std::sync::Arc;

use kith_core::models::{Member, MemberId};
use kith_core::traits::IProfileStore;

/// Thread-safe member projection using `DashMap` for concurrent access.
///
/// The core never writes to the authoritative Profile Store; this projection
/// is the read-side copy the Suggestion Generator scores against. `upsert`
/// replaces the whole member record — profile edits upstream arrive as full
/// snapshots, never field-level patches.
#[derive(Clone, Default)]
pub struct ProfileProjection {
    members: Arc<DashMap<MemberId, Member>>,
}

impl ProfileProjection {
    /// Create an empty projection.
    pub fn new() -> Self {
        Self {
            members: Arc::new(DashMap::new()),
        }
    }

    /// Insert or replace a member snapshot.
    pub fn upsert(&self, member: Member) {
        self.members.insert(member.id.clone(), member);
    }

    /// Remove a member (profile deleted upstream).
    pub fn remove(&self, id: &MemberId) -> Option<Member> {
        self.members.remove(id).map(|(_, m)| m)
    }

    /// Number of members currently projected.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the projection is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl IProfileStore for ProfileProjection {
    fn member(&self, id: &MemberId) -> Option<Member> {
        self.members.get(id).map(|r| r.clone())
    }

    fn members(&self) -> Vec<Member> {
        self.members.iter().map(|r| r.value().clone()).collect()
    }
}
