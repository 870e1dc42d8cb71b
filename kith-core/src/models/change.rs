//! Change notifications published by the Connection Ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::connection::{ConnectionRecord, ConnectionStatus};
use super::member::MemberId;

/// One connection-state transition, fanned out to all subscribers.
///
/// Delivery is at-least-once: a subscriber may observe the same transition
/// more than once and must treat reapplication as a no-op (idempotent
/// refresh, never incremental mutation). Subscribers reconciling optimistic
/// local state must replace it wholesale with what this event describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConnectionChange {
    pub connection_id: String,
    pub member_a: MemberId,
    pub member_b: MemberId,
    pub new_status: ConnectionStatus,
    pub occurred_at: DateTime<Utc>,
}

impl ConnectionChange {
    /// Snapshot a record's current state as a change event.
    pub fn from_record(record: &ConnectionRecord) -> Self {
        Self {
            connection_id: record.id.clone(),
            member_a: record.requester_id.clone(),
            member_b: record.addressee_id.clone(),
            new_status: record.status,
            occurred_at: record.responded_at.unwrap_or(record.created_at),
        }
    }

    /// Whether the given member is one of the two affected parties.
    pub fn involves(&self, member: &MemberId) -> bool {
        self.member_a == *member || self.member_b == *member
    }
}
