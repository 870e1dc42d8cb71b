//! Connection records and the request state machine.
//!
//! # Examples
//!
//! ```
//! use kith_core::models::{ConnectionRecord, ConnectionStatus, MemberId, PairStatus};
//!
//! let record = ConnectionRecord::new_pending(
//!     MemberId::from("amara"),
//!     MemberId::from("bennett"),
//! );
//! assert_eq!(record.status, ConnectionStatus::Pending);
//! assert!(record.responded_at.is_none());
//!
//! // The requester sees the request as sent, the addressee as received.
//! assert_eq!(record.status_for(&MemberId::from("amara")), PairStatus::PendingSent);
//! assert_eq!(record.status_for(&MemberId::from("bennett")), PairStatus::PendingReceived);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::member::MemberId;

/// Lifecycle status of a connection record.
///
/// `Pending` is the only non-terminal state. `Accepted` and `Declined` are
/// terminal — no transition ever leaves them. There is deliberately no
/// re-request or un-friend edge in this machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Declined,
}

impl ConnectionStatus {
    /// Whether this status permits no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, ConnectionStatus::Accepted | ConnectionStatus::Declined)
    }

    /// Storage column form.
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Accepted => "accepted",
            ConnectionStatus::Declined => "declined",
        }
    }
}

impl FromStr for ConnectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ConnectionStatus::Pending),
            "accepted" => Ok(ConnectionStatus::Accepted),
            "declined" => Ok(ConnectionStatus::Declined),
            other => Err(format!("unknown connection status: {other}")),
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The addressee's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    Declined,
}

impl Decision {
    /// The terminal status this decision resolves a pending record to.
    pub fn into_status(self) -> ConnectionStatus {
        match self {
            Decision::Accepted => ConnectionStatus::Accepted,
            Decision::Declined => ConnectionStatus::Declined,
        }
    }
}

/// Pair status relative to a viewing member, used by the UI layer to render
/// the correct button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PairStatus {
    /// No record exists between the pair.
    None,
    /// The viewer sent a request that is still pending.
    PendingSent,
    /// The viewer received a request that is still pending.
    PendingReceived,
    Accepted,
    Declined,
}

/// The authoritative record of one connection request between two members.
///
/// Exactly one record may exist per unordered member pair, in any status;
/// the storage layer enforces this with a uniqueness constraint. Records are
/// never deleted — they are the audit trail of the social graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConnectionRecord {
    /// UUID v4 identifier.
    pub id: String,
    pub requester_id: MemberId,
    pub addressee_id: MemberId,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
    /// Set exactly when the record reaches a terminal status.
    pub responded_at: Option<DateTime<Utc>>,
}

impl ConnectionRecord {
    /// Create a fresh pending record with a new UUID.
    ///
    /// Callers must have rejected self-connections already; this is a plain
    /// constructor, not a validator.
    pub fn new_pending(requester_id: MemberId, addressee_id: MemberId) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            requester_id,
            addressee_id,
            status: ConnectionStatus::Pending,
            created_at: Utc::now(),
            responded_at: None,
        }
    }

    /// The unordered pair key `(lo, hi)` this record occupies.
    pub fn pair_key(&self) -> (&MemberId, &MemberId) {
        if self.requester_id <= self.addressee_id {
            (&self.requester_id, &self.addressee_id)
        } else {
            (&self.addressee_id, &self.requester_id)
        }
    }

    /// Whether the given member is one of the two parties.
    pub fn involves(&self, member: &MemberId) -> bool {
        self.requester_id == *member || self.addressee_id == *member
    }

    /// The other party, from `member`'s point of view.
    pub fn other_party(&self, member: &MemberId) -> Option<&MemberId> {
        if self.requester_id == *member {
            Some(&self.addressee_id)
        } else if self.addressee_id == *member {
            Some(&self.requester_id)
        } else {
            None
        }
    }

    /// This record's status relative to a viewing member.
    pub fn status_for(&self, viewer: &MemberId) -> PairStatus {
        match self.status {
            ConnectionStatus::Pending => {
                if self.requester_id == *viewer {
                    PairStatus::PendingSent
                } else {
                    PairStatus::PendingReceived
                }
            }
            ConnectionStatus::Accepted => PairStatus::Accepted,
            ConnectionStatus::Declined => PairStatus::Declined,
        }
    }
}
