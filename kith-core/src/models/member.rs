//! Member identity and profile attributes.
//!
//! Profiles are owned by the external Profile Store; the core treats them as
//! immutable read-only input (suggestion scoring reads skills, interests,
//! and location — nothing else).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Opaque member identifier assigned by the Profile Store.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct MemberId(pub String);

impl MemberId {
    /// The raw string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member profile as seen by the core.
///
/// Skill and interest sets are ordered (`BTreeSet`) so overlap computations
/// and serialized output are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Member {
    pub id: MemberId,
    /// Free-form location label; `None` when the member hasn't set one.
    /// Two members only count as co-located when both have set the same label.
    pub location: Option<String>,
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
}

impl Member {
    /// A member with no profile attributes — used when the Profile Store has
    /// no entry for an id the ledger already knows about.
    pub fn bare(id: MemberId) -> Self {
        Self {
            id,
            location: None,
            skills: BTreeSet::new(),
            interests: BTreeSet::new(),
        }
    }

    /// Number of skills shared with another member.
    pub fn shared_skills(&self, other: &Member) -> usize {
        self.skills.intersection(&other.skills).count()
    }

    /// Number of interests shared with another member.
    pub fn shared_interests(&self, other: &Member) -> usize {
        self.interests.intersection(&other.interests).count()
    }

    /// Whether both members have set the same non-empty location.
    pub fn same_location(&self, other: &Member) -> bool {
        match (&self.location, &other.location) {
            (Some(a), Some(b)) => !a.is_empty() && a == b,
            _ => false,
        }
    }
}
