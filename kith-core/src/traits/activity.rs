use crate::errors::KithResult;
use crate::models::{ActivityEvent, ActivityKind, MemberId};

/// Append-only feed of activity events from external subsystems.
pub trait IActivityFeed: Send + Sync {
    /// Append an event. Returns `false` when the event's dedup hash already
    /// exists — the at-least-once no-op path, not an error.
    fn append(&self, event: &ActivityEvent) -> KithResult<bool>;

    /// All verified events for a member, oldest first.
    fn verified_events(&self, member: &MemberId) -> KithResult<Vec<ActivityEvent>>;

    /// Count of verified events of one kind for a member.
    fn verified_kind_count(&self, member: &MemberId, kind: ActivityKind) -> KithResult<usize>;
}
