//! Subscriber-side contract for consuming change notifications.

use kith_core::models::ConnectionChange;

/// A consumer of connection-state changes (cache invalidation, UI refresh).
///
/// Delivery is at-least-once, so both methods must be idempotent: applying
/// the same change twice, or refreshing twice in a row, has to land in the
/// same state as doing it once. Implementations invalidate/replace derived
/// state — they never mutate it incrementally from the event payload.
pub trait ChangeHandler: Send + Sync {
    /// React to one change.
    fn apply(&self, change: &ConnectionChange);

    /// Discard all derived state and rebuild lazily from authoritative
    /// reads. Called after a lag gap or a resubscription, when an unknown
    /// number of changes may have been missed.
    fn refresh(&self);
}
