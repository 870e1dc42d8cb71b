use crate::models::{Member, MemberId};

/// Read access to the external Profile Store.
///
/// The core never writes profiles; the hosting environment keeps whatever
/// implementation it supplies in sync with the authoritative store.
pub trait IProfileStore: Send + Sync {
    /// Look up one member.
    fn member(&self, id: &MemberId) -> Option<Member>;

    /// Snapshot of all known members (the suggestion candidate universe).
    fn members(&self) -> Vec<Member>;
}
