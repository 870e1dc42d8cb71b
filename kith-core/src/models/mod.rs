//! Data model for the connection engine: members, connection records,
//! activity events, change notifications, and trust breakdowns.

mod activity;
mod change;
mod connection;
mod member;
mod trust;

pub use activity::{ActivityEvent, ActivityKind};
pub use change::ConnectionChange;
pub use connection::{ConnectionRecord, ConnectionStatus, Decision, PairStatus};
pub use member::{Member, MemberId};
pub use trust::TrustBreakdown;
