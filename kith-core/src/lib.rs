//! # kith-core
//!
//! Foundation crate for the kith connection engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::KithConfig;
pub use errors::{KithError, KithResult};
pub use models::{
    ActivityEvent, ActivityKind, ConnectionChange, ConnectionRecord, ConnectionStatus, Decision,
    Member, MemberId, PairStatus, TrustBreakdown,
};
