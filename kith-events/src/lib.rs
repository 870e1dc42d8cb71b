//! # kith-events
//!
//! Change Notification Layer: fans every `ConnectionChange` out to all
//! subscribers with at-least-once semantics. Subscribers that fall behind
//! get an explicit lag signal and must refresh from authoritative reads —
//! incremental catch-up is never attempted on their behalf.

pub mod bus;
pub mod handler;
pub mod subscriber;

pub use bus::{ChangeBus, ChangeFeed, ChangeSubscription};
pub use handler::ChangeHandler;
pub use subscriber::{ResilientSubscriber, SubscriberHandle};
