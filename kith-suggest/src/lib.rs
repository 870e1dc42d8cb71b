//! # kith-suggest
//!
//! The Suggestion Generator: composes the Profile Store, the Connection
//! Ledger, and the accepted-edge graph into a ranked discovery list.
//! Anyone the viewer already has a record with — pending, accepted, or
//! declined — is excluded, so a member who was just rejected (or who
//! rejected the viewer) is never re-surfaced.

pub mod cache;
pub mod engine;

pub use cache::SuggestionCache;
pub use engine::{Suggestion, SuggestionEngine};
