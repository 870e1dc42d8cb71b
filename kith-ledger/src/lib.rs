//! # kith-ledger
//!
//! The authoritative Connection Ledger: owns the request state machine
//! (`pending → accepted | declined`, both terminal), enforces the
//! one-record-per-pair rule through the storage-level uniqueness constraint,
//! and publishes every mutation on the change bus.

pub mod engine;

pub use engine::ConnectionLedger;
