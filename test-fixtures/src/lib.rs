//! Test fixture loader and builders for kith integration tests.
//!
//! The golden dataset is a small mutual-aid community: eight members across
//! three neighborhoods with overlapping skills and interests, enough to give
//! the suggestion scorer every factor to chew on.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;

use kith_core::models::{ActivityEvent, ActivityKind, Member, MemberId};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The golden community dataset.
pub fn community_members() -> Vec<Member> {
    load_fixture("members.json")
}

/// Build a member inline without touching the fixture file.
pub fn make_member(
    id: &str,
    location: Option<&str>,
    skills: &[&str],
    interests: &[&str],
) -> Member {
    Member {
        id: MemberId::from(id),
        location: location.map(str::to_string),
        skills: to_set(skills),
        interests: to_set(interests),
    }
}

/// Build a verified activity event with a deterministic timestamp.
pub fn make_event(member: &str, kind: ActivityKind, weight: f64, minute: u32) -> ActivityEvent {
    ActivityEvent::new(
        MemberId::from(member),
        kind,
        weight,
        fixed_time(minute),
        true,
    )
}

/// A fixed, deterministic timestamp offset by `minute` minutes.
pub fn fixed_time(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, minute % 60, 0).unwrap()
}

/// Initialize console logging for a test run. Safe to call repeatedly.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
