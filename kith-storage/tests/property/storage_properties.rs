//! Property tests: insert→get roundtrip, pair uniqueness both directions,
//! append dedup.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use kith_core::errors::{KithError, StorageError};
use kith_core::models::{ActivityEvent, ActivityKind, ConnectionRecord, MemberId};
use kith_core::traits::IActivityFeed;
use kith_storage::queries::connection_ops;
use kith_storage::StorageEngine;

fn member_id() -> impl Strategy<Value = MemberId> {
    "[a-z]{1,10}".prop_map(MemberId)
}

fn activity_kind() -> impl Strategy<Value = ActivityKind> {
    prop_oneof![
        Just(ActivityKind::Verification),
        Just(ActivityKind::HelpCompleted),
        Just(ActivityKind::Rating),
        Just(ActivityKind::GroupJoined),
        Just(ActivityKind::CampaignJoined),
    ]
}

proptest! {
    #[test]
    fn prop_insert_get_roundtrip(
        (a, b) in (member_id(), member_id()).prop_filter("distinct members", |(a, b)| a != b)
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let record = ConnectionRecord::new_pending(a, b);

        engine.pool().writer.with_conn_sync(|conn| {
            connection_ops::insert_connection(conn, &record)
        }).unwrap();

        let loaded = engine.with_reader(|conn| {
            connection_ops::get_connection(conn, &record.id)
        }).unwrap().unwrap();

        prop_assert_eq!(&loaded.id, &record.id);
        prop_assert_eq!(&loaded.requester_id, &record.requester_id);
        prop_assert_eq!(&loaded.addressee_id, &record.addressee_id);
        prop_assert_eq!(loaded.status, record.status);
    }

    #[test]
    fn prop_pair_uniqueness_is_direction_blind(
        (a, b) in (member_id(), member_id()).prop_filter("distinct members", |(a, b)| a != b),
        reversed in any::<bool>(),
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let first = ConnectionRecord::new_pending(a.clone(), b.clone());
        engine.pool().writer.with_conn_sync(|conn| {
            connection_ops::insert_connection(conn, &first)
        }).unwrap();

        let second = if reversed {
            ConnectionRecord::new_pending(b, a)
        } else {
            ConnectionRecord::new_pending(a, b)
        };
        let err = engine.pool().writer.with_conn_sync(|conn| {
            connection_ops::insert_connection(conn, &second)
        }).unwrap_err();

        let is_unique_violation = matches!(
            err,
            KithError::Storage(StorageError::UniqueViolation { .. })
        );
        prop_assert!(is_unique_violation);
    }

    #[test]
    fn prop_append_is_idempotent(
        member in member_id(),
        kind in activity_kind(),
        weight in 0.0f64..100.0,
        minute in 0u32..60,
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let occurred_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, minute, 0).unwrap();
        let event = ActivityEvent::new(member.clone(), kind, weight, occurred_at, true);

        prop_assert!(engine.append(&event).unwrap());
        prop_assert!(!engine.append(&event).unwrap());
        prop_assert_eq!(engine.verified_events(&member).unwrap().len(), 1);
    }
}
