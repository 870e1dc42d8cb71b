//! Property tests: pair-key normalization and event-hash determinism.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use kith_core::models::{ActivityEvent, ActivityKind, ConnectionRecord, MemberId};

fn member_id() -> impl Strategy<Value = MemberId> {
    "[a-z0-9]{1,12}".prop_map(MemberId)
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
    fn pair_key_ignores_request_direction(
        (a, b) in (member_id(), member_id()).prop_filter("distinct members", |(a, b)| a != b)
    ) {
        let forward = ConnectionRecord::new_pending(a.clone(), b.clone());
        let backward = ConnectionRecord::new_pending(b, a);
        prop_assert_eq!(forward.pair_key(), backward.pair_key());

        let (lo, hi) = forward.pair_key();
        prop_assert!(lo < hi);
    }

    #[test]
    fn event_hash_is_deterministic(
        member in member_id(),
        kind in activity_kind(),
        weight in 0.0f64..1000.0,
        minute in 0u32..60,
    ) {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, minute, 0).unwrap();
        let one = ActivityEvent::new(member.clone(), kind, weight, at, true);
        let replay = ActivityEvent::new(member.clone(), kind, weight, at, true);
        prop_assert_eq!(&one.event_hash, &replay.event_hash);

        // A verified copy of an unverified event is a distinct append.
        let unverified = ActivityEvent::new(member, kind, weight, at, false);
        prop_assert_ne!(&one.event_hash, &unverified.event_hash);
    }

    #[test]
    fn effective_weight_is_never_negative(
        member in member_id(),
        kind in activity_kind(),
        weight in -1000.0f64..1000.0,
    ) {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let event = ActivityEvent::new(member, kind, weight, at, true);
        prop_assert!(event.weight >= 0.0);
        prop_assert!(event.effective_weight() >= 0.0);
    }
}
