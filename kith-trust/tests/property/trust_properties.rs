//! Property tests: trust score bounds and monotonicity.

use std::sync::Arc;

use proptest::prelude::*;

use kith_core::config::TrustConfig;
use kith_core::models::{ActivityKind, MemberId};
use kith_core::traits::{IActivityFeed, IConnectionLedger};
use kith_events::ChangeBus;
use kith_ledger::ConnectionLedger;
use kith_storage::StorageEngine;
use kith_trust::TrustAggregator;

use test_fixtures::make_event;

fn make_stack() -> (Arc<StorageEngine>, Arc<ConnectionLedger>, TrustAggregator) {
    let storage = Arc::new(StorageEngine::open_in_memory().expect("in-memory storage"));
    let ledger = Arc::new(ConnectionLedger::from_engine(&storage, ChangeBus::default()));
    let aggregator = TrustAggregator::new(
        ledger.clone() as Arc<dyn IConnectionLedger>,
        storage.clone() as Arc<dyn IActivityFeed>,
        TrustConfig::default(),
    );
    (storage, ledger, aggregator)
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
    // Proptest re-seeds storage per case; keep the case count tame.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_is_always_bounded(
        events in prop::collection::vec((activity_kind(), 0.0f64..50.0), 0..40),
        connections in 0usize..25,
    ) {
        let (storage, ledger, aggregator) = make_stack();
        let amara = MemberId::from("amara");

        for i in 0..connections {
            let other = MemberId(format!("friend-{i}"));
            let record = ledger.send_request(&other, &amara).unwrap();
            ledger.respond(&record.id, kith_core::models::Decision::Accepted, &amara).unwrap();
        }
        for (i, (kind, weight)) in events.iter().enumerate() {
            storage.append(&make_event("amara", *kind, *weight, i as u32)).unwrap();
        }

        let score = aggregator.score(&amara).unwrap();
        prop_assert!(score <= 100);
    }

    #[test]
    fn adding_a_verified_event_never_lowers_the_score(
        existing in prop::collection::vec((activity_kind(), 0.0f64..20.0), 0..20),
        new_kind in activity_kind(),
        new_weight in 0.0f64..20.0,
    ) {
        let (storage, _ledger, aggregator) = make_stack();
        let amara = MemberId::from("amara");

        for (i, (kind, weight)) in existing.iter().enumerate() {
            storage.append(&make_event("amara", *kind, *weight, i as u32)).unwrap();
        }
        let before = aggregator.score(&amara).unwrap();

        storage.append(&make_event("amara", new_kind, new_weight, 59)).unwrap();
        let after = aggregator.score(&amara).unwrap();

        prop_assert!(after >= before, "score dropped from {before} to {after}");
    }

    #[test]
    fn adding_an_accepted_connection_never_lowers_the_score(
        connections in 0usize..15,
    ) {
        let (_storage, ledger, aggregator) = make_stack();
        let amara = MemberId::from("amara");

        for i in 0..connections {
            let other = MemberId(format!("friend-{i}"));
            let record = ledger.send_request(&other, &amara).unwrap();
            ledger.respond(&record.id, kith_core::models::Decision::Accepted, &amara).unwrap();
        }
        let before = aggregator.score(&amara).unwrap();

        let record = ledger.send_request(&MemberId::from("one-more"), &amara).unwrap();
        ledger.respond(&record.id, kith_core::models::Decision::Accepted, &amara).unwrap();
        let after = aggregator.score(&amara).unwrap();

        prop_assert!(after >= before);
    }
}
