//! Storage-level race arbitration across independent client processes,
//! simulated with separate pools over one shared database file.

use std::sync::Arc;
use std::thread;

use kith_core::errors::{KithError, LedgerError};
use kith_core::models::{ConnectionStatus, Decision, MemberId};
use kith_core::traits::IConnectionLedger;
use kith_events::ChangeBus;
use kith_ledger::ConnectionLedger;
use kith_storage::StorageEngine;

fn id(s: &str) -> MemberId {
    MemberId::from(s)
}

/// Two clients race `send_request(A,B)` and `send_request(B,A)`. The pair
/// index must let exactly one insert commit; the loser observes
/// `DuplicateConnection`. No client-side locking is involved — each thread
/// has its own engine and write connection.
#[test]
fn concurrent_requests_create_exactly_one_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("kith.db");

    // Open sequentially so migrations don't race; the contest below is
    // purely over row inserts.
    let engine_a = Arc::new(StorageEngine::open(&db_path).expect("open a"));
    let engine_b = Arc::new(StorageEngine::open(&db_path).expect("open b"));

    let handle_a = {
        let engine = Arc::clone(&engine_a);
        thread::spawn(move || {
            let ledger = ConnectionLedger::from_engine(&engine, ChangeBus::default());
            ledger.send_request(&id("amara"), &id("bennett"))
        })
    };
    let handle_b = {
        let engine = Arc::clone(&engine_b);
        thread::spawn(move || {
            let ledger = ConnectionLedger::from_engine(&engine, ChangeBus::default());
            ledger.send_request(&id("bennett"), &id("amara"))
        })
    };

    let results = [handle_a.join().unwrap(), handle_b.join().unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(KithError::Ledger(LedgerError::DuplicateConnection { .. }))
            )
        })
        .count();

    assert_eq!(successes, 1, "exactly one insert must commit");
    assert_eq!(duplicates, 1, "the loser must see DuplicateConnection");

    // Exactly one record is visible afterwards.
    let ledger = ConnectionLedger::from_engine(&engine_a, ChangeBus::default());
    assert_eq!(ledger.records_for(&id("amara")).unwrap().len(), 1);
}

/// Two clients race `respond` on the same pending record: first write wins,
/// the loser observes `AlreadyResolved` with the status that stuck.
#[test]
fn concurrent_responds_are_first_write_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("kith.db");

    let engine_a = Arc::new(StorageEngine::open(&db_path).expect("open a"));
    let engine_b = Arc::new(StorageEngine::open(&db_path).expect("open b"));

    let setup = ConnectionLedger::from_engine(&engine_a, ChangeBus::default());
    let record = setup.send_request(&id("amara"), &id("bennett")).unwrap();

    let accept = {
        let engine = Arc::clone(&engine_a);
        let record_id = record.id.clone();
        thread::spawn(move || {
            let ledger = ConnectionLedger::from_engine(&engine, ChangeBus::default());
            ledger.respond(&record_id, Decision::Accepted, &id("bennett"))
        })
    };
    let decline = {
        let engine = Arc::clone(&engine_b);
        let record_id = record.id.clone();
        thread::spawn(move || {
            let ledger = ConnectionLedger::from_engine(&engine, ChangeBus::default());
            ledger.respond(&record_id, Decision::Declined, &id("bennett"))
        })
    };

    let results = [accept.join().unwrap(), decline.join().unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let already = results
        .iter()
        .filter(|r| {
            matches!(
                r,
                Err(KithError::Ledger(LedgerError::AlreadyResolved { .. }))
            )
        })
        .count();

    assert_eq!(successes, 1, "exactly one respond must win");
    assert_eq!(already, 1, "the loser must see AlreadyResolved");

    // The stored status matches the winner's decision.
    let winner_status = results.iter().find_map(|r| r.as_ref().ok()).unwrap().status;
    let stored = setup.record(&record.id).unwrap().unwrap();
    assert_eq!(stored.status, winner_status);
    assert!(stored.status.is_terminal());
    assert!(stored.responded_at.is_some());
}

/// Many sequential requests against one shared engine don't interfere:
/// every distinct pair gets its record, every duplicate is rejected.
#[test]
fn request_storm_keeps_pair_uniqueness() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("kith.db");
    let engine = Arc::new(StorageEngine::open(&db_path).expect("open"));

    let members: Vec<MemberId> = (0..6).map(|i| MemberId(format!("member-{i}"))).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let members = members.clone();
            thread::spawn(move || {
                let ledger = ConnectionLedger::from_engine(&engine, ChangeBus::default());
                let mut created = 0;
                for a in &members {
                    for b in &members {
                        if a < b && ledger.send_request(a, b).is_ok() {
                            created += 1;
                        }
                    }
                }
                created
            })
        })
        .collect();

    let total_created: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    // 6 choose 2 distinct pairs, each created exactly once across all threads.
    assert_eq!(total_created, 15);

    let ledger = ConnectionLedger::from_engine(&engine, ChangeBus::default());
    for member in &members {
        for record in ledger.records_for(member).unwrap() {
            assert_eq!(record.status, ConnectionStatus::Pending);
        }
        assert_eq!(ledger.records_for(member).unwrap().len(), 5);
    }
}
