//! Multi-connection concurrency tests for SqliteRankStore.
//!
//! These tests use separate connections to the same file-backed DB so the
//! SQLite unique constraint, not the in-process mutex, decides the race.

use chrono::NaiveDate;
use ranktrack_core::{
    NewRank, ProgrammeCatalog, RankError, RankManager, RankRecord, RankStore, SqliteRankStore,
};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::NamedTempFile;

fn catalog() -> ProgrammeCatalog {
    ProgrammeCatalog::new().with_programme("CS", [(2024, 50)])
}

fn offer_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
}

/// Two connections racing to add the same key: exactly one succeeds.
#[test]
fn test_two_connections_same_key_one_succeeds() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_path_buf();

    let m1 = Arc::new(RankManager::new(
        catalog(),
        SqliteRankStore::open(&path).unwrap(),
        offer_day(),
    ));
    let m2 = Arc::new(RankManager::new(
        catalog(),
        SqliteRankStore::open(&path).unwrap(),
        offer_day(),
    ));
    let barrier = Arc::new(Barrier::new(2));

    let handles: Vec<_> = [(m1.clone(), 10), (m2.clone(), 200)]
        .into_iter()
        .map(|(m, rank)| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                m.add_rank(NewRank::new(rank, "CS", 2024).user("u1"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(RankError::DuplicateEntry { .. })))
        .count();

    assert_eq!(successes, 1, "Exactly one connection should succeed");
    assert_eq!(duplicates, 1, "Exactly one connection should get DuplicateEntry");
    assert_eq!(m1.store().get_rank_count("u1", 2024).unwrap(), 1);
}

/// The store rejects a duplicate even when the manager's pre-check is bypassed.
#[test]
fn test_store_constraint_without_precheck() {
    let tmp = NamedTempFile::new().unwrap();
    let store1 = SqliteRankStore::open(tmp.path()).unwrap();
    let store2 = SqliteRankStore::open(tmp.path()).unwrap();

    let record = RankRecord {
        user_id: Some("u1".to_string()),
        programme: "CS".to_string(),
        year: 2024,
        rank: 12,
        offer_date: Some(offer_day()),
        source: None,
        is_private: false,
    };

    store1.insert_rank(&record).unwrap();
    let err = store2.insert_rank(&record).unwrap_err();
    assert_eq!(err, RankError::duplicate("u1", "CS", 2024));
    assert_eq!(store2.count_all().unwrap(), 1);
}

/// Many distinct users in parallel all land.
#[test]
fn test_parallel_distinct_users_all_succeed() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_path_buf();

    let handles: Vec<_> = (1..=8)
        .map(|i| {
            let path = path.clone();
            thread::spawn(move || {
                let store = SqliteRankStore::open(&path).unwrap();
                let m = RankManager::new(catalog(), store, offer_day());
                m.add_rank(NewRank::new(i, "CS", 2024).user(format!("u{i}")))
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap().is_ok());
    }

    let store = SqliteRankStore::open(&path).unwrap();
    assert_eq!(store.count_all().unwrap(), 8);
}
