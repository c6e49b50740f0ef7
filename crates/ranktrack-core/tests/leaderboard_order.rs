//! Leaderboard grouping and privacy filtering through the store.

use chrono::NaiveDate;
use ranktrack_core::{NewRank, ProgrammeCatalog, RankManager, SqliteRankStore};

fn manager() -> RankManager<SqliteRankStore> {
    let catalog = ProgrammeCatalog::new()
        .with_programme("CS", [(2024, 50)])
        .with_programme("EE", [(2024, 20)])
        .with_programme("ME", [(2024, 30)]);
    RankManager::new(
        catalog,
        SqliteRankStore::memory().unwrap(),
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
    )
}

fn add(m: &RankManager<SqliteRankStore>, user: &str, name: &str, programme: &str, rank: i32) {
    m.add_rank(NewRank::new(rank, programme, 2024).user(user))
        .unwrap();
    m.store().set_username(user, name).unwrap();
}

fn shape(m: &RankManager<SqliteRankStore>) -> Vec<(String, Vec<(String, i32)>)> {
    m.get_top_ranks(2024)
        .unwrap()
        .into_iter()
        .map(|g| {
            (
                g.programme,
                g.entries.into_iter().map(|e| (e.username, e.rank)).collect(),
            )
        })
        .collect()
}

#[test]
fn test_most_populated_programme_first() {
    let m = manager();
    add(&m, "u3", "cara", "EE", 1);
    add(&m, "u2", "ben", "CS", 2);
    add(&m, "u1", "ann", "CS", 1);

    assert_eq!(
        shape(&m),
        vec![
            (
                "CS".to_string(),
                vec![("ann".to_string(), 1), ("ben".to_string(), 2)]
            ),
            ("EE".to_string(), vec![("cara".to_string(), 1)]),
        ]
    );
}

#[test]
fn test_private_record_excluded_public_twin_included() {
    let m = manager();
    add(&m, "u1", "ann", "CS", 7);
    add(&m, "u2", "ben", "CS", 7);
    m.set_is_private_programme("u1", true, "CS", 2024).unwrap();

    assert_eq!(
        shape(&m),
        vec![("CS".to_string(), vec![("ben".to_string(), 7)])]
    );
}

#[test]
fn test_users_without_display_name_hidden() {
    let m = manager();
    add(&m, "u1", "ann", "CS", 3);
    m.add_rank(NewRank::new(1, "CS", 2024).user("anon")).unwrap();
    m.add_rank(NewRank::new(2, "CS", 2024)).unwrap();

    assert_eq!(
        shape(&m),
        vec![("CS".to_string(), vec![("ann".to_string(), 3)])]
    );
}

#[test]
fn test_equal_sizes_led_by_best_rank() {
    let m = manager();
    add(&m, "u1", "ann", "ME", 4);
    add(&m, "u2", "ben", "EE", 2);
    add(&m, "u3", "cara", "ME", 9);
    add(&m, "u4", "dan", "EE", 5);
    add(&m, "u5", "eve", "CS", 1);

    let order: Vec<String> = shape(&m).into_iter().map(|(p, _)| p).collect();
    assert_eq!(order, ["EE", "ME", "CS"]);
}

#[test]
fn test_other_years_and_empty() {
    let m = manager();
    assert!(m.get_top_ranks(2024).unwrap().is_empty());
    add(&m, "u1", "ann", "CS", 3);
    assert!(m.get_top_ranks(2023).unwrap().is_empty());
}

#[test]
fn test_whole_year_privacy_hides_user_everywhere() {
    let m = manager();
    add(&m, "u1", "ann", "CS", 3);
    m.add_rank(NewRank::new(4, "EE", 2024).user("u1")).unwrap();
    add(&m, "u2", "ben", "EE", 6);
    m.set_is_private("u1", true, 2024).unwrap();

    assert_eq!(
        shape(&m),
        vec![("EE".to_string(), vec![("ben".to_string(), 6)])]
    );
}
