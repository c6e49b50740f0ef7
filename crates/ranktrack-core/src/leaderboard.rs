//! Public per-programme leaderboard.
//!
//! Two passes over the year scan:
//! 1. [`group_by_key`] partitions rows by programme. Groups are created in
//!    first-seen order and keep the input (ascending rank) order.
//! 2. A stable sort puts the most populated programme first.
//!
//! Ties keep first-seen order. The scan arrives best rank first, so among
//! equally sized programmes the one holding the best rank leads.

use crate::errors::RankError;
use crate::model::{LeaderboardEntry, LeaderboardRow, ProgrammeRanks};
use crate::storage::RankStore;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

pub struct LeaderboardBuilder<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: RankStore + ?Sized> LeaderboardBuilder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn top_ranks(&self, year: i32) -> Result<Vec<ProgrammeRanks>, RankError> {
        let rows = self.store.scan_year(year)?;
        let scanned = rows.len();
        let grouped = group_rows(rows);
        debug!(
            year,
            scanned,
            programmes = grouped.len(),
            "built leaderboard"
        );
        Ok(grouped)
    }
}

/// Unset privacy counts as public.
pub fn is_public(row: &LeaderboardRow) -> bool {
    row.is_private != Some(true)
}

/// Groups public rows by programme and orders groups by descending size.
pub fn group_rows(rows: impl IntoIterator<Item = LeaderboardRow>) -> Vec<ProgrammeRanks> {
    let groups = group_by_key(rows.into_iter().filter(is_public), |row| {
        row.programme.clone()
    });

    let mut grouped: Vec<ProgrammeRanks> = groups
        .into_iter()
        .map(|(programme, rows)| ProgrammeRanks {
            programme,
            entries: rows
                .into_iter()
                .map(|row| LeaderboardEntry {
                    username: row.username,
                    rank: row.rank,
                })
                .collect(),
        })
        .collect();

    // sort_by is stable
    grouped.sort_by(|a, b| b.entries.len().cmp(&a.entries.len()));
    grouped
}

/// Partitions `items` by `key`, preserving first-seen group order and the
/// input order within each group.
pub fn group_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let k = key(&item);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}
