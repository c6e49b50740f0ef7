//! Rank persistence.
//!
//! [`RankStore`] is the seam the manager talks to. [`SqliteRankStore`] is the
//! shipped implementation; its `UNIQUE(user_id, programme, year)` constraint
//! is what settles two concurrent adds for the same key.

use crate::errors::RankError;
use crate::model::{LeaderboardRow, RankDetails, RankRecord};
use chrono::NaiveDate;

pub mod schema;
mod sqlite;

pub use schema::RANKS_SCHEMA;
pub use sqlite::SqliteRankStore;

pub trait RankStore: Send + Sync {
    fn find_rank(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
    ) -> Result<Option<RankDetails>, RankError>;

    fn find_record(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
    ) -> Result<Option<RankRecord>, RankError>;

    fn rank_exists(&self, user_id: &str, programme: &str, year: i32) -> Result<bool, RankError>;

    /// Must fail with [`RankError::DuplicateEntry`] when the key is taken.
    fn insert_rank(&self, record: &RankRecord) -> Result<(), RankError>;

    /// Deletes one record, or every record of the user in `year` when
    /// `programme` is `None`. Returns the number of rows removed.
    fn delete_ranks(
        &self,
        user_id: &str,
        programme: Option<&str>,
        year: i32,
    ) -> Result<usize, RankError>;

    fn update_offer_date(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
        offer_date: Option<NaiveDate>,
    ) -> Result<(), RankError>;

    /// All ranks of `year` whose user has a display name, ascending by rank.
    fn scan_year(&self, year: i32) -> Result<Vec<LeaderboardRow>, RankError>;

    /// `None` when the user has no record in `year`.
    fn get_is_private(&self, user_id: &str, year: i32) -> Result<Option<bool>, RankError>;

    fn get_is_private_programme(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
    ) -> Result<Option<bool>, RankError>;

    fn get_rank_count(&self, user_id: &str, year: i32) -> Result<u32, RankError>;

    /// Sets the flag on one record, or on all of the user's records in `year`
    /// when `programme` is `None`. Returns the number of rows touched.
    fn set_is_private(
        &self,
        user_id: &str,
        is_private: bool,
        year: i32,
        programme: Option<&str>,
    ) -> Result<usize, RankError>;
}
