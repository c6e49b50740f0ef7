use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored rank, keyed by (user_id, programme, year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRecord {
    pub user_id: Option<String>,
    pub programme: String,
    pub year: i32,
    pub rank: i32,
    pub offer_date: Option<NaiveDate>,
    pub source: Option<String>,
    pub is_private: bool,
}

/// Input to [`RankManager::add_rank`](crate::manager::RankManager::add_rank).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRank {
    pub rank: i32,
    pub programme: String,
    pub year: i32,
    pub user_id: Option<String>,
    /// Only honoured for ranks outside the auto-offer band.
    pub offer_date: Option<NaiveDate>,
    pub source: Option<String>,
    pub is_private: bool,
}

impl NewRank {
    pub fn new(rank: i32, programme: impl Into<String>, year: i32) -> Self {
        Self {
            rank,
            programme: programme.into(),
            year,
            user_id: None,
            offer_date: None,
            source: None,
            is_private: false,
        }
    }

    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn offer_date(mut self, date: NaiveDate) -> Self {
        self.offer_date = Some(date);
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }
}

/// Rank and visibility of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDetails {
    pub rank: i32,
    pub is_private: bool,
}

/// Year-scan row joined with the user's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub username: String,
    pub rank: i32,
    pub programme: String,
    /// `None` for rows stored without a flag; treated as public.
    pub is_private: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub rank: i32,
}

/// Public ranks of one programme, best rank first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgrammeRanks {
    pub programme: String,
    pub entries: Vec<LeaderboardEntry>,
}

impl ProgrammeRanks {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
