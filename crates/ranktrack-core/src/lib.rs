//! Admission rank tracking.
//!
//! Applicants record their rank for a programme and admission year. The
//! [`RankManager`] validates ranks against the [`ProgrammeCatalog`], stamps an
//! automatic offer date on ranks inside capacity and enforces one rank per
//! (user, programme, year). The [`LeaderboardBuilder`] turns a year of ranks
//! into a public, per-programme view ordered by popularity.
//!
//! ```text
//! caller ──▶ RankManager ──▶ ProgrammeCatalog (read-only)
//!                 │
//!                 ├──▶ RankStore (SQLite)
//!                 │
//!                 └──▶ LeaderboardBuilder ──▶ RankStore::scan_year
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod leaderboard;
pub mod manager;
pub mod model;
pub mod storage;
pub mod validate;

pub use catalog::{Programme, ProgrammeCatalog};
pub use config::{OfferCutoff, RanksConfig};
pub use errors::{RankError, RankErrorKind};
pub use leaderboard::LeaderboardBuilder;
pub use manager::RankManager;
pub use model::{
    LeaderboardEntry, LeaderboardRow, NewRank, ProgrammeRanks, RankDetails, RankRecord,
};
pub use storage::{RankStore, SqliteRankStore};
