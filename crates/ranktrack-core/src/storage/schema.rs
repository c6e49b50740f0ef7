//! SQLite schema for rank tracking.
//!
//! Tables:
//! - `ranks`: one row per (user_id, programme, year)
//! - `user_data`: display names joined into the leaderboard scan

/// DDL for rank tracking tables.
///
/// Schema version: 1
pub const RANKS_SCHEMA: &str = r#"
-- Display names (identity source for the leaderboard)
CREATE TABLE IF NOT EXISTS user_data (
    user_id          TEXT PRIMARY KEY,
    username         TEXT
);

-- Ranks; user_id may be NULL for anonymous bulk entries
CREATE TABLE IF NOT EXISTS ranks (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id          TEXT,
    programme        TEXT NOT NULL,
    year             INTEGER NOT NULL,
    rank             INTEGER NOT NULL CHECK (rank >= 1 AND rank <= 9999),
    offer_date       TEXT,
    source           TEXT,
    is_private       INTEGER DEFAULT 0,
    inserted_at      TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(user_id, programme, year)
);

CREATE INDEX IF NOT EXISTS idx_ranks_year_rank
    ON ranks(year, rank);
CREATE INDEX IF NOT EXISTS idx_ranks_user_year
    ON ranks(user_id, year);
"#;
