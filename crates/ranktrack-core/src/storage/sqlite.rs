//! SqliteRankStore: SQLite-backed rank persistence.

use super::{RankStore, RANKS_SCHEMA};
use crate::errors::RankError;
use crate::model::{LeaderboardRow, RankDetails, RankRecord};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// SQLite-backed rank store.
#[derive(Clone)]
pub struct SqliteRankStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRankStore {
    /// Open a file-backed store.
    pub fn open(path: &Path) -> Result<Self, RankError> {
        debug!(path = %path.display(), "opening rank store");
        Self::from_connection(Connection::open(path)?)
    }

    /// Create an in-memory store (for testing).
    pub fn memory() -> Result<Self, RankError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Create store from existing connection (for multi-connection tests).
    pub fn from_connection(conn: Connection) -> Result<Self, RankError> {
        Self::init_connection(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn init_connection(conn: &Connection) -> Result<(), RankError> {
        conn.busy_timeout(std::time::Duration::from_millis(5000))?;
        // WAL mode for file-backed DBs (no-op for in-memory)
        let _ = conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()));
        conn.execute_batch(RANKS_SCHEMA)?;
        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, RankError> {
        self.conn
            .lock()
            .map_err(|_| RankError::Database("rank store connection poisoned".to_string()))
    }

    /// Set or replace the display name shown for `user_id` on the leaderboard.
    pub fn set_username(&self, user_id: &str, username: &str) -> Result<(), RankError> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO user_data (user_id, username) VALUES (?1, ?2)
            ON CONFLICT(user_id) DO UPDATE SET username = excluded.username
            "#,
            params![user_id, username],
        )?;
        Ok(())
    }

    /// Total number of stored ranks, anonymous ones included.
    pub fn count_all(&self) -> Result<u32, RankError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM ranks", [], |row| row.get(0))?;
        Ok(count as u32)
    }
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<RankRecord> {
    Ok(RankRecord {
        user_id: row.get(0)?,
        programme: row.get(1)?,
        year: row.get(2)?,
        rank: row.get(3)?,
        offer_date: row.get(4)?,
        source: row.get(5)?,
        is_private: row.get::<_, Option<bool>>(6)?.unwrap_or(false),
    })
}

impl RankStore for SqliteRankStore {
    fn find_rank(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
    ) -> Result<Option<RankDetails>, RankError> {
        let conn = self.conn()?;
        let details = conn
            .query_row(
                "SELECT rank, is_private FROM ranks WHERE user_id = ?1 AND programme = ?2 AND year = ?3",
                params![user_id, programme, year],
                |row| {
                    Ok(RankDetails {
                        rank: row.get(0)?,
                        is_private: row.get::<_, Option<bool>>(1)?.unwrap_or(false),
                    })
                },
            )
            .optional()?;
        Ok(details)
    }

    fn find_record(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
    ) -> Result<Option<RankRecord>, RankError> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                r#"
                SELECT user_id, programme, year, rank, offer_date, source, is_private
                FROM ranks WHERE user_id = ?1 AND programme = ?2 AND year = ?3
                "#,
                params![user_id, programme, year],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    fn rank_exists(&self, user_id: &str, programme: &str, year: i32) -> Result<bool, RankError> {
        let conn = self.conn()?;
        let exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM ranks WHERE user_id = ?1 AND programme = ?2 AND year = ?3",
            params![user_id, programme, year],
            |row| row.get(0),
        )?;
        Ok(exists > 0)
    }

    fn insert_rank(&self, record: &RankRecord) -> Result<(), RankError> {
        let conn = self.conn()?;
        let result = conn.execute(
            r#"
            INSERT INTO ranks (user_id, rank, programme, offer_date, is_private, source, year)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.user_id,
                record.rank,
                record.programme,
                record.offer_date,
                record.is_private,
                record.source,
                record.year,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(RankError::duplicate(
                record.user_id.as_deref().unwrap_or_default(),
                &record.programme,
                record.year,
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn delete_ranks(
        &self,
        user_id: &str,
        programme: Option<&str>,
        year: i32,
    ) -> Result<usize, RankError> {
        let conn = self.conn()?;
        let deleted = match programme {
            Some(p) => conn.execute(
                "DELETE FROM ranks WHERE user_id = ?1 AND programme = ?2 AND year = ?3",
                params![user_id, p, year],
            )?,
            None => conn.execute(
                "DELETE FROM ranks WHERE user_id = ?1 AND year = ?2",
                params![user_id, year],
            )?,
        };
        Ok(deleted)
    }

    fn update_offer_date(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
        offer_date: Option<NaiveDate>,
    ) -> Result<(), RankError> {
        let conn = self.conn()?;
        conn.execute(
            "UPDATE ranks SET offer_date = ?1 WHERE user_id = ?2 AND programme = ?3 AND year = ?4",
            params![offer_date, user_id, programme, year],
        )?;
        Ok(())
    }

    fn scan_year(&self, year: i32) -> Result<Vec<LeaderboardRow>, RankError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT user_data.username, ranks.rank, ranks.programme, ranks.is_private
            FROM ranks
            JOIN user_data ON ranks.user_id = user_data.user_id
            WHERE user_data.username IS NOT NULL AND ranks.year = ?1
            ORDER BY ranks.rank ASC, ranks.id ASC
            "#,
        )?;
        let rows = stmt.query_map([year], |row| {
            Ok(LeaderboardRow {
                username: row.get(0)?,
                rank: row.get(1)?,
                programme: row.get(2)?,
                is_private: row.get(3)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn get_is_private(&self, user_id: &str, year: i32) -> Result<Option<bool>, RankError> {
        let conn = self.conn()?;
        let (count, any_private): (i64, i64) = conn.query_row(
            r#"
            SELECT COUNT(*), COALESCE(MAX(COALESCE(is_private, 0)), 0)
            FROM ranks WHERE user_id = ?1 AND year = ?2
            "#,
            params![user_id, year],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        if count == 0 {
            return Ok(None);
        }
        Ok(Some(any_private != 0))
    }

    fn get_is_private_programme(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
    ) -> Result<Option<bool>, RankError> {
        let conn = self.conn()?;
        let flag: Option<Option<bool>> = conn
            .query_row(
                "SELECT is_private FROM ranks WHERE user_id = ?1 AND programme = ?2 AND year = ?3",
                params![user_id, programme, year],
                |row| row.get(0),
            )
            .optional()?;
        Ok(flag.map(|f| f.unwrap_or(false)))
    }

    fn get_rank_count(&self, user_id: &str, year: i32) -> Result<u32, RankError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM ranks WHERE user_id = ?1 AND year = ?2",
            params![user_id, year],
            |row| row.get(0),
        )?;
        Ok(count as u32)
    }

    fn set_is_private(
        &self,
        user_id: &str,
        is_private: bool,
        year: i32,
        programme: Option<&str>,
    ) -> Result<usize, RankError> {
        let conn = self.conn()?;
        let touched = match programme {
            Some(p) => conn.execute(
                "UPDATE ranks SET is_private = ?1 WHERE user_id = ?2 AND programme = ?3 AND year = ?4",
                params![is_private, user_id, p, year],
            )?,
            None => conn.execute(
                "UPDATE ranks SET is_private = ?1 WHERE user_id = ?2 AND year = ?3",
                params![is_private, user_id, year],
            )?,
        };
        Ok(touched)
    }
}
