use thiserror::Error;

/// Coarse classification of a [`RankError`], used at the boundary to pick a
/// response or exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankErrorKind {
    InvalidArgument,
    DuplicateEntry,
    DateIncorrect,
    NotFound,
    Database,
}

impl RankErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::DuplicateEntry => "duplicate_entry",
            Self::DateIncorrect => "date_incorrect",
            Self::NotFound => "not_found",
            Self::Database => "database",
        }
    }
}

/// Rank lifecycle errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Rank already recorded for user {user_id} in {programme} ({year})")]
    DuplicateEntry {
        user_id: String,
        programme: String,
        year: i32,
    },

    #[error("Offer date rejected: {reason}")]
    DateIncorrect { reason: String },

    #[error("No rank recorded for user {user_id} in {programme} ({year})")]
    NotFound {
        user_id: String,
        programme: String,
        year: i32,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl RankError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        RankError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn date_incorrect(reason: impl Into<String>) -> Self {
        RankError::DateIncorrect {
            reason: reason.into(),
        }
    }

    pub fn duplicate(user_id: &str, programme: &str, year: i32) -> Self {
        RankError::DuplicateEntry {
            user_id: user_id.to_string(),
            programme: programme.to_string(),
            year,
        }
    }

    pub fn not_found(user_id: &str, programme: &str, year: i32) -> Self {
        RankError::NotFound {
            user_id: user_id.to_string(),
            programme: programme.to_string(),
            year,
        }
    }

    pub fn kind(&self) -> RankErrorKind {
        match self {
            Self::InvalidArgument { .. } => RankErrorKind::InvalidArgument,
            Self::DuplicateEntry { .. } => RankErrorKind::DuplicateEntry,
            Self::DateIncorrect { .. } => RankErrorKind::DateIncorrect,
            Self::NotFound { .. } => RankErrorKind::NotFound,
            Self::Database(_) => RankErrorKind::Database,
        }
    }
}

impl From<rusqlite::Error> for RankError {
    fn from(e: rusqlite::Error) -> Self {
        RankError::Database(e.to_string())
    }
}
