//! Exit codes of the `ranktrack` binary.
//! Each rank error kind gets its own code so scripts can tell them apart.

use ranktrack_core::{RankError, RankErrorKind};

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = 2; // config, database or I/O failure
pub const INVALID_ARGUMENT: i32 = 3;
pub const DUPLICATE_ENTRY: i32 = 4;
pub const DATE_INCORRECT: i32 = 5;
pub const NOT_FOUND: i32 = 6;

pub fn for_kind(kind: RankErrorKind) -> i32 {
    match kind {
        RankErrorKind::InvalidArgument => INVALID_ARGUMENT,
        RankErrorKind::DuplicateEntry => DUPLICATE_ENTRY,
        RankErrorKind::DateIncorrect => DATE_INCORRECT,
        RankErrorKind::NotFound => NOT_FOUND,
        RankErrorKind::Database => INTERNAL_ERROR,
    }
}

pub fn for_error(e: &anyhow::Error) -> i32 {
    e.downcast_ref::<RankError>()
        .map(|r| for_kind(r.kind()))
        .unwrap_or(INTERNAL_ERROR)
}
