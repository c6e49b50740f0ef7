//! Shared input checks for the rank lifecycle.
//!
//! Every check runs before the first mutating store call.

use crate::catalog::ProgrammeCatalog;
use crate::errors::RankError;
use chrono::NaiveDate;

pub const MIN_RANK: i32 = 1;
pub const MAX_RANK: i32 = 9999;

pub fn check_rank(rank: i32) -> Result<(), RankError> {
    if (MIN_RANK..=MAX_RANK).contains(&rank) {
        Ok(())
    } else {
        Err(RankError::invalid(format!(
            "rank {rank} outside {MIN_RANK}..={MAX_RANK}"
        )))
    }
}

/// A missing or blank user id is rejected.
pub fn require_user_id(user_id: Option<&str>) -> Result<&str, RankError> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        Some(_) => Err(RankError::invalid("user id is blank")),
        None => Err(RankError::invalid("user id is required")),
    }
}

pub fn check_programme(catalog: &ProgrammeCatalog, programme: &str) -> Result<(), RankError> {
    if catalog.contains(programme) {
        Ok(())
    } else {
        Err(RankError::invalid(format!("unknown programme '{programme}'")))
    }
}

/// Returns the published places for (programme, year).
pub fn places_for(
    catalog: &ProgrammeCatalog,
    programme: &str,
    year: i32,
) -> Result<i32, RankError> {
    check_programme(catalog, programme)?;
    catalog
        .places(programme, year)
        .ok_or_else(|| RankError::invalid(format!("no places published for {programme} in {year}")))
}

/// Offer date to store for a new rank.
///
/// Inside the auto-offer band the default date is forced and an explicit date
/// is an error. Outside it the requested date is kept verbatim.
pub fn resolve_offer_date(
    auto_offer: bool,
    requested: Option<NaiveDate>,
    default_date: NaiveDate,
) -> Result<Option<NaiveDate>, RankError> {
    match (auto_offer, requested) {
        (true, None) => Ok(Some(default_date)),
        (true, Some(date)) => Err(RankError::date_incorrect(format!(
            "rank qualifies for an automatic offer; {date} cannot be set explicitly"
        ))),
        (false, requested) => Ok(requested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RankErrorKind;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_rank_bounds() {
        for ok in [1, 2, 5000, 9999] {
            assert!(check_rank(ok).is_ok(), "{ok} should pass");
        }
        for bad in [-1, 0, 10000, i32::MIN, i32::MAX] {
            assert_eq!(
                check_rank(bad).unwrap_err().kind(),
                RankErrorKind::InvalidArgument,
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn test_require_user_id() {
        assert_eq!(require_user_id(Some("u1")).unwrap(), "u1");
        assert!(require_user_id(None).is_err());
        assert!(require_user_id(Some("  ")).is_err());
    }

    #[test]
    fn test_places_for_unknown_keys() {
        let catalog = ProgrammeCatalog::new().with_programme("CS", [(2024, 50)]);
        assert_eq!(places_for(&catalog, "CS", 2024).unwrap(), 50);
        let unknown_year = places_for(&catalog, "CS", 2020).unwrap_err();
        assert!(unknown_year.to_string().contains("2020"));
        let unknown_prog = places_for(&catalog, "EE", 2024).unwrap_err();
        assert!(unknown_prog.to_string().contains("unknown programme"));
    }

    #[test]
    fn test_resolve_offer_date_branches() {
        let default_date = d(2024, 4, 15);
        let explicit = d(2024, 6, 1);

        assert_eq!(
            resolve_offer_date(true, None, default_date).unwrap(),
            Some(default_date)
        );
        assert_eq!(
            resolve_offer_date(true, Some(explicit), default_date)
                .unwrap_err()
                .kind(),
            RankErrorKind::DateIncorrect
        );
        assert_eq!(
            resolve_offer_date(false, Some(explicit), default_date).unwrap(),
            Some(explicit)
        );
        assert_eq!(resolve_offer_date(false, None, default_date).unwrap(), None);
    }
}
