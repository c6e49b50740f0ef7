//! Rank lifecycle orchestration.
//!
//! Flow for every mutating call:
//! 1. Validate against the programme catalog
//! 2. Read whatever the decision needs from the store
//! 3. Perform exactly one write
//!
//! No store write happens before all checks pass. Concurrent duplicate adds
//! are settled by the store's unique constraint, not here.

use crate::catalog::ProgrammeCatalog;
use crate::config::RanksConfig;
use crate::errors::RankError;
use crate::leaderboard::LeaderboardBuilder;
use crate::model::{NewRank, ProgrammeRanks, RankDetails, RankRecord};
use crate::storage::RankStore;
use crate::validate;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

pub struct RankManager<S> {
    catalog: ProgrammeCatalog,
    store: S,
    default_offer_date: NaiveDate,
}

impl<S: RankStore> RankManager<S> {
    pub fn new(catalog: ProgrammeCatalog, store: S, default_offer_date: NaiveDate) -> Self {
        Self {
            catalog,
            store,
            default_offer_date,
        }
    }

    pub fn from_config(config: &RanksConfig, store: S) -> Result<Self, RankError> {
        let default_offer_date = config.default_offer_date().ok_or_else(|| {
            RankError::invalid(format!(
                "offer cutoff is not a valid date in {}",
                config.current_year
            ))
        })?;
        Ok(Self::new(config.programmes.clone(), store, default_offer_date))
    }

    pub fn catalog(&self) -> &ProgrammeCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn default_offer_date(&self) -> NaiveDate {
        self.default_offer_date
    }

    pub fn get_rank_details(
        &self,
        programme: &str,
        year: i32,
        user_id: Option<&str>,
    ) -> Result<Option<RankDetails>, RankError> {
        let user_id = validate::require_user_id(user_id)?;
        debug!(user_id, programme, year, "get rank details");
        self.store.find_rank(user_id, programme, year)
    }

    /// Like [`get_rank_details`](Self::get_rank_details) but returns the whole
    /// stored record, offer date and source included.
    pub fn get_rank_record(
        &self,
        programme: &str,
        year: i32,
        user_id: Option<&str>,
    ) -> Result<Option<RankRecord>, RankError> {
        let user_id = validate::require_user_id(user_id)?;
        self.store.find_record(user_id, programme, year)
    }

    /// Validates and stores a new rank, returning the record as persisted.
    ///
    /// Ranks inside capacity get the default offer date; passing an explicit
    /// one for them fails with [`RankError::DateIncorrect`]. Ranks above
    /// capacity keep whatever offer date was passed, including none.
    pub fn add_rank(&self, new: NewRank) -> Result<RankRecord, RankError> {
        validate::check_rank(new.rank)?;
        validate::places_for(&self.catalog, &new.programme, new.year)?;

        if let Some(user_id) = new.user_id.as_deref() {
            let user_id = validate::require_user_id(Some(user_id))?;
            if self.store.rank_exists(user_id, &new.programme, new.year)? {
                warn!(
                    user_id,
                    programme = %new.programme,
                    year = new.year,
                    "duplicate rank rejected"
                );
                return Err(RankError::duplicate(user_id, &new.programme, new.year));
            }
        }

        let auto_offer = self
            .catalog
            .qualifies_for_auto_offer(new.rank, &new.programme, new.year);
        let offer_date =
            validate::resolve_offer_date(auto_offer, new.offer_date, self.default_offer_date)
                .inspect_err(|_| {
                    warn!(
                        user_id = new.user_id.as_deref().unwrap_or("-"),
                        programme = %new.programme,
                        year = new.year,
                        rank = new.rank,
                        "explicit offer date rejected"
                    );
                })?;

        let record = RankRecord {
            user_id: new.user_id,
            programme: new.programme,
            year: new.year,
            rank: new.rank,
            offer_date,
            source: new.source,
            is_private: new.is_private,
        };
        self.store.insert_rank(&record)?;

        info!(
            user_id = record.user_id.as_deref().unwrap_or("-"),
            programme = %record.programme,
            year = record.year,
            rank = record.rank,
            auto_offer,
            "rank added"
        );
        Ok(record)
    }

    /// Deletes one record, or all of the user's records in `year` when
    /// `programme` is `None`. Deleting nothing is not an error.
    pub fn delete_rank(
        &self,
        user_id: &str,
        programme: Option<&str>,
        year: i32,
    ) -> Result<usize, RankError> {
        if let Some(p) = programme {
            validate::check_programme(&self.catalog, p)?;
        }
        let deleted = self.store.delete_ranks(user_id, programme, year)?;
        info!(
            user_id,
            programme = programme.unwrap_or("*"),
            year,
            deleted,
            "ranks deleted"
        );
        Ok(deleted)
    }

    /// Manually sets (or clears) the offer date of a rank above capacity.
    pub fn set_offer_date(
        &self,
        user_id: &str,
        programme: &str,
        offer_date: Option<NaiveDate>,
        year: i32,
    ) -> Result<(), RankError> {
        validate::places_for(&self.catalog, programme, year)?;

        let current = self
            .store
            .find_rank(user_id, programme, year)?
            .ok_or_else(|| RankError::not_found(user_id, programme, year))?;

        if self
            .catalog
            .qualifies_for_auto_offer(current.rank, programme, year)
        {
            warn!(user_id, programme, year, rank = current.rank, "offer date override rejected");
            return Err(RankError::date_incorrect(format!(
                "rank {} is within capacity; its offer date is automatic",
                current.rank
            )));
        }

        self.store
            .update_offer_date(user_id, programme, year, offer_date)?;
        info!(user_id, programme, year, offer_date = ?offer_date, "offer date updated");
        Ok(())
    }

    pub fn get_top_ranks(&self, year: i32) -> Result<Vec<ProgrammeRanks>, RankError> {
        LeaderboardBuilder::new(&self.store).top_ranks(year)
    }

    /// `None` when the user has no rank in `year`; otherwise `true` if any
    /// of the user's ranks that year is private.
    pub fn get_is_private(&self, user_id: &str, year: i32) -> Result<Option<bool>, RankError> {
        self.store.get_is_private(user_id, year)
    }

    pub fn get_has_only_one_rank(&self, user_id: &str, year: i32) -> Result<bool, RankError> {
        Ok(self.store.get_rank_count(user_id, year)? == 1)
    }

    pub fn get_is_private_programme(
        &self,
        user_id: &str,
        programme: &str,
        year: i32,
    ) -> Result<Option<bool>, RankError> {
        validate::check_programme(&self.catalog, programme)?;
        self.store.get_is_private_programme(user_id, programme, year)
    }

    pub fn set_is_private(
        &self,
        user_id: &str,
        is_private: bool,
        year: i32,
    ) -> Result<(), RankError> {
        let touched = self.store.set_is_private(user_id, is_private, year, None)?;
        info!(user_id, is_private, year, touched, "privacy updated");
        Ok(())
    }

    pub fn set_is_private_programme(
        &self,
        user_id: &str,
        is_private: bool,
        programme: &str,
        year: i32,
    ) -> Result<(), RankError> {
        let touched = self
            .store
            .set_is_private(user_id, is_private, year, Some(programme))?;
        info!(user_id, is_private, programme, year, touched, "privacy updated");
        Ok(())
    }
}
