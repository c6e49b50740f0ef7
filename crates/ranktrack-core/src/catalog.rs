//! Programme capacity catalog.
//!
//! Two-level ordered mapping: programme id -> year -> places. Lookups for an
//! unknown programme or year return `None`; callers turn that into
//! [`RankError::InvalidArgument`](crate::errors::RankError).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Published capacities of one programme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programme {
    /// Admission year -> number of places.
    #[serde(default)]
    pub places: BTreeMap<i32, i32>,
}

impl Programme {
    pub fn new(places: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            places: places.into_iter().collect(),
        }
    }

    pub fn places_for(&self, year: i32) -> Option<i32> {
        self.places.get(&year).copied()
    }
}

/// Read-only catalog of programmes keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgrammeCatalog {
    programmes: BTreeMap<String, Programme>,
}

impl ProgrammeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with_programme(
        mut self,
        id: impl Into<String>,
        places: impl IntoIterator<Item = (i32, i32)>,
    ) -> Self {
        self.insert(id, Programme::new(places));
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, programme: Programme) {
        self.programmes.insert(id.into(), programme);
    }

    pub fn contains(&self, programme: &str) -> bool {
        self.programmes.contains_key(programme)
    }

    pub fn programme(&self, programme: &str) -> Option<&Programme> {
        self.programmes.get(programme)
    }

    /// Places for `programme` in `year`, if both are published.
    pub fn places(&self, programme: &str, year: i32) -> Option<i32> {
        self.programme(programme)?.places_for(year)
    }

    /// True when `rank` falls inside the published capacity.
    ///
    /// This is the only place the auto-offer band is computed; both the add
    /// and the offer-date update paths go through it. Unknown programme or
    /// year never qualifies.
    pub fn qualifies_for_auto_offer(&self, rank: i32, programme: &str, year: i32) -> bool {
        self.places(programme, year)
            .is_some_and(|places| rank <= places)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Programme)> {
        self.programmes.iter().map(|(id, p)| (id.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.programmes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programmes.is_empty()
    }
}
