//! Filter Engine
//!
//! Pure subsetting of a record sequence by the two user selections
//! (season, landscape). Order is preserved and nothing here can fail:
//! a record with unexpected values simply doesn't match.

use serde::{Deserialize, Serialize};

use crate::record::{PlantRecord, LANDSCAPES, SEASONS};

/// Literal used by the selectors for "no constraint"
pub const ALL: &str = "All";

// ============================================================================
// Selection / FilterState
// ============================================================================

/// One selector's value: no constraint, or an exact value to match
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value,
        }
    }

    /// True for `All` or when `value` is one of `options`
    fn is_one_of(&self, options: &[&str]) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => options.contains(&value.as_str()),
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Selection::parse(&value))
    }
}

/// The two user-selected constraints. Defaults to `All`/`All`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub season: Selection,
    #[serde(default)]
    pub landscape: Selection,
}

/// A selection outside the fixed option sets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown season '{0}' (expected All, {opts})", opts = SEASONS.join(", "))]
    UnknownSeason(String),
    #[error("unknown landscape '{0}' (expected All, {opts})", opts = LANDSCAPES.join(", "))]
    UnknownLandscape(String),
}

impl FilterState {
    pub fn new(season: impl Into<Selection>, landscape: impl Into<Selection>) -> Self {
        Self {
            season: season.into(),
            landscape: landscape.into(),
        }
    }

    /// Check both selections against the selector option sets.
    ///
    /// The engine itself accepts anything; this is for input surfaces that
    /// must only emit values from the fixed sets.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.season.is_one_of(&SEASONS) {
            return Err(FilterError::UnknownSeason(self.season.as_str().to_string()));
        }
        if !self.landscape.is_one_of(&LANDSCAPES) {
            return Err(FilterError::UnknownLandscape(self.landscape.as_str().to_string()));
        }
        Ok(())
    }

    /// Both constraints hold for `record`
    pub fn matches(&self, record: &PlantRecord) -> bool {
        has_season(record, &self.season) && has_landscape(record, &self.landscape)
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// Season membership, uniform over the scalar and list shapes
pub fn has_season(record: &PlantRecord, target: &Selection) -> bool {
    match target {
        Selection::All => true,
        Selection::Only(season) => record.season.contains(season),
    }
}

pub fn has_landscape(record: &PlantRecord, target: &Selection) -> bool {
    match target {
        Selection::All => true,
        Selection::Only(landscape) => record.landscape == *landscape,
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Records matching `state`, in input order
pub fn filter_plants<'a>(records: &'a [PlantRecord], state: &FilterState) -> Vec<&'a PlantRecord> {
    records.iter().filter(|record| state.matches(record)).collect()
}

/// Owned variant of [`filter_plants`]
pub fn filter_plants_owned(records: &[PlantRecord], state: &FilterState) -> Vec<PlantRecord> {
    records
        .iter()
        .filter(|record| state.matches(record))
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
