//! Plant Records and Boundary Normalization
//!
//! A `PlantRecord` is one encyclopedia entry. Data sets in the wild come in two
//! shapes:
//! - legacy: `"season": "Spring"`, no latin name or description
//! - current: `"season": ["Spring", "Summer"]`, `latinName`, `description`
//!
//! Both deserialize into the same struct. `season` keeps its shape as a tagged
//! union so the filter can match on it directly.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Seasons offered by the season selector, in display order
pub const SEASONS: [&str; 4] = ["Spring", "Summer", "Autumn", "Winter"];

/// Landscapes offered by the landscape selector, in display order
pub const LANDSCAPES: [&str; 3] = ["Forest", "Grassland", "Riverside"];

// ============================================================================
// Season
// ============================================================================

/// Season field of a record: one value or an ordered list of values.
///
/// Serialized untagged, so `"Spring"` and `["Spring","Summer"]` both round-trip.
/// Anything else (null, a number, a list with non-string members) lands in
/// `Other`, which has no values and so only passes the "All" selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Season {
    Single(String),
    Multi(Vec<String>),
    Other(serde_json::Value),
}

impl Default for Season {
    fn default() -> Self {
        Season::Other(serde_json::Value::Null)
    }
}

impl Season {
    /// All season values in record order (one element for `Single`)
    pub fn values(&self) -> &[String] {
        match self {
            Season::Single(value) => std::slice::from_ref(value),
            Season::Multi(values) => values,
            Season::Other(_) => &[],
        }
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, target: &str) -> bool {
        match self {
            Season::Single(value) => value == target,
            Season::Multi(values) => values.iter().any(|v| v == target),
            Season::Other(_) => false,
        }
    }

    /// A list shape with no members (the only shape the record invariants reject)
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Season::Multi(values) if values.is_empty())
    }
}

impl From<&str> for Season {
    fn from(value: &str) -> Self {
        Season::Single(value.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for Season {
    fn from(values: [&str; N]) -> Self {
        Season::Multi(values.iter().map(|v| v.to_string()).collect())
    }
}

// ============================================================================
// PlantRecord
// ============================================================================

/// One encyclopedia entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, alias = "latin_name", skip_serializing_if = "Option::is_none")]
    pub latin_name: Option<String>,
    // Older data sets misspell the field
    #[serde(
        default,
        alias = "descripton",
        alias = "desciption",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Nullable in the remote table; cards fall back to the placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default)]
    pub season: Season,
    pub landscape: String,
}

impl PlantRecord {
    pub fn new(
        id: i64,
        name: &str,
        img: &str,
        season: impl Into<Season>,
        landscape: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            latin_name: None,
            description: None,
            img: Some(img.to_string()),
            season: season.into(),
            landscape: landscape.to_string(),
        }
    }

    pub fn with_latin_name(mut self, latin_name: &str) -> Self {
        self.latin_name = Some(latin_name.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

// ============================================================================
// Boundary normalization
// ============================================================================

/// Parse a JSON array of records.
///
/// A non-array document is an error. An odd `season` or a null `img` still
/// parses (see [`Season::Other`]); only an element without a usable id, name
/// or landscape is skipped.
pub fn parse_records(value: serde_json::Value) -> Result<Vec<PlantRecord>, serde_json::Error> {
    let items: Vec<serde_json::Value> = serde_json::from_value(value)?;

    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<PlantRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping malformed plant record at index {}: {}", idx, e),
        }
    }
    Ok(records)
}

/// Enforce record invariants, preserving order.
///
/// Drops blank names, empty season lists and repeated ids (first one wins).
/// Empty optional strings become `None`. Season values are left untouched.
pub fn normalize_records(records: Vec<PlantRecord>) -> Vec<PlantRecord> {
    let mut seen_ids = FxHashSet::default();
    let mut normalized = Vec::with_capacity(records.len());

    for mut record in records {
        if record.name.trim().is_empty() {
            tracing::warn!("Dropping plant record {}: empty name", record.id);
            continue;
        }
        if record.season.is_empty_list() {
            tracing::warn!("Dropping plant record {} ({}): empty season list", record.id, record.name);
            continue;
        }
        if !seen_ids.insert(record.id) {
            tracing::warn!("Dropping plant record {} ({}): duplicate id", record.id, record.name);
            continue;
        }

        record.latin_name = record.latin_name.filter(|s| !s.trim().is_empty());
        record.description = record.description.filter(|s| !s.trim().is_empty());
        record.img = record.img.filter(|s| !s.trim().is_empty());
        normalized.push(record);
    }

    normalized
}

// ============================================================================
// TESTS
// ============================================================================
