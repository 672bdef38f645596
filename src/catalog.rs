//! Catalog State and Rendering Surface
//!
//! `Catalog` is the explicit, event-driven holder of what the encyclopedia page
//! shows: the record sequence, whether it is still loading, and the current
//! selections. Every event triggers a full recomputation; there is no
//! incremental filtering.
//!
//! `CatalogView` is what a rendering surface consumes: a loading indicator,
//! an empty-state message, or one card per visible record.

use std::sync::Arc;

use serde::Serialize;

use crate::filter::{filter_plants, FilterState, Selection};
use crate::image::{resolve_image, PLACEHOLDER_IMAGE};
use crate::record::PlantRecord;

pub const LOADING_MESSAGE: &str = "Loading plants...";
pub const EMPTY_MESSAGE: &str = "No plants match your current filters.";

// ============================================================================
// View model
// ============================================================================

/// Everything a card displays for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantCard {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub image_fallback: &'static str,
    /// One tag per season value, in record order
    pub season_tags: Vec<String>,
    pub landscape_tag: String,
}

impl PlantCard {
    pub fn from_record(record: &PlantRecord, image_base: &str) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            latin_name: record.latin_name.clone(),
            description: record.description.clone(),
            image: record
                .img
                .as_deref()
                .map(|img| resolve_image(img, image_base))
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            image_fallback: PLACEHOLDER_IMAGE,
            season_tags: record.season.values().to_vec(),
            landscape_tag: record.landscape.clone(),
        }
    }
}

/// What the rendering surface shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CatalogView {
    Loading { message: &'static str },
    Empty { message: &'static str },
    #[serde(rename = "ok")]
    Cards { rows: usize, data: Vec<PlantCard> },
}

impl CatalogView {
    pub fn len(&self) -> usize {
        match self {
            CatalogView::Cards { rows, .. } => *rows,
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Map (filtered records, loading) onto a view.
///
/// Loading wins over everything; an empty result after loading is the
/// empty-state message, never the loading indicator.
pub fn render(filtered: &[&PlantRecord], loading: bool, image_base: &str) -> CatalogView {
    if loading {
        return CatalogView::Loading { message: LOADING_MESSAGE };
    }
    if filtered.is_empty() {
        return CatalogView::Empty { message: EMPTY_MESSAGE };
    }
    let data: Vec<PlantCard> = filtered
        .iter()
        .map(|record| PlantCard::from_record(record, image_base))
        .collect();
    CatalogView::Cards { rows: data.len(), data }
}

// ============================================================================
// Catalog
// ============================================================================

/// Inputs that change what the catalog shows
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    /// The one-time fetch finished (an empty vector after a failed fetch)
    RecordsLoaded(Vec<PlantRecord>),
    SeasonSelected(Selection),
    LandscapeSelected(Selection),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<Vec<PlantRecord>>,
    loading: bool,
    filter: FilterState,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Catalog waiting for its records
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            loading: true,
            filter: FilterState::default(),
        }
    }

    /// Catalog over records that are available up front (static table)
    pub fn with_records(records: Vec<PlantRecord>) -> Self {
        Self {
            records: Arc::new(records),
            loading: false,
            filter: FilterState::default(),
        }
    }

    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::RecordsLoaded(records) => {
                tracing::debug!("Catalog received {} records", records.len());
                self.records = Arc::new(records);
                self.loading = false;
            }
            CatalogEvent::SeasonSelected(season) => self.filter.season = season,
            CatalogEvent::LandscapeSelected(landscape) => self.filter.landscape = landscape,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    /// Same record sequence and loading flag as `other`, ignoring selections
    pub fn same_snapshot(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.records, &other.records) && self.loading == other.loading
    }

    /// Records passing the current selections
    pub fn visible(&self) -> Vec<&PlantRecord> {
        filter_plants(&self.records, &self.filter)
    }

    pub fn view(&self, image_base: &str) -> CatalogView {
        render(&self.visible(), self.loading, image_base)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PlantRecord> {
        vec![
            PlantRecord::new(1, "Wild Garlic", "/garlic.jpg", "Spring", "Forest")
                .with_latin_name("Allium ursinum"),
            PlantRecord::new(2, "Nettle", "nettle.jpg", ["Spring", "Summer"], "Grassland")
                .with_description("Pick the top leaves."),
        ]
    }

    #[test]
    fn test_new_catalog_is_loading() {
        let catalog = Catalog::new();
        assert!(catalog.is_loading());
        assert_eq!(catalog.view("/"), CatalogView::Loading { message: LOADING_MESSAGE });
    }

    #[test]
    fn test_empty_load_shows_empty_state_not_loading() {
        let mut catalog = Catalog::new();
        catalog.apply(CatalogEvent::RecordsLoaded(Vec::new()));
        assert!(!catalog.is_loading());
        assert_eq!(catalog.view("/"), CatalogView::Empty { message: EMPTY_MESSAGE });
    }

    #[test]
    fn test_selection_events_recompute_view() {
        let mut catalog = Catalog::new();
        catalog.apply(CatalogEvent::RecordsLoaded(records()));
        assert_eq!(catalog.view("/").len(), 2);

        catalog.apply(CatalogEvent::SeasonSelected(Selection::parse("Summer")));
        let visible: Vec<i64> = catalog.visible().iter().map(|r| r.id).collect();
        assert_eq!(visible, vec![2]);

        catalog.apply(CatalogEvent::LandscapeSelected(Selection::parse("Riverside")));
        assert!(catalog.view("/").is_empty());

        catalog.apply(CatalogEvent::SeasonSelected(Selection::All));
        catalog.apply(CatalogEvent::LandscapeSelected(Selection::All));
        assert_eq!(catalog.view("/").len(), 2);
    }

    #[test]
    fn test_records_are_replaced_wholesale() {
        let mut catalog = Catalog::with_records(records());
        catalog.apply(CatalogEvent::RecordsLoaded(vec![PlantRecord::new(
            9, "Sloe", "sloe.jpg", "Autumn", "Grassland",
        )]));
        assert_eq!(catalog.records().len(), 1);
        assert_eq!(catalog.records()[0].id, 9);
    }

    #[test]
    fn test_cards_carry_display_fields() {
        let catalog = Catalog::with_records(records());
        let CatalogView::Cards { data, .. } = catalog.view("/plantapp/") else {
            panic!("expected cards");
        };

        assert_eq!(data[0].image, "/plantapp/garlic.jpg");
        assert_eq!(data[0].latin_name.as_deref(), Some("Allium ursinum"));
        assert_eq!(data[0].season_tags, vec!["Spring"]);
        assert_eq!(data[1].image, "/plantapp/nettle.jpg");
        assert_eq!(data[1].season_tags, vec!["Spring", "Summer"]);
        assert_eq!(data[1].landscape_tag, "Grassland");
        assert_eq!(data[1].image_fallback, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_same_snapshot_tracks_record_replacement() {
        let shared = Catalog::with_records(records());
        let mut filtered = shared.clone();
        filtered.apply(CatalogEvent::SeasonSelected(Selection::parse("Summer")));
        assert!(filtered.same_snapshot(&shared));

        let mut reloaded = shared.clone();
        reloaded.apply(CatalogEvent::RecordsLoaded(records()));
        assert!(!reloaded.same_snapshot(&shared));
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let mut record = PlantRecord::new(3, "Sorrel", "sorrel.jpg", "Summer", "Grassland");
        record.img = None;
        let card = PlantCard::from_record(&record, "/plantapp/");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_odd_season_has_no_tags_but_stays_visible() {
        let mut record = PlantRecord::new(3, "Sorrel", "sorrel.jpg", "Summer", "Grassland");
        record.season = crate::record::Season::Other(serde_json::json!(42));
        let mut catalog = Catalog::with_records(vec![record]);

        let CatalogView::Cards { data, .. } = catalog.view("/") else {
            panic!("expected cards");
        };
        assert!(data[0].season_tags.is_empty());

        catalog.apply(CatalogEvent::SeasonSelected(Selection::parse("Summer")));
        assert!(catalog.view("/").is_empty());
    }

    #[test]
    fn test_view_serializes_with_status_tag() {
        let catalog = Catalog::with_records(records());
        let value = serde_json::to_value(catalog.view("/")).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["rows"], 2);
        assert_eq!(value["data"][0]["name"], "Wild Garlic");

        let value = serde_json::to_value(Catalog::new().view("/")).unwrap();
        assert_eq!(value["status"], "loading");
        assert_eq!(value["message"], LOADING_MESSAGE);
    }
}
