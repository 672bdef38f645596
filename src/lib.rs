//! Plant Encyclopedia
//!
//! A foraging guide's plant list, filterable by season and landscape.
//!
//! - `record/`: plant records in both historic shapes, boundary normalization
//! - `filter/`: the filter engine (pure, order-preserving)
//! - `image/`: image reference resolution for cards
//! - `catalog/`: event-driven catalog state and the view a page renders
//! - `source/`: record sources (static table, JSON file, Supabase)
//! - `api_server/`: JSON HTTP surface (feature `api`)

pub mod record;
pub mod filter;
pub mod image;
pub mod catalog;
pub mod error;
pub mod source;

#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use record::{PlantRecord, Season, SEASONS, LANDSCAPES};
pub use filter::{filter_plants, filter_plants_owned, has_season, FilterState, Selection};
pub use image::{resolve_image, PLACEHOLDER_IMAGE};
pub use catalog::{render, Catalog, CatalogEvent, CatalogView, PlantCard};
pub use error::{ConfigError, SourceError};
pub use source::{JsonFileSource, RecordSource, StaticSource};

#[cfg(feature = "api")]
pub use source::SupabaseSource;
#[cfg(feature = "api")]
pub use config::AppConfig;
#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
