//! Record Sources
//!
//! A record source yields the raw plant list once per call. Failures never
//! reach the caller: they are logged and the source yields no records, which
//! the page then shows as "no matches".
//!
//! Sources:
//! - `StaticSource`: literal table compiled into the binary (or caller-supplied)
//! - `JsonFileSource`: a JSON array of records on disk
//! - `SupabaseSource`: the `plants` table over Supabase's REST interface

use async_trait::async_trait;

use crate::error::SourceError;
use crate::record::{normalize_records, PlantRecord};

pub mod json_file;
pub mod static_table;
#[cfg(feature = "api")]
pub mod supabase;

pub use json_file::JsonFileSource;
pub use static_table::StaticSource;
#[cfg(feature = "api")]
pub use supabase::SupabaseSource;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &str;

    /// Raw records, before boundary normalization
    async fn try_fetch(&self) -> Result<Vec<PlantRecord>, SourceError>;

    /// Normalized records; empty (with a warning) when the source fails
    async fn fetch_all(&self) -> Vec<PlantRecord> {
        match self.try_fetch().await {
            Ok(records) => {
                let fetched = records.len();
                let records = normalize_records(records);
                tracing::info!(
                    "Loaded {} plant records from {} ({} dropped)",
                    records.len(),
                    self.name(),
                    fetched - records.len()
                );
                records
            }
            Err(e) => {
                tracing::warn!("Failed to load plant records from {}: {}", self.name(), e);
                Vec::new()
            }
        }
    }
}
