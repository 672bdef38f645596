//! JSON file record source
//!
//! Reads a JSON array of plant records in either the legacy or current shape.
//! With the `api` feature the read goes through `tokio::fs`; without it the
//! read blocks the calling task.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::RecordSource;
use crate::error::SourceError;
use crate::record::{parse_records, PlantRecord};

pub struct JsonFileSource {
    path: PathBuf,
    label: String,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = format!("file {}", path.display());
        Self { path, label }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.label
    }

    async fn try_fetch(&self) -> Result<Vec<PlantRecord>, SourceError> {
        #[cfg(feature = "api")]
        let contents = tokio::fs::read_to_string(&self.path).await?;
        #[cfg(not(feature = "api"))]
        let contents = std::fs::read_to_string(&self.path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        Ok(parse_records(value)?)
    }
}
