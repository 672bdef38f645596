//! Error types for record sources and configuration

use thiserror::Error;

/// Why a record source could not produce records.
///
/// Never escapes `RecordSource::fetch_all`; sources log it and yield nothing.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "api")]
    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Data service returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for SourceError {
    fn from(error: reqwest::Error) -> Self {
        SourceError::Http(Box::new(error))
    }
}

/// Invalid startup configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("unknown PLANT_SOURCE '{0}' (expected static, file or supabase)")]
    UnknownSource(String),

    #[error("{0} must be set when PLANT_SOURCE={1}")]
    Missing(&'static str, &'static str),
}
