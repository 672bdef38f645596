//! Supabase record source
//!
//! Reads every row of a table through PostgREST:
//! `GET {url}/rest/v1/{table}?select=*` with the anon key in both the
//! `apikey` and `Authorization: Bearer` headers.
//!
//! One request per `fetch_all`, no retry and no client-side timeout.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;

use super::RecordSource;
use crate::error::SourceError;
use crate::record::{parse_records, PlantRecord};

pub struct SupabaseSource {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
    label: String,
}

impl SupabaseSource {
    pub fn new(base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
            label: format!("supabase table '{}'", table),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl RecordSource for SupabaseSource {
    fn name(&self) -> &str {
        &self.label
    }

    async fn try_fetch(&self) -> Result<Vec<PlantRecord>, SourceError> {
        tracing::debug!("Fetching {}", self.endpoint());

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status { status: status.as_u16(), body });
        }

        let value: serde_json::Value = response.json().await?;
        Ok(parse_records(value)?)
    }
}
