// Axum API Server Module
//
// Purpose: JSON surface over the plant catalog. Each request carries its own
// season/landscape selection; the record snapshot is shared and replaced
// wholesale once the one-time fetch completes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::catalog::{Catalog, CatalogEvent, PlantCard};
use crate::filter::{FilterState, Selection, ALL};
use crate::record::{PlantRecord, LANDSCAPES, SEASONS};
use crate::source::RecordSource;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Shared records + loading flag; the filter inside is always All/All
    pub catalog: Arc<RwLock<Catalog>>,
    /// Rendered views keyed by filter state, valid for the current snapshot only
    pub cache: Cache<String, serde_json::Value>,
    pub image_base: String,
}

impl AppState {
    /// State that is still waiting for its records
    pub fn new(image_base: &str) -> Self {
        Self::from_catalog(Catalog::new(), image_base)
    }

    /// State with records available immediately
    pub fn with_records(records: Vec<PlantRecord>, image_base: &str) -> Self {
        Self::from_catalog(Catalog::with_records(records), image_base)
    }

    fn from_catalog(catalog: Catalog, image_base: &str) -> Self {
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            cache,
            image_base: image_base.to_string(),
        }
    }

    /// Replace the record snapshot and drop every cached view
    pub async fn load(&self, records: Vec<PlantRecord>) {
        let mut catalog = self.catalog.write().await;
        catalog.apply(CatalogEvent::RecordsLoaded(records));
        self.cache.invalidate_all();
    }

    /// Fetch from `source` exactly once in the background.
    ///
    /// No retry or timeout; a failed source loads zero records.
    pub fn spawn_fetch(&self, source: Box<dyn RecordSource>) -> tokio::task::JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move {
            tracing::info!("Fetching plant records from {}...", source.name());
            let records = source.fetch_all().await;
            state.load(records).await;
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Plant endpoints (JSON API)
        .route("/api/plants", get(list_plants))
        .route("/api/plants/:id", get(get_plant))

        // Selector options
        .route("/api/filters", get(get_filters))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "loading": catalog.is_loading(),
        "records": catalog.records().len(),
    }))
}

/// Query parameters of `/api/plants`; absent means "All"
#[derive(Debug, Default, Deserialize)]
pub struct PlantQuery {
    pub season: Option<String>,
    pub landscape: Option<String>,
}

impl PlantQuery {
    fn filter_state(&self) -> FilterState {
        FilterState::new(
            self.season.as_deref().unwrap_or(ALL),
            self.landscape.as_deref().unwrap_or(ALL),
        )
    }
}

async fn list_plants(
    State(state): State<AppState>,
    Query(query): Query<PlantQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let filters = query.filter_state();
    filters
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let cache_key = format!("plants:{:?}", filters);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    // Cheap clone: records sit behind an Arc
    let mut catalog = state.catalog.read().await.clone();
    catalog.apply(CatalogEvent::SeasonSelected(filters.season.clone()));
    catalog.apply(CatalogEvent::LandscapeSelected(filters.landscape.clone()));

    let view = catalog.view(&state.image_base);
    tracing::debug!(
        "Filter {:?} matched {} of {} records",
        filters,
        view.len(),
        catalog.records().len()
    );

    let result = serde_json::to_value(&view).map_err(|e| AppError::Internal(e.to_string()))?;

    // Only cache if the snapshot we rendered is still current; the read guard
    // keeps `load` (and its invalidation) out until the insert is done
    let current = state.catalog.read().await;
    if !catalog.is_loading() && current.same_snapshot(&catalog) {
        state.cache.insert(cache_key, result.clone()).await;
    }
    drop(current);

    Ok(Json(result))
}

async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlantCard>, AppError> {
    let catalog = state.catalog.read().await;
    catalog
        .records()
        .iter()
        .find(|record| record.id == id)
        .map(|record| Json(PlantCard::from_record(record, &state.image_base)))
        .ok_or_else(|| AppError::NotFound(format!("Plant {} not found", id)))
}

async fn get_filters() -> impl IntoResponse {
    fn options(all_label: &str, values: &[&str]) -> Vec<serde_json::Value> {
        std::iter::once(serde_json::json!({ "value": ALL, "label": all_label }))
            .chain(values.iter().map(|v| serde_json::json!({ "value": v, "label": v })))
            .collect()
    }

    Json(serde_json::json!({
        "season": options("All Seasons", &SEASONS),
        "landscape": options("All Landscapes", &LANDSCAPES),
        "default": FilterState {
            season: Selection::All,
            landscape: Selection::All,
        },
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
