//! Suggestion, health and catalog endpoints.
//!
//! Lookups run on the blocking pool: the first lookup may read the catalog
//! file and ranking is CPU-bound.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::catalog::{CatalogEntry, CatalogStatus};
use crate::suggest::{SuggestionResult, SuggestionService};

/// Shared state for all routes
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: SuggestionService,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// `{ "results": [...] }` envelope, also parsed by the remote client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub results: Vec<SuggestionResult>,
}

/// `/api/search` envelope, keeping the field names existing form clients read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "prk_description")]
    pub description: String,
    #[serde(rename = "prk_code")]
    pub code: String,
}

impl From<SuggestionResult> for SearchHit {
    fn from(result: SuggestionResult) -> Self {
        Self {
            description: result.description,
            code: result.code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: CatalogStatus,
}

/// `GET /suggest?q=`
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let results = lookup(state, params).await?;
    Ok(Json(SuggestResponse { results }))
}

/// `GET /api/search?q=`: same lookup, `prk_description`/`prk_code` fields
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = lookup(state, params).await?;
    Ok(Json(SearchResponse {
        results: results.into_iter().map(SearchHit::from).collect(),
    }))
}

async fn lookup(state: AppState, params: SuggestParams) -> Result<Vec<SuggestionResult>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let service = state.service;
    let results = tokio::task::spawn_blocking(move || service.suggest(&query))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(results)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog: state.service.status(),
    })
}

/// `GET /catalog`: the current snapshot, for callers keeping a fallback copy
pub async fn catalog(State(state): State<AppState>) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    let store = state.service.store().clone();
    let snapshot = tokio::task::spawn_blocking(move || store.snapshot())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(snapshot.entries().to_vec()))
}

/// `POST /catalog/reload`
pub async fn reload(State(state): State<AppState>) -> Result<Json<CatalogStatus>, ApiError> {
    let service = state.service.clone();
    let status = tokio::task::spawn_blocking(move || service.reload())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(status))
}
