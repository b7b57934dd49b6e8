//! Suggestion API router.
//!
//! Middleware stack (outermost → innermost): CORS → request timeout.

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use super::handlers::{self, AppState};
use crate::config::ServerConfig;
use crate::suggest::SuggestionService;

/// Build the suggestion router.
///
/// `/api/search` runs the same lookup as `/suggest` but answers with the
/// `prk_description`/`prk_code` field names existing form clients read.
pub fn suggest_router(service: SuggestionService, config: &ServerConfig) -> Router {
    let state = AppState { service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/suggest", get(handlers::suggest))
        .route("/api/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .route("/catalog", get(handlers::catalog))
        .route("/catalog/reload", post(handlers::reload))
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors)
}
