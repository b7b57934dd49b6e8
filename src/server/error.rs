//! API error types with structured JSON responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::SuggestError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::CatalogUnavailable(detail) => {
                log::warn!("Suggestion lookup failed: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CATALOG_UNAVAILABLE",
                    "The drug catalog is currently unavailable".to_string(),
                )
            }
            ApiError::InvalidQuery(detail) => (StatusCode::BAD_REQUEST, "INVALID_QUERY", detail),
            ApiError::Internal(detail) => {
                log::error!("API internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<SuggestError> for ApiError {
    fn from(err: SuggestError) -> Self {
        match err {
            SuggestError::InvalidQuery(detail) => ApiError::InvalidQuery(detail),
            SuggestError::Remote(detail) => ApiError::Internal(detail),
            unavailable @ SuggestError::CatalogUnavailable { .. } => {
                ApiError::CatalogUnavailable(unavailable.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn catalog_unavailable_returns_503() {
        let err: ApiError = SuggestError::catalog_unavailable("prk.json", "No such file").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "CATALOG_UNAVAILABLE");
        // File paths stay in the server log
        assert!(!json["error"]["message"].as_str().unwrap().contains("prk.json"));
    }

    #[tokio::test]
    async fn invalid_query_returns_400() {
        let err: ApiError = SuggestError::InvalidQuery("too long".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "INVALID_QUERY");
        assert_eq!(json["error"]["message"], "too long");
    }

    #[tokio::test]
    async fn internal_returns_500_and_hides_details() {
        let response = ApiError::Internal("worker panicked".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }
}
