// src/server/routes.rs
//! Axum router configuration for the cookbook server
//!
//! Also owns the error response format: every failure leaves the server as
//! an RFC 7807 problem document.

use crate::server::SharedState;
use crate::server::handlers::recipes;
use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, warn};

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/health", get(health_check))
        // Paginated listing is the primary contract for the collection
        .route("/recipes", get(recipes::list_recipes))
        .route("/recipes/all", get(recipes::list_all_recipes))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Error response format (RFC 7807)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Error type URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable title
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Detailed description
    pub detail: String,
}

impl ProblemDetails {
    pub fn new(error_type: &str, title: &str, status: u16, detail: &str) -> Self {
        Self {
            error_type: format!("urn:cookbook:error:{}", error_type),
            title: title.to_string(),
            status,
            detail: detail.to_string(),
        }
    }
}

/// Error returned by handlers
#[derive(Debug)]
pub struct ApiError(ProblemDetails);

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn internal(detail: &str) -> Self {
        ApiError(ProblemDetails::new("internal", "Internal Error", 500, detail))
    }

    pub fn storage_unavailable(detail: &str) -> Self {
        ApiError(ProblemDetails::new(
            "storage_unavailable",
            "Storage Unavailable",
            503,
            detail,
        ))
    }

    pub fn unprocessable(detail: &str) -> Self {
        ApiError(ProblemDetails::new(
            "validation",
            "Unprocessable Entity",
            422,
            detail,
        ))
    }

    pub fn problem(&self) -> &ProblemDetails {
        &self.0
    }
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        let detail = err.to_string();
        match err {
            crate::Error::StorageUnavailable(_) => {
                error!("Recipe store unavailable: {}", detail);
                ApiError::storage_unavailable(&detail)
            }
            crate::Error::ValidationViolation(_) => ApiError::unprocessable(&detail),
            _ => {
                error!("Request failed: {}", detail);
                ApiError::internal(&detail)
            }
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!("Blocking task failed: {}", err);
        ApiError::internal(&format!("Task join error: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [("content-type", "application/problem+json")],
            Json(self.0),
        )
            .into_response()
    }
}
