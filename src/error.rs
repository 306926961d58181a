//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache facade and its host surface.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Namespaced key not present in the provider
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Reads are switched off by the `app.cacheDisabled` setting
    #[error("Caching is disabled: {0}")]
    Disabled(String),

    /// Failure reported by the underlying cache provider
    #[error("Provider failure: {0}")]
    Provider(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CacheError::Disabled(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            CacheError::Provider(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
