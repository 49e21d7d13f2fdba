//! Custom error types for the HereSphere service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use stash::StashError;
use thiserror::Error;
use tracing::error;

/// Custom error type for the HereSphere service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Stash has no scene with this id
    #[error("Scene not found: {0}")]
    NotFound(String),

    /// Stash could not be queried
    #[error("Stash error: {0}")]
    Upstream(#[source] StashError),
}

impl From<StashError> for ApiError {
    fn from(err: StashError) -> Self {
        match err {
            StashError::SceneNotFound(id) => ApiError::NotFound(id),
            other => ApiError::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(id) => (StatusCode::NOT_FOUND, format!("Scene {} not found", id)),
            ApiError::Upstream(e) => {
                error!("Failed to fetch scene from Stash: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch scene from Stash".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
