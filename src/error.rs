//! Error types for the parse pipeline and API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the metadata pipeline.
///
/// Only `InvalidUrl` is caller-visible. Every downstream hub lookup is
/// best-effort and degrades to absent fields instead of erroring.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("could not extract model ID from URL: {url}")]
    InvalidUrl { url: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type HubResult<T> = Result<T, HubError>;

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            HubError::InvalidUrl { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            HubError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            timestamp: chrono::Utc::now(),
        });

        (status, body).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    timestamp: chrono::DateTime<chrono::Utc>,
}
