//! API request handlers

use super::models::{HealthResponse, ParseRequest};
use super::routes::AppState;
use crate::error::{HubError, HubResult};
use crate::metadata::{ModelMetadata, inspect_model};
use axum::{Json, extract::State, http::StatusCode};

/// GET /health - Service health check
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now(),
        }),
    )
}

/// GET /metrics - Prometheus metrics
pub async fn metrics(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

/// POST /parse - Run the metadata pipeline for a model page URL
///
/// Returns 400 only when no model ID can be extracted from the URL; every
/// downstream lookup failure degrades to absent fields in a 200 response.
pub async fn parse_model(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> HubResult<Json<ModelMetadata>> {
    crate::metrics::record_parse_request();

    let metadata = match inspect_model(&state.hub, &req.url).await {
        Ok(metadata) => metadata,
        Err(err) => {
            if matches!(err, HubError::InvalidUrl { .. }) {
                crate::metrics::record_invalid_url();
                tracing::warn!(url = %req.url, "Rejected unparseable model URL");
            }
            return Err(err);
        }
    };

    tracing::info!(
        model_id = %metadata.model_id,
        parameter_count = ?metadata.parameter_count,
        "Parsed model metadata"
    );

    Ok(Json(metadata))
}
