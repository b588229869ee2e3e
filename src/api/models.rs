//! API request and response models

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Request to parse a model page URL
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseRequest {
    pub url: String,
}
