//! Hub client module
//!
//! Provides functionality for:
//! - Looking up a model's registry record (name + sibling file listing)
//! - Fetching and leniently parsing a model's config.json
//! - Fetching the model's HTML landing page for the text fallback
//!
//! Every lookup here is best-effort: failures are logged and counted, never
//! propagated. Each outbound call carries its own timeout and no retries.

pub mod config;
pub mod registry;

pub use config::ConfigRecord;
pub use registry::{FileEntry, RegistryRecord};

use crate::config::ParserConfig;
use crate::error::HubResult;
use anyhow::Context;
use std::time::Duration;

/// Shared client for the model hub's public endpoints.
///
/// Immutable after construction; one instance serves all requests.
#[derive(Debug, Clone)]
pub struct HubClient {
    http: reqwest::Client,
    base_url: String,
    registry_timeout: Duration,
    config_timeout: Duration,
    page_timeout: Duration,
}

impl HubClient {
    pub fn new(config: &ParserConfig) -> HubResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.registry_base_url.trim_end_matches('/').to_string(),
            registry_timeout: Duration::from_secs(config.registry_timeout_secs),
            config_timeout: Duration::from_secs(config.config_timeout_secs),
            page_timeout: Duration::from_secs(config.page_timeout_secs),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn registry_timeout(&self) -> Duration {
        self.registry_timeout
    }

    pub(crate) fn config_timeout(&self) -> Duration {
        self.config_timeout
    }

    fn model_api_url(&self, model_id: &str) -> String {
        format!("{}/api/models/{}", self.base_url, model_id)
    }

    pub(crate) fn config_url(&self, model_id: &str) -> String {
        format!("{}/{}/raw/main/config.json", self.base_url, model_id)
    }

    fn page_url(&self, model_id: &str) -> String {
        format!("{}/{}", self.base_url, model_id)
    }

    /// Fetch the raw model API record for `model_id`.
    ///
    /// Used by the registry lookup; split out so the URL construction and
    /// transport handling stay in one place.
    pub(crate) async fn get_model_api(&self, model_id: &str) -> Option<reqwest::Response> {
        let url = self.model_api_url(model_id);
        match self
            .http
            .get(&url)
            .timeout(self.registry_timeout)
            .send()
            .await
        {
            Ok(response) => Some(response),
            Err(err) => {
                tracing::debug!(model_id = %model_id, error = %err, "Registry request failed");
                crate::metrics::record_lookup_failure("registry");
                None
            }
        }
    }

    /// Fetch the model's landing page as text.
    ///
    /// Returns the body only on HTTP 200; any other outcome yields `None`.
    pub async fn fetch_page(&self, model_id: &str) -> Option<String> {
        let url = self.page_url(model_id);
        let response = match self.http.get(&url).timeout(self.page_timeout).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(model_id = %model_id, error = %err, "Page request failed");
                crate::metrics::record_lookup_failure("page");
                return None;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!(
                model_id = %model_id,
                status = %response.status(),
                "Page fetch returned non-200"
            );
            crate::metrics::record_lookup_failure("page");
            return None;
        }

        response.text().await.ok()
    }
}
