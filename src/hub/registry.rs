//! Model registry lookup
//!
//! Queries the hub's model API for a display name and the sibling file
//! listing used by the weight-size estimator.

use super::HubClient;
use serde::Deserialize;

/// One entry in the hub's sibling file listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Filename relative to the repository root
    pub filename: String,
    /// Declared size in bytes, 0 when the hub omits it
    pub size: u64,
}

/// Structured result of the model API lookup
#[derive(Debug, Clone)]
pub struct RegistryRecord {
    /// The record's own reported identifier, falling back to the requested ID
    pub name: String,
    /// Sibling files in listing order
    pub files: Vec<FileEntry>,
}

/// Raw model API response (partial)
#[derive(Debug, Deserialize)]
struct RawModelInfo {
    #[serde(rename = "modelId")]
    model_id: Option<String>,
    #[serde(default)]
    siblings: Vec<RawSibling>,
}

#[derive(Debug, Deserialize)]
struct RawSibling {
    rfilename: Option<String>,
    filename: Option<String>,
    size: Option<u64>,
}

impl HubClient {
    /// Look up the registry record for `model_id`.
    ///
    /// Best-effort: network errors, non-2xx statuses and malformed bodies
    /// all yield `None` rather than aborting the pipeline.
    pub async fn fetch_registry(&self, model_id: &str) -> Option<RegistryRecord> {
        let response = self.get_model_api(model_id).await?;

        if !response.status().is_success() {
            tracing::debug!(
                model_id = %model_id,
                status = %response.status(),
                "Registry lookup returned non-success status"
            );
            crate::metrics::record_lookup_failure("registry");
            return None;
        }

        let raw: RawModelInfo = match response.json().await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(model_id = %model_id, error = %err, "Malformed registry body");
                crate::metrics::record_lookup_failure("registry");
                return None;
            }
        };

        Some(RegistryRecord {
            name: raw.model_id.unwrap_or_else(|| model_id.to_string()),
            files: raw
                .siblings
                .into_iter()
                .filter_map(|sibling| {
                    let filename = sibling.rfilename.or(sibling.filename)?;
                    if filename.is_empty() {
                        return None;
                    }
                    Some(FileEntry {
                        filename,
                        size: sibling.size.unwrap_or(0),
                    })
                })
                .collect(),
        })
    }
}
