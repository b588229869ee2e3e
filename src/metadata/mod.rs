//! Metadata inference pipeline
//!
//! Chains four best-effort extractors over a model identifier:
//! - Registry lookup (display name + file listing)
//! - config.json lookup (architecture, context length, dimension estimate)
//! - Weight-size estimation over the file listing
//! - Landing-page text scan as a last resort
//!
//! Results merge under a fixed precedence; only identifier extraction can
//! fail, everything downstream degrades to absent fields.

pub mod identifier;
pub mod scrape;
pub mod weights;

pub use identifier::extract_model_id;
pub use weights::{Quantization, WeightEstimate, estimate_from_files};

use crate::error::HubError;
use crate::hub::HubClient;
use serde::{Deserialize, Serialize};

/// Merged metadata record returned to callers.
///
/// Fields no extractor could fill serialize as explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    /// Canonical `owner/name` (or bare `name`) identifier
    pub model_id: String,
    /// Registry-reported name, defaulting to the identifier
    pub name: String,
    pub architecture: Option<String>,
    /// Parameter count in billions, rounded to 3 decimal places
    pub parameter_count: Option<f64>,
    pub quantization: Option<Quantization>,
    pub max_context_length: Option<u64>,
}

/// Run the full inference pipeline for a model page URL.
///
/// Lookups run strictly in sequence: the config result decides whether the
/// weight-size estimate is used, and the page scan only happens when both
/// earlier estimates are absent.
pub async fn inspect_model(client: &HubClient, url: &str) -> Result<ModelMetadata, HubError> {
    let model_id = extract_model_id(url)?;
    tracing::debug!(model_id = %model_id, "Extracted model identifier");

    let registry = client.fetch_registry(&model_id).await;
    let config = client.fetch_config(&model_id).await;

    let weight_estimate = registry
        .as_ref()
        .map(|record| estimate_from_files(&record.files))
        .unwrap_or_default();

    // Config-derived counts take precedence over the byte-size estimate.
    let mut parameter_count = config
        .parameter_estimate
        .or(weight_estimate.parameter_estimate);

    if parameter_count.is_none() {
        parameter_count = match client.fetch_page(&model_id).await {
            Some(page) => scrape::scan_parameter_claim(&page),
            None => None,
        };
    }

    let name = registry
        .as_ref()
        .map(|record| record.name.clone())
        .unwrap_or_else(|| model_id.clone());

    Ok(ModelMetadata {
        model_id,
        name,
        architecture: config.architecture,
        parameter_count: parameter_count
            .filter(|count| *count > 0.0)
            .map(round_to_millis),
        quantization: weight_estimate.quantization,
        max_context_length: config.max_context_length,
    })
}

/// Round to three decimal places for the wire format
fn round_to_millis(count: f64) -> f64 {
    (count * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_keeps_three_decimals() {
        assert_eq!(round_to_millis(6.442450944), 6.442);
        assert_eq!(round_to_millis(1.0), 1.0);
        assert_eq!(round_to_millis(0.0005), 0.001);
    }

    #[test]
    fn metadata_serializes_camel_case_with_explicit_nulls() {
        let metadata = ModelMetadata {
            model_id: "org/model".to_string(),
            name: "org/model".to_string(),
            architecture: None,
            parameter_count: Some(7.0),
            quantization: Some(Quantization::FourBit),
            max_context_length: None,
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["modelId"], "org/model");
        assert_eq!(value["parameterCount"], 7.0);
        assert_eq!(value["quantization"], "4-bit");
        assert!(value["architecture"].is_null());
        assert!(value["maxContextLength"].is_null());
    }
}
