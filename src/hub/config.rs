//! Model config.json lookup
//!
//! Fetches a model's raw config.json and derives architecture, context
//! length, and a rough parameter-count estimate from the transformer
//! dimensions. Parsing is lenient at field granularity: a missing or
//! non-numeric field degrades only that field, not the whole record.

use super::HubClient;
use serde_json::Value;

/// Fields extracted from a model's config.json.
///
/// The dimensions feed the parameter estimate only; they are never
/// returned to callers directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigRecord {
    /// First entry of the `architectures` list
    pub architecture: Option<String>,
    /// `max_position_embeddings`, else `n_positions`
    pub max_context_length: Option<u64>,
    /// Derived from hidden size and layer count, in billions
    pub parameter_estimate: Option<f64>,
}

impl HubClient {
    /// Fetch and parse config.json for `model_id`.
    ///
    /// Any transport failure, non-200 status or unparseable body yields an
    /// empty record with all fields absent.
    pub async fn fetch_config(&self, model_id: &str) -> ConfigRecord {
        let url = self.config_url(model_id);
        let response = match self.http().get(&url).timeout(self.config_timeout()).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(model_id = %model_id, error = %err, "Config request failed");
                crate::metrics::record_lookup_failure("config");
                return ConfigRecord::default();
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!(
                model_id = %model_id,
                status = %response.status(),
                "Config fetch returned non-200"
            );
            crate::metrics::record_lookup_failure("config");
            return ConfigRecord::default();
        }

        match response.json::<Value>().await {
            Ok(body) => parse_config(&body),
            Err(err) => {
                tracing::debug!(model_id = %model_id, error = %err, "Malformed config.json");
                crate::metrics::record_lookup_failure("config");
                ConfigRecord::default()
            }
        }
    }
}

/// Extract the record fields from a parsed config.json value.
///
/// The parameter estimate is a rough approximation for transformer-style
/// architectures (attention + MLP linear layers come to about 12 * hidden^2
/// per layer); it is only computed when both dimensions are present and
/// positive.
fn parse_config(config: &Value) -> ConfigRecord {
    let architecture = config
        .get("architectures")
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .and_then(Value::as_str)
        .map(str::to_string);

    let max_context_length = as_positive_int(config.get("max_position_embeddings"))
        .or_else(|| as_positive_int(config.get("n_positions")));

    let hidden_size = as_positive_int(config.get("hidden_size"));
    let num_layers = as_positive_int(config.get("num_hidden_layers"))
        .or_else(|| as_positive_int(config.get("n_layer")));

    let parameter_estimate = match (hidden_size, num_layers) {
        (Some(hidden), Some(layers)) => {
            Some(12.0 * (hidden as f64) * (hidden as f64) * (layers as f64) / 1e9)
        }
        _ => None,
    };

    ConfigRecord {
        architecture,
        max_context_length,
        parameter_estimate,
    }
}

/// Coerce a JSON value to a positive integer.
///
/// Accepts integers, floats (truncated) and numeric strings; anything else,
/// including zero, yields `None` so the caller's fallback chain applies.
fn as_positive_int(value: Option<&Value>) -> Option<u64> {
    let value = value?;
    let n = if let Some(n) = value.as_u64() {
        n
    } else if let Some(f) = value.as_f64() {
        if !f.is_finite() || f < 0.0 {
            return None;
        }
        f as u64
    } else if let Some(s) = value.as_str() {
        s.trim().parse().ok()?
    } else {
        return None;
    };

    (n > 0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_config_yields_all_fields() {
        let body = json!({
            "architectures": ["LlamaForCausalLM"],
            "max_position_embeddings": 4096,
            "hidden_size": 4096,
            "num_hidden_layers": 32
        });

        let record = parse_config(&body);
        assert_eq!(record.architecture.as_deref(), Some("LlamaForCausalLM"));
        assert_eq!(record.max_context_length, Some(4096));

        let expected = 12.0 * 4096.0 * 4096.0 * 32.0 / 1e9;
        let estimate = record.parameter_estimate.unwrap();
        assert!((estimate - expected).abs() < 1e-9);
    }

    #[test]
    fn alternate_field_names_are_used_as_fallbacks() {
        let body = json!({
            "n_positions": 1024,
            "hidden_size": 768,
            "n_layer": 12
        });

        let record = parse_config(&body);
        assert_eq!(record.max_context_length, Some(1024));
        assert!(record.parameter_estimate.is_some());
    }

    #[test]
    fn primary_context_field_wins_over_fallback() {
        let body = json!({
            "max_position_embeddings": 2048,
            "n_positions": 1024
        });
        assert_eq!(parse_config(&body).max_context_length, Some(2048));
    }

    #[test]
    fn non_numeric_dimension_degrades_only_the_estimate() {
        let body = json!({
            "architectures": ["BertModel"],
            "max_position_embeddings": 512,
            "hidden_size": "not-a-number",
            "num_hidden_layers": 6
        });

        let record = parse_config(&body);
        assert_eq!(record.architecture.as_deref(), Some("BertModel"));
        assert_eq!(record.max_context_length, Some(512));
        assert_eq!(record.parameter_estimate, None);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let body = json!({
            "hidden_size": "4096",
            "num_hidden_layers": "32"
        });
        assert!(parse_config(&body).parameter_estimate.is_some());
    }

    #[test]
    fn estimate_requires_both_dimensions() {
        let body = json!({"hidden_size": 4096});
        assert_eq!(parse_config(&body).parameter_estimate, None);

        let body = json!({"num_hidden_layers": 32});
        assert_eq!(parse_config(&body).parameter_estimate, None);
    }

    #[test]
    fn zero_dimensions_are_treated_as_absent() {
        let body = json!({
            "hidden_size": 0,
            "num_hidden_layers": 32,
            "max_position_embeddings": 0
        });
        let record = parse_config(&body);
        assert_eq!(record.parameter_estimate, None);
        assert_eq!(record.max_context_length, None);
    }

    #[test]
    fn empty_architectures_list_is_absent() {
        let body = json!({"architectures": []});
        assert_eq!(parse_config(&body).architecture, None);
    }

    #[test]
    fn float_context_length_is_truncated_to_integer() {
        let body = json!({"max_position_embeddings": 2048.0});
        assert_eq!(parse_config(&body).max_context_length, Some(2048));
    }
}
