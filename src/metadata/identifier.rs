//! Model identifier extraction from hub page URLs

use crate::error::HubError;
use regex::Regex;
use std::sync::LazyLock;

/// Matches the identifier segment after the hub domain marker, anchored at
/// the end of the string: either `owner/name` or a bare `name`.
static MODEL_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"huggingface\.co/([^/]+/[^/]+|[^/]+)$").expect("valid model ID regex")
});

/// Extract the canonical model identifier from a model page URL.
///
/// The input is trimmed but otherwise not normalized: trailing slashes or
/// extra path segments simply fail the anchored match.
pub fn extract_model_id(url: &str) -> Result<String, HubError> {
    let url = url.trim();
    MODEL_ID_RE
        .captures(url)
        .map(|captures| captures[1].to_string())
        .ok_or_else(|| HubError::InvalidUrl {
            url: url.to_string(),
        })
}
