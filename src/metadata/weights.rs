//! Weight-size parameter estimation
//!
//! Inspects the registry file listing for weight files, sums their byte
//! sizes, and infers quantization from filename tokens.

use crate::hub::FileEntry;
use serde::{Deserialize, Serialize};

/// Weight storage precision inferred from filename tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantization {
    #[serde(rename = "4-bit")]
    FourBit,
    #[serde(rename = "8-bit")]
    EightBit,
}

impl std::fmt::Display for Quantization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FourBit => write!(f, "4-bit"),
            Self::EightBit => write!(f, "8-bit"),
        }
    }
}

/// Result of scanning the file listing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightEstimate {
    /// Parameter count in billions, absent when no weight bytes were found
    pub parameter_estimate: Option<f64>,
    /// First quantization classification across the listing, in order
    pub quantization: Option<Quantization>,
}

const WEIGHT_EXTENSIONS: [&str; 6] = [".pt", ".bin", ".safetensors", ".gguf", ".pth", ".ckpt"];
const FOUR_BIT_TOKENS: [&str; 2] = ["q4", "4bit"];
const EIGHT_BIT_TOKENS: [&str; 4] = ["q8", "8bit", "ggml", "gguf"];

/// Scan the file listing, accumulating weight-file bytes and classifying
/// quantization from filename tokens.
///
/// The byte-size estimate assumes 4 bytes per parameter (fp32) even though
/// matched files may be stored at lower precision; it is a fallback
/// approximation only. Quantization is first-match-wins in listing order.
pub fn estimate_from_files(files: &[FileEntry]) -> WeightEstimate {
    let mut total_bytes: u64 = 0;
    let mut quantization = None;

    for entry in files {
        if !is_weight_file(&entry.filename) {
            continue;
        }
        // Declared sizes are remote input; saturate rather than overflow.
        total_bytes = total_bytes.saturating_add(entry.size);
        if quantization.is_none() {
            quantization = detect_quantization(&entry.filename);
        }
    }

    WeightEstimate {
        parameter_estimate: (total_bytes > 0).then(|| total_bytes as f64 / 4.0 / 1e9),
        quantization,
    }
}

fn is_weight_file(filename: &str) -> bool {
    WEIGHT_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

fn detect_quantization(filename: &str) -> Option<Quantization> {
    let lower = filename.to_lowercase();
    if FOUR_BIT_TOKENS.iter().any(|token| lower.contains(token)) {
        Some(Quantization::FourBit)
    } else if EIGHT_BIT_TOKENS.iter().any(|token| lower.contains(token)) {
        Some(Quantization::EightBit)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(filename: &str, size: u64) -> FileEntry {
        FileEntry {
            filename: filename.to_string(),
            size,
        }
    }

    #[test]
    fn four_gigabyte_q4_gguf_estimates_one_billion() {
        let files = vec![entry("model-q4.gguf", 4_000_000_000)];
        let estimate = estimate_from_files(&files);
        assert_eq!(estimate.parameter_estimate, Some(1.0));
        assert_eq!(estimate.quantization, Some(Quantization::FourBit));
    }

    #[test]
    fn non_weight_files_are_ignored() {
        let files = vec![
            entry("config.json", 1_000),
            entry("README.md", 5_000),
            entry("tokenizer.json", 2_000_000),
        ];
        assert_eq!(estimate_from_files(&files), WeightEstimate::default());
    }

    #[test]
    fn sizes_accumulate_across_sharded_weights() {
        let files = vec![
            entry("model-00001-of-00002.safetensors", 2_000_000_000),
            entry("model-00002-of-00002.safetensors", 2_000_000_000),
        ];
        let estimate = estimate_from_files(&files);
        assert_eq!(estimate.parameter_estimate, Some(1.0));
        assert_eq!(estimate.quantization, None);
    }

    #[test]
    fn oversized_declared_sizes_saturate_instead_of_overflowing() {
        let files = vec![
            entry("model-00001-of-00002.bin", u64::MAX),
            entry("model-00002-of-00002.bin", 2),
        ];
        let estimate = estimate_from_files(&files);
        assert_eq!(
            estimate.parameter_estimate,
            Some(u64::MAX as f64 / 4.0 / 1e9)
        );
    }

    #[test]
    fn first_classification_wins_in_listing_order() {
        let files = vec![
            entry("model-q8.bin", 1_000),
            entry("model-q4.bin", 1_000),
        ];
        let estimate = estimate_from_files(&files);
        assert_eq!(estimate.quantization, Some(Quantization::EightBit));
    }

    #[test]
    fn quantization_tokens_match_case_insensitively() {
        let files = vec![entry("llama-2-7b.Q4_K_M.gguf", 0)];
        let estimate = estimate_from_files(&files);
        assert_eq!(estimate.quantization, Some(Quantization::FourBit));
        // Zero declared size means no byte-based estimate.
        assert_eq!(estimate.parameter_estimate, None);
    }

    #[test]
    fn plain_gguf_classifies_as_eight_bit() {
        let files = vec![entry("model.gguf", 8_000_000_000)];
        let estimate = estimate_from_files(&files);
        assert_eq!(estimate.quantization, Some(Quantization::EightBit));
        assert_eq!(estimate.parameter_estimate, Some(2.0));
    }

    #[test]
    fn fourbit_token_without_q_prefix_is_detected() {
        let files = vec![entry("model-4bit.safetensors", 100)];
        assert_eq!(
            estimate_from_files(&files).quantization,
            Some(Quantization::FourBit)
        );
    }

    #[test]
    fn uppercase_extension_does_not_match() {
        // Extension matching is case-sensitive, by contract.
        let files = vec![entry("model.BIN", 1_000)];
        assert_eq!(estimate_from_files(&files), WeightEstimate::default());
    }

    #[test]
    fn quantization_serializes_as_hyphenated_label() {
        assert_eq!(
            serde_json::to_string(&Quantization::FourBit).unwrap(),
            "\"4-bit\""
        );
        assert_eq!(
            serde_json::to_string(&Quantization::EightBit).unwrap(),
            "\"8-bit\""
        );
    }
}
