//! hubparse - best-effort model metadata extraction
//!
//! A lightweight Rust service that derives a model identifier from a
//! HuggingFace model page URL and assembles a best-effort metadata record
//! (architecture, parameter count, quantization, context length) from the
//! hub API, the model's config.json, weight-file sizes, and the landing
//! page text.

pub mod api;
pub mod config;
pub mod error;
pub mod hub;
pub mod metadata;
pub mod metrics;

pub use config::ParserConfig;
pub use error::{HubError, HubResult};
pub use hub::{ConfigRecord, FileEntry, HubClient, RegistryRecord};
pub use metadata::{ModelMetadata, Quantization, extract_model_id, inspect_model};
