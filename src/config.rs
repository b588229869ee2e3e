//! Configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main parser configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ParserConfig {
    pub api_port: u16,

    /// Base URL for the model hub. Overridable so tests can point the
    /// client at a local mock.
    pub registry_base_url: String,

    /// Timeout for the model API lookup
    pub registry_timeout_secs: u64,
    /// Timeout for the config.json lookup
    pub config_timeout_secs: u64,
    /// Timeout for the landing-page fetch
    pub page_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            registry_base_url: default_registry_base_url(),
            registry_timeout_secs: default_registry_timeout(),
            config_timeout_secs: default_config_timeout(),
            page_timeout_secs: default_page_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ParserConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content).context("Failed to parse TOML config")?
        } else {
            Self::default()
        };

        // Environment variable overrides
        if let Ok(port) = std::env::var("HUBPARSE_API_PORT") {
            config.api_port = port.parse().context("Invalid HUBPARSE_API_PORT value")?;
        }
        if let Ok(base) = std::env::var("HUBPARSE_REGISTRY_URL") {
            config.registry_base_url = base;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_port < 1024 {
            anyhow::bail!("API port must be >= 1024 (got {})", self.api_port);
        }

        if !self.registry_base_url.starts_with("http://")
            && !self.registry_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "registry_base_url must start with http:// or https:// (got '{}')",
                self.registry_base_url
            );
        }

        for (name, secs) in [
            ("registry_timeout_secs", self.registry_timeout_secs),
            ("config_timeout_secs", self.config_timeout_secs),
            ("page_timeout_secs", self.page_timeout_secs),
        ] {
            if secs == 0 {
                anyhow::bail!("{} must be > 0", name);
            }
        }

        Ok(())
    }
}

// Default functions
fn default_api_port() -> u16 {
    8000
}
fn default_registry_base_url() -> String {
    "https://huggingface.co".to_string()
}
fn default_registry_timeout() -> u64 {
    10
}
fn default_config_timeout() -> u64 {
    8
}
fn default_page_timeout() -> u64 {
    6
}
fn default_user_agent() -> String {
    format!("hubparse/{}", env!("CARGO_PKG_VERSION"))
}
