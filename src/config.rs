//! Configuration loaded from `karirkita.toml`.
//!
//! [`KarirConfig`] holds the configurable parameters; values missing from
//! the file use sensible defaults. The `GEMINI_API_KEY` environment variable
//! takes precedence over the file for the API key.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration loaded from `karirkita.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KarirConfig {
    /// Gemini API key. Empty means offline mode with the built-in job board.
    #[serde(default)]
    pub api_key: String,

    /// Model used for listing generation and submission evaluation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Number of listings requested per board refresh.
    #[serde(default = "default_job_batch_size")]
    pub job_batch_size: usize,
}

// Default model: the JSON-mode flash tier.
fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

// Default listings per refresh: 5.
fn default_job_batch_size() -> usize {
    5
}

impl Default for KarirConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            job_batch_size: default_job_batch_size(),
        }
    }
}

impl KarirConfig {
    /// Loads configuration from `karirkita.toml` in the current directory.
    /// Falls back to defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("karirkita.toml"))
    }

    fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<KarirConfig>(&contents)?
        } else {
            Self::default()
        };

        // The environment variable wins over the config file for the API key.
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        Ok(config)
    }
}
