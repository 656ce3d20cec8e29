//! Advisor configuration.
//!
//! Every field has a default, so an empty TOML file is a valid config.
//!
//! ```toml
//! decision_model = "gemini-2.5-flash"
//! decision_temperature = 0.8
//!
//! [locate]
//! timeout_ms = 5000
//! ```

use crate::geolocation::LocateOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Model used for every call unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Knobs for the weather, decision and suggestion calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Model for the weather description.
    pub weather_model: String,
    /// Model for the decision session and its follow-ups.
    pub decision_model: String,
    /// Sampling temperature for the weather description.
    pub weather_temperature: f64,
    /// Sampling temperature for the decision session.
    pub decision_temperature: f64,
    /// Nucleus sampling for the decision session.
    pub decision_top_p: f64,
    /// Geolocation options.
    pub locate: LocateOptions,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            weather_model: DEFAULT_MODEL.to_string(),
            decision_model: DEFAULT_MODEL.to_string(),
            weather_temperature: 0.5,
            decision_temperature: 0.8,
            decision_top_p: 0.9,
            locate: LocateOptions::default(),
        }
    }
}

/// Failure to load a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AdvisorConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
