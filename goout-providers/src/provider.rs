//! Provider trait and common configuration.
//!
//! A provider represents an AI API service with authentication and configuration.

use reqwest::Client;
use std::time::Duration;

/// Provider trait - provides authenticated access to an AI API.
pub trait Provider: Send + Sync + std::fmt::Debug {
    /// Base URL for the API.
    fn base_url(&self) -> &str;

    /// Get an HTTP client configured for this provider.
    fn client(&self) -> &Client;
}

/// Common configuration for providers.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: Option<String>,
    /// Custom base URL.
    pub base_url: Option<String>,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

impl ProviderConfig {
    /// Create a new empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from environment variables with given prefix.
    ///
    /// Looks for:
    /// - `{PREFIX}_API_KEY`
    /// - `{PREFIX}_BASE_URL`
    ///
    /// Empty values count as unset.
    pub fn from_env(prefix: &str) -> Self {
        Self {
            api_key: non_empty_var(&format!("{}_API_KEY", prefix)),
            base_url: non_empty_var(&format!("{}_BASE_URL", prefix)),
            timeout: None,
        }
    }

    /// Build an HTTP client with this config.
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_default()
    }
}

pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Provider error types.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Missing API key.
    #[error("Missing API key: set {0}")]
    MissingApiKey(&'static str),
}
