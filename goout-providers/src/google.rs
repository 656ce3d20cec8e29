//! Google AI (Gemini) provider.

use crate::provider::{non_empty_var, Provider, ProviderConfig, ProviderError};
use goout_models::google::DEFAULT_BASE_URL;
use goout_models::GoogleModel;
use reqwest::Client;
use tracing::debug;

/// Legacy single-variable credential name.
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";

/// Google AI (Generative Language API) provider.
#[derive(Debug)]
pub struct GoogleProvider {
    config: ProviderConfig,
    client: Client,
}

impl GoogleProvider {
    /// Create a new Google AI provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = ProviderConfig::new().with_api_key(api_key);
        Self {
            client: config.build_client(),
            config,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_none() {
            return Err(ProviderError::MissingApiKey("GEMINI_API_KEY"));
        }
        Ok(Self {
            client: config.build_client(),
            config,
        })
    }

    /// Create from environment variables.
    ///
    /// Reads `GEMINI_API_KEY` / `GEMINI_BASE_URL`, falling back to a bare
    /// `API_KEY` for the credential.
    pub fn from_env() -> Result<Self, ProviderError> {
        let mut config = ProviderConfig::from_env("GEMINI");
        if config.api_key.is_none() {
            config.api_key = non_empty_var(LEGACY_API_KEY_VAR);
            if config.api_key.is_some() {
                debug!("using legacy {} variable", LEGACY_API_KEY_VAR);
            }
        }
        Self::from_config(config)
    }

    /// Build a model sharing this provider's client and endpoint.
    pub fn model(&self, name: impl Into<String>) -> GoogleModel {
        let mut model = GoogleModel::new(name, self.config.api_key.clone().unwrap_or_default())
            .with_client(self.client().clone())
            .with_base_url(self.base_url());
        if let Some(timeout) = self.config.timeout {
            model = model.with_timeout(timeout);
        }
        model
    }
}

impl Provider for GoogleProvider {
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goout_models::{GenerateContentRequest, Model};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_missing_key() {
        let err = GoogleProvider::from_config(ProviderConfig::new()).unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey("GEMINI_API_KEY")));
    }

    #[test]
    fn test_defaults() {
        let provider = GoogleProvider::new("k");
        assert_eq!(provider.base_url(), DEFAULT_BASE_URL);
        assert_eq!(provider.model("m").base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_model_uses_provider_endpoint_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": "ok"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GoogleProvider::from_config(
            ProviderConfig::new()
                .with_api_key("secret")
                .with_base_url(server.uri()),
        )
        .unwrap();
        let model = provider.model("gemini-2.5-flash");

        let resp = model
            .generate(&GenerateContentRequest::prompt("ping"))
            .await
            .unwrap();
        assert_eq!(resp.text(), "ok");
    }
}
