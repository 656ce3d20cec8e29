//! Google Gemini model implementation.

use super::types::*;
use crate::error::ModelError;
use crate::model::Model;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini model.
#[derive(Debug, Clone)]
pub struct GoogleModel {
    model_name: String,
    client: Client,
    api_key: String,
    base_url: String,
    default_timeout: Duration,
}

impl GoogleModel {
    /// Create a new Gemini model using an API key.
    pub fn new(model_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_timeout: Duration::from_secs(120),
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom HTTP client.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the default timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// The base URL requests go to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the API URL.
    fn build_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    fn handle_error_response(&self, status: u16, body: &str) -> ModelError {
        if let Ok(err) = serde_json::from_str::<GoogleError>(body) {
            let code = err.error.status.clone();

            match status {
                401 | 403 => return ModelError::auth(err.error.message),
                429 => return ModelError::rate_limited(None),
                404 => return ModelError::NotFound(err.error.message),
                _ => {}
            }

            return ModelError::Api {
                message: err.error.message,
                code,
            };
        }

        match status {
            401 | 403 => ModelError::auth(body),
            429 => ModelError::rate_limited(None),
            _ => ModelError::http(status, body),
        }
    }

    fn check_blocked(resp: &GenerateContentResponse) -> Result<(), ModelError> {
        if let Some(reason) = resp
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            warn!(reason, "prompt blocked");
            return Err(ModelError::ContentFiltered(reason.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Model for GoogleModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn system(&self) -> &str {
        "google"
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ModelError> {
        let url = self.build_url();
        debug!(model = %self.model_name, turns = request.contents.len(), "generateContent");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.default_timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout(self.default_timeout)
                } else {
                    ModelError::from(e)
                }
            })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.handle_error_response(status, &body));
        }

        let resp: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::invalid_response(e.to_string()))?;

        Self::check_blocked(&resp)?;
        if resp.candidates.is_empty() {
            debug!("response carried no candidates");
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goout_core::Coordinates;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn model(server: &MockServer) -> GoogleModel {
        GoogleModel::new("gemini-2.5-flash", "test-key").with_base_url(server.uri())
    }

    #[test]
    fn test_build_url() {
        let m = GoogleModel::new("gemini-2.5-flash", "k").with_base_url("http://localhost:1234/");
        assert_eq!(
            m.build_url(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(m.identifier(), "google:gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_generate_sends_key_and_tools() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "tools": [{"googleMaps": {}}],
                "toolConfig": {"retrievalConfig": {"latLng": {"latitude": 25.0, "longitude": 121.5}}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "hello"}]},
                    "groundingMetadata": {"groundingChunks": [{"maps": {"uri": "u", "title": "t"}}]}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = GenerateContentRequest::prompt("hi")
            .with_tools(vec![GoogleTool::google_maps()])
            .with_tool_config(ToolConfig::near(Coordinates::new(25.0, 121.5).unwrap()));
        let resp = model(&server).generate(&request).await.unwrap();

        assert_eq!(resp.text(), "hello");
        assert_eq!(resp.grounding_chunks().len(), 1);
    }

    #[tokio::test]
    async fn test_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
            })))
            .mount(&server)
            .await;

        let err = model(&server)
            .generate(&GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::Authentication(m) if m.contains("API key")));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let err = model(&server)
            .generate(&GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_api_error_keeps_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "bad schema", "status": "INVALID_ARGUMENT"}
            })))
            .mount(&server)
            .await;

        let err = model(&server)
            .generate(&GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        match err {
            ModelError::Api { message, code } => {
                assert_eq!(message, "bad schema");
                assert_eq!(code.as_deref(), Some("INVALID_ARGUMENT"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = model(&server)
            .generate(&GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_blocked_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let err = model(&server)
            .generate(&GenerateContentRequest::prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::ContentFiltered(r) if r == "SAFETY"));
    }

    #[tokio::test]
    async fn test_no_candidates_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let resp = model(&server)
            .generate(&GenerateContentRequest::prompt("hi"))
            .await
            .unwrap();
        assert_eq!(resp.text(), "");
    }
}
