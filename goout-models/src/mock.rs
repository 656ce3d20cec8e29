//! Mock and function-based models for testing.
//!
//! - [`MockModel`]: a queue of pre-configured responses
//! - [`FunctionModel`]: responses computed from the incoming request
//!
//! # Examples
//!
//! ```rust
//! use goout_models::MockModel;
//!
//! let model = MockModel::new("test")
//!     .with_text_response("First response")
//!     .with_text_response("Second response");
//! ```

use crate::error::ModelError;
use crate::google::types::{GenerateContentRequest, GenerateContentResponse};
use crate::model::Model;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// MockModel - Simple pre-configured mock
// ============================================================================

/// A mock model returning queued responses in order.
///
/// Clones share the same queue and request log. Once the queue is drained
/// every call answers with the text `"Mock response"`.
#[derive(Debug, Clone)]
pub struct MockModel {
    name: String,
    responses: Arc<Mutex<VecDeque<Result<GenerateContentResponse, ModelError>>>>,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl MockModel {
    /// Create a new mock model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response to return.
    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().push_back(Ok(response));
        self
    }

    /// Add a text response.
    pub fn with_text_response(self, text: impl Into<String>) -> Self {
        self.with_response(GenerateContentResponse::from_text(text))
    }

    /// Add a failure.
    pub fn with_error(self, error: ModelError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Get recorded requests.
    pub fn recorded_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests made so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Model for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn system(&self) -> &str {
        "mock"
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ModelError> {
        self.requests.lock().push(request.clone());

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(GenerateContentResponse::from_text("Mock response")))
    }
}

// ============================================================================
// FunctionModel - Dynamic function-based model
// ============================================================================

/// Callback computing a response from a request.
pub type FunctionDef =
    Box<dyn Fn(&GenerateContentRequest) -> Result<GenerateContentResponse, ModelError> + Send + Sync>;

/// A model controlled by a local function.
///
/// Useful when the answer has to depend on what was sent, for example to
/// reply differently to weather and decision prompts.
pub struct FunctionModel {
    name: String,
    function: FunctionDef,
}

impl FunctionModel {
    /// Create a function model.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&GenerateContentRequest) -> Result<GenerateContentResponse, ModelError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: "function".to_string(),
            function: Box::new(function),
        }
    }

    /// Set the model name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl fmt::Debug for FunctionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionModel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Model for FunctionModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn system(&self) -> &str {
        "function"
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ModelError> {
        (self.function)(request)
    }
}
