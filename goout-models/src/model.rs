//! Core model trait.
//!
//! This module defines the `Model` trait which is the one seam between the
//! advisor engines and the generative-AI service.

use crate::error::ModelError;
use crate::google::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for generative models.
///
/// Implementations send a fully built request and return the raw response.
/// Interpreting candidate text, JSON or grounding metadata is left to callers.
#[async_trait]
pub trait Model: Send + Sync {
    /// Get the model name.
    fn name(&self) -> &str;

    /// Get the model system/provider.
    fn system(&self) -> &str;

    /// Get the full model identifier.
    fn identifier(&self) -> String {
        format!("{}:{}", self.system(), self.name())
    }

    /// Make a single `generateContent` request.
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ModelError>;
}

/// Shared model handle.
pub type BoxedModel = Arc<dyn Model>;

#[async_trait]
impl<M: Model + ?Sized> Model for Arc<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn system(&self) -> &str {
        (**self).system()
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ModelError> {
        (**self).generate(request).await
    }
}
