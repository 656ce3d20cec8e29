//! Stateful multi-turn chat sessions.
//!
//! A [`ChatSession`] keeps the conversation history and replays it on every
//! turn, so follow-up questions see the earlier exchange.

use crate::error::ModelError;
use crate::google::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleTool,
    ToolConfig,
};
use crate::model::BoxedModel;
use goout_core::identifier::generate_session_id;
use tracing::debug;

/// Per-turn overrides for one [`ChatSession::send`] call.
#[derive(Debug, Clone, Default)]
pub struct TurnOptions {
    /// Generation fields layered over the session config for this turn.
    pub generation: GenerationConfig,
    /// Tools offered for this turn only.
    pub tools: Vec<GoogleTool>,
    /// Tool configuration for this turn only.
    pub tool_config: Option<ToolConfig>,
}

impl TurnOptions {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for JSON conforming to `schema`.
    #[must_use]
    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.generation = self.generation.with_schema(schema);
        self
    }

    /// Offer a tool.
    #[must_use]
    pub fn with_tool(mut self, tool: GoogleTool) -> Self {
        self.tools.push(tool);
        self
    }

    /// Set tool configuration.
    #[must_use]
    pub fn with_tool_config(mut self, config: ToolConfig) -> Self {
        self.tool_config = Some(config);
        self
    }
}

/// A conversation with one model.
///
/// History only grows, and only on success: a failed turn leaves the
/// session exactly as it was.
pub struct ChatSession {
    id: String,
    model: BoxedModel,
    system_instruction: Option<String>,
    config: GenerationConfig,
    history: Vec<Content>,
}

impl ChatSession {
    /// Open a session with no system instruction.
    pub fn new(model: BoxedModel) -> Self {
        Self {
            id: generate_session_id(),
            model,
            system_instruction: None,
            config: GenerationConfig::default(),
            history: Vec::new(),
        }
    }

    /// Set the system instruction.
    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Set the session-wide generation config.
    #[must_use]
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The model this session talks to.
    pub fn model(&self) -> &BoxedModel {
        &self.model
    }

    /// The system instruction, if any.
    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }

    /// Session-wide generation config.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Conversation so far, oldest first.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Number of completed exchanges.
    pub fn turns(&self) -> usize {
        self.history.iter().filter(|c| c.role == "model").count()
    }

    fn build_request(&self, message: &str, options: &TurnOptions) -> GenerateContentRequest {
        let mut contents = self.history.clone();
        contents.push(Content::user(message));

        let mut request = GenerateContentRequest::new(contents).with_tools(options.tools.clone());
        if let Some(instruction) = &self.system_instruction {
            request = request.with_system(instruction.clone());
        }

        let generation = self.config.merged(&options.generation);
        if !generation.is_empty() {
            request = request.with_generation_config(generation);
        }
        if let Some(tool_config) = &options.tool_config {
            request = request.with_tool_config(tool_config.clone());
        }
        request
    }

    /// Send a user message and record the exchange.
    pub async fn send(
        &mut self,
        message: impl Into<String>,
        options: TurnOptions,
    ) -> Result<GenerateContentResponse, ModelError> {
        let message = message.into();
        let request = self.build_request(&message, &options);
        debug!(
            session = %self.id,
            history = self.history.len(),
            tools = options.tools.len(),
            "sending chat turn"
        );

        let response = self.model.generate(&request).await?;

        match response
            .first_candidate()
            .and_then(|c| c.content.clone())
        {
            Some(mut reply) => {
                if reply.role.is_empty() {
                    reply.role = "model".to_string();
                }
                self.history.push(Content::user(message));
                self.history.push(reply);
            }
            None => debug!(session = %self.id, "reply had no content; history unchanged"),
        }

        Ok(response)
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("model", &self.model.identifier())
            .field("turns", &self.turns())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockModel;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn session(model: &MockModel) -> ChatSession {
        ChatSession::new(Arc::new(model.clone()))
            .with_system_instruction("be nice")
            .with_config(GenerationConfig::new().temperature(0.8).top_p(0.9))
    }

    #[tokio::test]
    async fn test_send_appends_exchange() {
        let model = MockModel::new("m").with_text_response("first").with_text_response("second");
        let mut chat = session(&model);

        chat.send("one", TurnOptions::new()).await.unwrap();
        chat.send("two", TurnOptions::new()).await.unwrap();

        assert_eq!(chat.turns(), 2);
        assert_eq!(chat.history().len(), 4);

        let requests = model.recorded_requests();
        assert_eq!(requests[0].contents.len(), 1);
        assert_eq!(requests[1].contents.len(), 3);
        assert_eq!(requests[1].contents[1].text(), "first");
        assert_eq!(requests[1].contents[2].text(), "two");
    }

    #[tokio::test]
    async fn test_failed_turn_leaves_history() {
        let model = MockModel::new("m")
            .with_text_response("ok")
            .with_error(ModelError::connection("reset"));
        let mut chat = session(&model);

        chat.send("one", TurnOptions::new()).await.unwrap();
        assert!(chat.send("two", TurnOptions::new()).await.is_err());
        assert_eq!(chat.history().len(), 2);
    }

    #[tokio::test]
    async fn test_turn_overrides_merge_with_session_config() {
        let model = MockModel::new("m");
        let mut chat = session(&model);

        let options = TurnOptions::new()
            .with_schema(serde_json::json!({"type": "OBJECT"}))
            .with_tool(GoogleTool::google_search());
        chat.send("hi", options).await.unwrap();

        let request = &model.recorded_requests()[0];
        let generation = request.generation_config.as_ref().unwrap();
        assert_eq!(generation.temperature, Some(0.8));
        assert_eq!(generation.top_p, Some(0.9));
        assert_eq!(generation.response_mime_type.as_deref(), Some("application/json"));
        assert_eq!(request.tools.as_ref().unwrap().len(), 1);
        assert_eq!(request.system_instruction.as_ref().unwrap().text(), "be nice");
    }

    #[tokio::test]
    async fn test_tools_do_not_persist_between_turns() {
        let model = MockModel::new("m");
        let mut chat = session(&model);

        chat.send("a", TurnOptions::new().with_tool(GoogleTool::google_maps()))
            .await
            .unwrap();
        chat.send("b", TurnOptions::new()).await.unwrap();

        let requests = model.recorded_requests();
        assert!(requests[0].tools.is_some());
        assert!(requests[1].tools.is_none());
    }

    #[test]
    fn test_session_id() {
        let chat = ChatSession::new(Arc::new(MockModel::new("m")));
        assert!(chat.id().starts_with("chat_"));
    }
}
