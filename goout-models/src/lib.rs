//! # goout-models
//!
//! Model trait and the Gemini implementation for goout.
//!
//! - [`Model`]: the single seam to the generative-AI service
//! - [`GoogleModel`]: `generateContent` over REST with search and maps grounding
//! - [`ChatSession`]: multi-turn conversation with per-turn tools and schemas
//! - [`MockModel`] / [`FunctionModel`]: test doubles
//!
//! ## Example
//!
//! ```rust,ignore
//! use goout_models::{ChatSession, GoogleModel, TurnOptions};
//! use std::sync::Arc;
//!
//! let model = Arc::new(GoogleModel::new("gemini-2.5-flash", api_key));
//! let mut chat = ChatSession::new(model).with_system_instruction("你是一位在地嚮導");
//! let reply = chat.send("我今天該出門嗎？", TurnOptions::new()).await?;
//! println!("{}", reply.text());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod chat;
pub mod error;
pub mod google;
pub mod mock;
pub mod model;

pub use chat::{ChatSession, TurnOptions};
pub use error::{ModelError, ModelResult};
pub use google::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, GoogleModel, GoogleTool,
    GroundingChunk, ToolConfig,
};
pub use mock::{FunctionModel, MockModel};
pub use model::{BoxedModel, Model};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        BoxedModel, ChatSession, GenerateContentRequest, GenerateContentResponse,
        GenerationConfig, GoogleModel, GoogleTool, Model, ModelError, ToolConfig, TurnOptions,
    };
}
