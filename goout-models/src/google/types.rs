//! Gemini API types.
//!
//! Request/response types for the `generateContent` endpoint of Google's
//! Generative Language API, including search and maps grounding.

use goout_core::Coordinates;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ============================================================================
// Request Types
// ============================================================================

/// Generate content request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Content messages.
    pub contents: Vec<Content>,
    /// System instruction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Tool definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GoogleTool>>,
    /// Tool configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
    /// Generation configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a new request.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            system_instruction: None,
            tools: None,
            tool_config: None,
            generation_config: None,
        }
    }

    /// Create a single-turn request from a user prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(vec![Content::user(text)])
    }

    /// Add system instruction.
    #[must_use]
    pub fn with_system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(Content::system(instruction));
        self
    }

    /// Add generation config.
    #[must_use]
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// Add tools; an empty list clears them.
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<GoogleTool>) -> Self {
        self.tools = if tools.is_empty() { None } else { Some(tools) };
        self
    }

    /// Add tool configuration.
    #[must_use]
    pub fn with_tool_config(mut self, config: ToolConfig) -> Self {
        self.tool_config = Some(config);
        self
    }
}

/// Content (message) in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model".
    #[serde(default)]
    pub role: String,
    /// Content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create user content.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Create model content.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Create system instruction content.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(), // System uses user role in Google API
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated answer text, skipping thought parts.
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(Part::as_text).collect()
    }
}

/// Content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content.
    Text {
        /// The text.
        text: String,
        /// Set on thinking-model reasoning parts.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    /// Any part kind this client does not model (function calls, inline data, ...).
    Other(JsonValue),
}

impl Part {
    /// Create text part.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text {
            text: s.into(),
            thought: None,
        }
    }

    /// Get answer text if this is a non-thought text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text {
                text,
                thought: None | Some(false),
            } => Some(text),
            _ => None,
        }
    }
}

/// Tool definition.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoogleTool {
    /// Google Search grounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
    /// Google Maps grounding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<GoogleMaps>,
}

impl GoogleTool {
    /// Create Google Search tool.
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
            ..Default::default()
        }
    }

    /// Create Google Maps tool.
    pub fn google_maps() -> Self {
        Self {
            google_maps: Some(GoogleMaps::default()),
            ..Default::default()
        }
    }
}

/// Google Search tool config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Google Maps tool config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GoogleMaps {}

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Retrieval configuration for grounding tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_config: Option<RetrievalConfig>,
}

impl ToolConfig {
    /// Bias retrieval toward a location.
    pub fn near(coords: Coordinates) -> Self {
        Self {
            retrieval_config: Some(RetrievalConfig {
                lat_lng: Some(LatLng::from(coords)),
            }),
        }
    }
}

/// Retrieval configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    /// Location bias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<LatLng>,
}

/// Latitude/longitude on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

impl From<Coordinates> for LatLng {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.lat,
            longitude: c.lon,
        }
    }
}

/// Generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Top-p.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Response MIME type (for structured output).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Response schema (for structured output).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<JsonValue>,
}

impl GenerationConfig {
    /// Create new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature.
    #[must_use]
    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set top-p.
    #[must_use]
    pub fn top_p(mut self, p: f64) -> Self {
        self.top_p = Some(p);
        self
    }

    /// Set structured output schema.
    #[must_use]
    pub fn with_schema(mut self, schema: JsonValue) -> Self {
        self.response_mime_type = Some("application/json".to_string());
        self.response_schema = Some(schema);
        self
    }

    /// Layer `overrides` on top of this config, field by field.
    #[must_use]
    pub fn merged(&self, overrides: &GenerationConfig) -> GenerationConfig {
        GenerationConfig {
            temperature: overrides.temperature.or(self.temperature),
            top_p: overrides.top_p.or(self.top_p),
            response_mime_type: overrides
                .response_mime_type
                .clone()
                .or_else(|| self.response_mime_type.clone()),
            response_schema: overrides
                .response_schema
                .clone()
                .or_else(|| self.response_schema.clone()),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == GenerationConfig::default()
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Generate content response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Usage metadata.
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    /// Model version.
    #[serde(default)]
    pub model_version: Option<String>,
    /// Prompt feedback (for blocked prompts).
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Build a single-candidate text response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content::model(text)),
                finish_reason: Some("STOP".to_string()),
                grounding_metadata: None,
            }],
            ..Default::default()
        }
    }

    /// Attach grounding chunks to the first candidate.
    #[must_use]
    pub fn with_grounding_chunks(mut self, chunks: Vec<GroundingChunk>) -> Self {
        if let Some(candidate) = self.candidates.first_mut() {
            candidate.grounding_metadata = Some(GroundingMetadata {
                grounding_chunks: chunks,
                ..Default::default()
            });
        }
        self
    }

    /// The first candidate, if any.
    pub fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Answer text of the first candidate; empty when there is none.
    pub fn text(&self) -> String {
        self.first_candidate()
            .and_then(|c| c.content.as_ref())
            .map(Content::text)
            .unwrap_or_default()
    }

    /// Grounding chunks of the first candidate; empty when absent.
    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.first_candidate()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| m.grounding_chunks.as_slice())
            .unwrap_or(&[])
    }
}

/// Response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Content.
    #[serde(default)]
    pub content: Option<Content>,
    /// Finish reason.
    #[serde(default)]
    pub finish_reason: Option<String>,
    /// Grounding metadata.
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Grounding chunks.
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,}

/// Grounding chunk. Exactly one source is normally set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    /// Web source.
    #[serde(default)]
    pub web: Option<WebChunk>,
    /// Maps source.
    #[serde(default)]
    pub maps: Option<MapsChunk>,
}

impl GroundingChunk {
    /// Web chunk.
    pub fn web(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            web: Some(WebChunk {
                uri: Some(uri.into()),
                title: Some(title.into()),
            }),
            maps: None,
        }
    }

    /// Maps chunk.
    pub fn maps(
        title: impl Into<String>,
        uri: impl Into<String>,
        place_id: impl Into<String>,
    ) -> Self {
        Self {
            web: None,
            maps: Some(MapsChunk {
                uri: Some(uri.into()),
                title: Some(title.into()),
                place_id: Some(place_id.into()),
            }),
        }
    }
}

/// Web chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebChunk {
    /// URI.
    #[serde(default)]
    pub uri: Option<String>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
}

/// Maps chunk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsChunk {
    /// URI.
    #[serde(default)]
    pub uri: Option<String>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Place ID.
    #[serde(default)]
    pub place_id: Option<String>,
}

/// Usage metadata.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Prompt token count.
    #[serde(default)]
    pub prompt_token_count: u64,
    /// Candidates token count.
    #[serde(default)]
    pub candidates_token_count: u64,
    /// Total token count.
    #[serde(default)]
    pub total_token_count: u64,
}

/// Prompt feedback (for blocked prompts).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Block reason.
    #[serde(default)]
    pub block_reason: Option<String>,
}

// ============================================================================
// Error Types
// ============================================================================

/// Google API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleError {
    /// Error details.
    pub error: GoogleErrorBody,
}

/// Google error body.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleErrorBody {
    /// Error code.
    pub code: u32,
    /// Error message.
    pub message: String,
    /// Error status.
    #[serde(default)]
    pub status: Option<String>,
}
