//! Decision engine.
//!
//! Opens the chat session that lives for the rest of the cycle and asks the
//! one structured question: go out or stay home?

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::instructions::{decision_prompt, decision_schema, GUIDE_PERSONA};
use goout_core::{Decision, DecisionResult};
use goout_models::{BoxedModel, ChatSession, GenerationConfig, TurnOptions};
use serde::Deserialize;
use tracing::{info, warn};

/// The decision reply before the label is checked.
#[derive(Debug, Deserialize)]
struct RawDecision {
    #[serde(default)]
    decision: serde_json::Value,
    reason: String,
    activity: String,
}

/// Parse and validate a decision reply.
pub fn parse_decision(text: &str) -> Result<DecisionResult, AdvisorError> {
    let raw: RawDecision = serde_json::from_str(text.trim())
        .map_err(|source| AdvisorError::DecisionFormat { source })?;

    let decision = match &raw.decision {
        serde_json::Value::String(label) => {
            Decision::from_label(label).ok_or_else(|| AdvisorError::InvalidDecision {
                value: label.clone(),
            })?
        }
        other => {
            return Err(AdvisorError::InvalidDecision {
                value: other.to_string(),
            })
        }
    };

    Ok(DecisionResult::new(decision, raw.reason, raw.activity))
}

/// Open a guide session for `model` without sending anything.
pub fn open_session(model: BoxedModel, config: &AdvisorConfig) -> ChatSession {
    ChatSession::new(model)
        .with_system_instruction(GUIDE_PERSONA)
        .with_config(
            GenerationConfig::new()
                .temperature(config.decision_temperature)
                .top_p(config.decision_top_p),
        )
}

/// Open a session and ask for a decision on `input`.
///
/// Returns the session so follow-up questions share its history. On any
/// failure the session is dropped with the error.
pub async fn start_decision(
    model: BoxedModel,
    input: &str,
    config: &AdvisorConfig,
) -> Result<(ChatSession, DecisionResult), AdvisorError> {
    let mut session = open_session(model, config);

    let response = session
        .send(
            decision_prompt(input),
            TurnOptions::new().with_schema(decision_schema()),
        )
        .await
        .map_err(|e| {
            warn!(error = %e, "decision request failed");
            AdvisorError::decision(e)
        })?;

    let result = parse_decision(&response.text()).map_err(|e| {
        warn!(error = %e, validation = e.is_validation(), "decision reply rejected");
        e
    })?;

    info!(session = session.id(), decision = %result.decision, "decision made");
    Ok((session, result))
}
