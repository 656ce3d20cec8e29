//! Advisor error types.
//!
//! Upstream failures are wrapped per call site. The cause stays reachable
//! through [`std::error::Error::source`] for logging, while
//! [`AdvisorError::user_message`] gives the fixed text shown to the user.

use crate::geolocation::PositioningError;
use goout_models::ModelError;
use thiserror::Error;

/// Shown when the mood is empty.
pub const MSG_EMPTY_MOOD: &str = "請告訴我你現在的心情！";
/// Shown when no position could be obtained.
pub const MSG_POSITIONING: &str = "無法取得您的位置。請允許存取位置資訊，然後再試一次。";
/// Shown when the weather or decision step failed.
pub const MSG_DECISION: &str = "糟糕，無法做出決定。請稍後再試。";
/// Shown when the suggestion step failed.
pub const MSG_SUGGESTIONS: &str = "抱歉，無法找到推薦建議。請稍後再試。";

/// Errors from a decision cycle.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The mood input was empty or whitespace.
    #[error("mood is empty")]
    EmptyMood,

    /// No position.
    #[error("positioning failed: {0}")]
    Positioning(#[from] PositioningError),

    /// The weather call failed.
    #[error("failed to get weather information")]
    Weather {
        /// Underlying model error.
        source: ModelError,
    },

    /// The decision call failed.
    #[error("failed to get a decision")]
    Decision {
        /// Underlying model error.
        source: ModelError,
    },

    /// The decision reply was not the expected JSON object.
    #[error("decision reply is not valid JSON")]
    DecisionFormat {
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The decision reply named a value outside the permitted labels.
    #[error("invalid decision value received: {value:?}")]
    InvalidDecision {
        /// The offending value.
        value: String,
    },

    /// The suggestion call failed.
    #[error("failed to get suggestions")]
    Suggestions {
        /// Underlying model error.
        source: ModelError,
    },

    /// A suggestion request for this cycle is already running.
    #[error("suggestions are already being fetched")]
    SuggestionsPending,
}

impl AdvisorError {
    /// Wrap a weather failure.
    pub fn weather(source: ModelError) -> Self {
        Self::Weather { source }
    }

    /// Wrap a decision failure.
    pub fn decision(source: ModelError) -> Self {
        Self::Decision { source }
    }

    /// Wrap a suggestion failure.
    pub fn suggestions(source: ModelError) -> Self {
        Self::Suggestions { source }
    }

    /// The fixed message to show the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyMood => MSG_EMPTY_MOOD,
            Self::Positioning(_) => MSG_POSITIONING,
            Self::Weather { .. }
            | Self::Decision { .. }
            | Self::DecisionFormat { .. }
            | Self::InvalidDecision { .. } => MSG_DECISION,
            Self::Suggestions { .. } | Self::SuggestionsPending => MSG_SUGGESTIONS,
        }
    }

    /// True for replies that arrived but failed validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidDecision { .. })
    }

    /// True when the failure came from the model service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Weather { .. } | Self::Decision { .. } | Self::Suggestions { .. }
        )
    }
}

/// Result type for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    #[case(AdvisorError::EmptyMood, MSG_EMPTY_MOOD)]
    #[case(AdvisorError::Positioning(PositioningError::Denied("no".into())), MSG_POSITIONING)]
    #[case(AdvisorError::weather(ModelError::auth("x")), MSG_DECISION)]
    #[case(AdvisorError::decision(ModelError::auth("x")), MSG_DECISION)]
    #[case(AdvisorError::InvalidDecision { value: "去海邊".into() }, MSG_DECISION)]
    #[case(AdvisorError::suggestions(ModelError::auth("x")), MSG_SUGGESTIONS)]
    fn test_user_messages(#[case] err: AdvisorError, #[case] expected: &str) {
        assert_eq!(err.user_message(), expected);
    }

    #[test]
    fn test_validation_is_distinguishable() {
        let invalid = AdvisorError::InvalidDecision {
            value: "去海邊".into(),
        };
        let upstream = AdvisorError::decision(ModelError::connection("reset"));

        assert_eq!(invalid.user_message(), upstream.user_message());
        assert!(invalid.is_validation());
        assert!(!upstream.is_validation());
        assert!(upstream.is_upstream());
        assert!(invalid.to_string().contains("去海邊"));
    }

    #[test]
    fn test_cause_is_kept() {
        let err = AdvisorError::suggestions(ModelError::connection("reset"));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("reset"));
    }
}
