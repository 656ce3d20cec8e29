//! The go-out / stay-home decision.
//!
//! A [`Decision`] travels over the wire as its display label, so the JSON the
//! model produces (`"decision": "出門"`) deserializes straight into the enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether the user should leave the house today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Go out.
    #[serde(rename = "出門")]
    GoOut,
    /// Stay home.
    #[serde(rename = "待在家")]
    StayHome,
}

impl Decision {
    /// Every permitted decision, in schema order.
    pub const ALL: [Decision; 2] = [Decision::GoOut, Decision::StayHome];

    /// The fixed display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Decision::GoOut => "出門",
            Decision::StayHome => "待在家",
        }
    }

    /// Look a decision up by its exact display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }

    /// All labels, in schema order.
    #[must_use]
    pub fn labels() -> [&'static str; 2] {
        [Decision::GoOut.label(), Decision::StayHome.label()]
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A label that is not one of the permitted decisions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown decision label: {0:?}")]
pub struct UnknownDecision(pub String);

impl FromStr for Decision {
    type Err = UnknownDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownDecision(s.to_string()))
    }
}

/// The outcome of one decision request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// The decision itself.
    pub decision: Decision,
    /// A persuasive, whimsical explanation.
    pub reason: String,
    /// A short, concrete activity matching the decision.
    pub activity: String,
}

impl DecisionResult {
    /// Create a new result.
    pub fn new(decision: Decision, reason: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            decision,
            reason: reason.into(),
            activity: activity.into(),
        }
    }
}
