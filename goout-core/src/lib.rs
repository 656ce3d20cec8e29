//! # goout-core
//!
//! Core records shared by every goout crate.
//!
//! - **Decisions**: the two-valued [`Decision`] and the [`DecisionResult`] record
//! - **Location**: validated [`Coordinates`]
//! - **Suggestions**: [`PlaceSuggestion`], [`GroundingLink`] and the per-call [`SuggestionSet`]
//! - **Formatting**: share text and fallback search links
//! - **Presets**: the quick-pick mood sentences
//!
//! ## Example
//!
//! ```rust
//! use goout_core::{Decision, DecisionResult};
//! use goout_core::format::share_text;
//!
//! let result = DecisionResult::new(Decision::GoOut, "陽光正好！", "去河濱公園散步");
//! assert!(share_text(&result).contains("AI 說：出門！"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod decision;
pub mod format;
pub mod identifier;
pub mod location;
pub mod presets;
pub mod suggestion;

pub use decision::{Decision, DecisionResult, UnknownDecision};
pub use location::{Coordinates, CoordinatesError};
pub use presets::MoodPreset;
pub use suggestion::{
    GroundingLink, PlaceSuggestion, SuggestionLink, SuggestionSet, DEFAULT_EMOJI,
};
