//! # goout - 今天出門嗎？
//!
//! Tell it your mood; it checks the weather where you are and asks Gemini
//! whether you should go out or stay home, with a reason and an activity.
//! Then ask for three concrete places (grounded with Google Maps) or three
//! things to do at home (grounded with Google Search).
//!
//! ## Quick Start
//!
//! ```ignore
//! use goout::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = GoogleProvider::from_env()?;
//!     let advisor = Advisor::with_model(
//!         Arc::new(provider.model("gemini-2.5-flash")),
//!         AdvisorConfig::default(),
//!     );
//!
//!     let mut cycle = advisor.start_cycle("有點懶", &IpGeolocator::new()).await?;
//!     println!("{}", cycle.share_text());
//!
//!     let set = advisor.suggest(&mut cycle, false).await?;
//!     for s in &set.suggestions {
//!         println!("{} {} {}", s.emoji, s.name, s.href());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! | Crate | Description |
//! |-------|-------------|
//! | `goout-core` | Decisions, coordinates, suggestions, formatting |
//! | `goout-models` | `Model` trait, Gemini client, chat sessions |
//! | `goout-providers` | Credentials and model construction |
//! | `goout-advisor` | Weather, decision and suggestion engines |

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod render;

pub use goout_advisor as advisor;
pub use goout_core as core;
pub use goout_models as models;
pub use goout_providers as providers;

pub use goout_advisor::{
    Advisor, AdvisorConfig, AdvisorError, CycleHandle, DecisionCycle, FixedLocation, Geolocator,
    IpGeolocator, LocateOptions, PositioningError,
};
pub use goout_core::{
    Coordinates, Decision, DecisionResult, GroundingLink, MoodPreset, PlaceSuggestion,
    SuggestionSet,
};
pub use goout_models::{BoxedModel, ChatSession, GoogleModel, Model, ModelError};
pub use goout_providers::{GoogleProvider, ProviderConfig, ProviderError};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Advisor, AdvisorConfig, AdvisorError, Coordinates, Decision, DecisionCycle,
        DecisionResult, FixedLocation, Geolocator, GoogleModel, GoogleProvider, IpGeolocator,
        Model, PlaceSuggestion, SuggestionSet,
    };
}
