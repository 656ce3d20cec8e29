//! # goout-advisor
//!
//! Decides whether you should go out today.
//!
//! One [`DecisionCycle`] runs three steps in order:
//!
//! 1. **Geolocation**: a [`Geolocator`] supplies coordinates
//! 2. **Weather**: a short description of the weather there
//! 3. **Decision**: a chat session weighs mood and weather and answers
//!    出門 or 待在家 with a reason and an activity
//!
//! Afterwards the same session can be asked, as often as wanted, for three
//! grounded suggestions matching the activity.
//!
//! ## Example
//!
//! ```rust,ignore
//! use goout_advisor::{Advisor, AdvisorConfig, IpGeolocator};
//! use std::sync::Arc;
//!
//! let advisor = Advisor::with_model(Arc::new(model), AdvisorConfig::default());
//! let mut cycle = advisor.start_cycle("有點懶", &IpGeolocator::new()).await?;
//! println!("{}", cycle.share_text());
//!
//! let places = advisor.suggest(&mut cycle, false).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod decision;
pub mod error;
pub mod geolocation;
pub mod instructions;
pub mod suggestions;
pub mod weather;

pub use config::{AdvisorConfig, ConfigError};
pub use cycle::{Advisor, CycleHandle, DecisionCycle};
pub use decision::{parse_decision, start_decision};
pub use error::{AdvisorError, AdvisorResult};
pub use geolocation::{FixedLocation, Geolocator, IpGeolocator, LocateOptions, PositioningError};
pub use instructions::combined_input;
pub use suggestions::get_suggestions;
pub use weather::describe_weather;
