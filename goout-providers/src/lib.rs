//! # goout-providers
//!
//! Provider configuration for goout.
//!
//! A provider owns credentials, the endpoint and a shared HTTP client, and
//! hands out configured models.
//!
//! ## Example
//!
//! ```rust,ignore
//! use goout_providers::GoogleProvider;
//!
//! let provider = GoogleProvider::from_env()?;
//! let model = provider.model("gemini-2.5-flash");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod google;
pub mod provider;

pub use google::GoogleProvider;
pub use provider::{Provider, ProviderConfig, ProviderError};
