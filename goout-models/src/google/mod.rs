//! Google Gemini implementation.
//!
//! - [`GoogleModel`]: `generateContent` over the Generative Language API
//!
//! ## Features
//!
//! - **Google Search**: web search grounding
//! - **Google Maps**: place grounding biased toward a location
//! - **Structured Output**: native JSON schema support
//!
//! ## Example
//!
//! ```rust,ignore
//! use goout_models::google::{GoogleModel, GenerateContentRequest, GoogleTool};
//! use goout_models::Model;
//!
//! let model = GoogleModel::new("gemini-2.5-flash", std::env::var("GEMINI_API_KEY")?);
//! let request = GenerateContentRequest::prompt("今天台北天氣如何？")
//!     .with_tools(vec![GoogleTool::google_search()]);
//! let response = model.generate(&request).await?;
//! println!("{}", response.text());
//! ```

mod model;
pub mod types;

pub use model::{GoogleModel, DEFAULT_BASE_URL};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GoogleMaps, GoogleSearch, GoogleTool, GroundingChunk, GroundingMetadata, LatLng, MapsChunk,
    Part, RetrievalConfig, ToolConfig, WebChunk,
};
