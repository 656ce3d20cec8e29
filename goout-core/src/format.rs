//! Plain-text formatting for sharing and link fallbacks.
//!
//! # Example
//!
//! ```rust
//! use goout_core::format::search_fallback_url;
//!
//! let url = search_fallback_url("貓咪咖啡廳", "台北市");
//! assert!(url.starts_with("https://www.google.com/search?q="));
//! ```

use crate::decision::DecisionResult;

/// Search endpoint used when a suggestion has no grounding link.
pub const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Build the share/clipboard summary of a decision.
#[must_use]
pub fn share_text(result: &DecisionResult) -> String {
    format!(
        "【今天出門嗎？】\nAI 說：{}！\n原因：{}\n建議：{}",
        result.decision.label(),
        result.reason,
        result.activity
    )
}

/// Build a search query URL from a suggestion's name and address.
#[must_use]
pub fn search_fallback_url(name: &str, address: &str) -> String {
    let query = format!("{} {}", name, address);
    format!("{}{}", SEARCH_URL, urlencoding::encode(&query))
}
