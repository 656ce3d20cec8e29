//! Place and content suggestions plus their grounding links.

use crate::decision::Decision;
use crate::format::search_fallback_url;
use serde::Serialize;

/// Emoji used when a suggestion block carries none.
pub const DEFAULT_EMOJI: &str = "✨";

/// A link attached to a suggestion from grounding metadata.
///
/// Which variant is used depends on the decision active when the suggestion
/// was produced, so a suggestion never carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionLink {
    /// Maps link for a real place (go-out mode).
    MapUri(String),
    /// Web link for a work or idea (stay-home mode).
    ExternalLink(String),
}

impl SuggestionLink {
    /// Build the variant matching a decision.
    pub fn for_decision(decision: Decision, uri: impl Into<String>) -> Self {
        match decision {
            Decision::GoOut => Self::MapUri(uri.into()),
            Decision::StayHome => Self::ExternalLink(uri.into()),
        }
    }

    /// The URI regardless of variant.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::MapUri(uri) | Self::ExternalLink(uri) => uri,
        }
    }
}

/// One suggested place or piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceSuggestion {
    /// Place or work name.
    pub name: String,
    /// Address for places, category for home content.
    pub address: String,
    /// A single representative emoji.
    pub emoji: String,
    /// Short description.
    pub description: String,
    /// Grounding link, if one matched.
    #[serde(flatten)]
    pub link: Option<SuggestionLink>,
}

impl PlaceSuggestion {
    /// Create a suggestion without a link.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            emoji: emoji.into(),
            description: description.into(),
            link: None,
        }
    }

    /// Attach a link in the slot matching `decision`, replacing any previous one.
    pub fn attach(&mut self, decision: Decision, uri: impl Into<String>) {
        self.link = Some(SuggestionLink::for_decision(decision, uri));
    }

    /// The maps URI, if attached.
    #[must_use]
    pub fn map_uri(&self) -> Option<&str> {
        match &self.link {
            Some(SuggestionLink::MapUri(uri)) => Some(uri),
            _ => None,
        }
    }

    /// The external web link, if attached.
    #[must_use]
    pub fn external_link(&self) -> Option<&str> {
        match &self.link {
            Some(SuggestionLink::ExternalLink(uri)) => Some(uri),
            _ => None,
        }
    }

    /// The link to show: the attached one, else a search query for name and address.
    #[must_use]
    pub fn href(&self) -> String {
        match &self.link {
            Some(link) => link.uri().to_string(),
            None => search_fallback_url(&self.name, &self.address),
        }
    }
}

/// A citation source returned alongside suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroundingLink {
    /// Source title.
    pub title: String,
    /// Source URI.
    pub uri: String,
}

impl GroundingLink {
    /// Create a new link.
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Everything one suggestion call produced.
///
/// Replaced wholesale on every call, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSet {
    /// The decision the suggestions were produced for.
    pub decision: Decision,
    /// Parsed suggestions, in response order.
    pub suggestions: Vec<PlaceSuggestion>,
    /// Grounding links, in metadata order.
    pub grounding_links: Vec<GroundingLink>,
}

impl SuggestionSet {
    /// True when nothing could be parsed ("no suggestions found").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attach_go_out_sets_map_uri() {
        let mut s = PlaceSuggestion::new("貓咪咖啡廳", "台北市", "🐱", "");
        s.attach(Decision::GoOut, "https://maps.google.com/?cid=1");
        assert_eq!(s.map_uri(), Some("https://maps.google.com/?cid=1"));
        assert_eq!(s.external_link(), None);
    }

    #[test]
    fn test_attach_stay_home_sets_external_link() {
        let mut s = PlaceSuggestion::new("神隱少女", "動畫電影", "🎬", "");
        s.attach(Decision::StayHome, "https://example.com/spirited-away");
        assert_eq!(s.map_uri(), None);
        assert_eq!(s.external_link(), Some("https://example.com/spirited-away"));
    }

    #[test]
    fn test_href_falls_back_to_search() {
        let s = PlaceSuggestion::new("Blue Bottle", "Tokyo", "☕", "");
        assert_eq!(
            s.href(),
            "https://www.google.com/search?q=Blue%20Bottle%20Tokyo"
        );
    }

    #[test]
    fn test_serialize_flattens_link() {
        let mut s = PlaceSuggestion::new("A", "B", "✨", "C");
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("mapUri").is_none());
        assert!(json.get("externalLink").is_none());

        s.attach(Decision::GoOut, "u");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["mapUri"], "u");
        assert!(json.get("externalLink").is_none());
    }
}
