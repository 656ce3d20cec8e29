//! Grounding-link extraction and attachment.

use goout_core::{Decision, GroundingLink, PlaceSuggestion};
use goout_models::GroundingChunk;

fn complete(title: Option<&String>, uri: Option<&String>) -> Option<GroundingLink> {
    match (title, uri) {
        (Some(title), Some(uri)) if !title.is_empty() && !uri.is_empty() => {
            Some(GroundingLink::new(title.clone(), uri.clone()))
        }
        _ => None,
    }
}

/// Collect every chunk that has both a title and a URI.
///
/// A web source is preferred when a chunk carries both kinds. Order and
/// duplicates are kept.
pub fn extract_links(chunks: &[GroundingChunk]) -> Vec<GroundingLink> {
    chunks
        .iter()
        .filter_map(|chunk| {
            chunk
                .web
                .as_ref()
                .and_then(|w| complete(w.title.as_ref(), w.uri.as_ref()))
                .or_else(|| {
                    chunk
                        .maps
                        .as_ref()
                        .and_then(|m| complete(m.title.as_ref(), m.uri.as_ref()))
                })
        })
        .collect()
}

/// The first link whose title and `name` overlap, either way round.
pub fn find_link<'a>(name: &str, links: &'a [GroundingLink]) -> Option<&'a GroundingLink> {
    links
        .iter()
        .find(|link| link.title.contains(name) || name.contains(link.title.as_str()))
}

/// Attach matching links to suggestions in the slot `decision` selects.
///
/// Suggestions without a match are left unlinked.
pub fn attach_links(suggestions: &mut [PlaceSuggestion], links: &[GroundingLink], decision: Decision) {
    for suggestion in suggestions.iter_mut() {
        if let Some(link) = find_link(&suggestion.name, links) {
            suggestion.attach(decision, link.uri.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goout_models::google::{MapsChunk, WebChunk};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_skips_incomplete_chunks() {
        let chunks = vec![
            GroundingChunk::web("A", "https://a"),
            GroundingChunk {
                web: Some(WebChunk {
                    uri: Some("https://no-title".into()),
                    title: None,
                }),
                maps: None,
            },
            GroundingChunk::maps("B", "https://maps/b", "places/b"),
            GroundingChunk {
                web: None,
                maps: Some(MapsChunk {
                    uri: None,
                    title: Some("no uri".into()),
                    place_id: Some("places/x".into()),
                }),
            },
            GroundingChunk::web("", "https://empty-title"),
            GroundingChunk::web("A", "https://a"),
            GroundingChunk::default(),
        ];

        assert_eq!(
            extract_links(&chunks),
            vec![
                GroundingLink::new("A", "https://a"),
                GroundingLink::new("B", "https://maps/b"),
                GroundingLink::new("A", "https://a"),
            ]
        );
    }

    #[test]
    fn test_attach_by_decision() {
        let links = vec![GroundingLink::new("Blue Bottle", "https://bb")];

        let mut out = vec![PlaceSuggestion::new("Blue Bottle Coffee", "", "☕", "")];
        attach_links(&mut out, &links, Decision::GoOut);
        assert_eq!(out[0].map_uri(), Some("https://bb"));
        assert_eq!(out[0].external_link(), None);

        let mut home = vec![PlaceSuggestion::new("Blue Bottle Coffee", "", "☕", "")];
        attach_links(&mut home, &links, Decision::StayHome);
        assert_eq!(home[0].map_uri(), None);
        assert_eq!(home[0].external_link(), Some("https://bb"));
    }

    #[test]
    fn test_first_match_wins_either_direction() {
        let links = vec![
            GroundingLink::new("象山步道入口", "https://first"),
            GroundingLink::new("象山", "https://second"),
        ];
        assert_eq!(find_link("象山", &links).unwrap().uri, "https://first");
        assert_eq!(find_link("象山親山步道", &links).unwrap().uri, "https://second");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let links = vec![GroundingLink::new("blue bottle", "https://bb")];
        let mut out = vec![PlaceSuggestion::new("Blue Bottle", "", "☕", "")];
        attach_links(&mut out, &links, Decision::GoOut);
        assert_eq!(out[0].link, None);
    }
}
