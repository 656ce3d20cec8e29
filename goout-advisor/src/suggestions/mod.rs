//! Suggestion engine.
//!
//! Asks the open decision session for three concrete places (going out) or
//! pieces of content (staying home), grounded with maps or web search, then
//! parses the delimited reply and links suggestions to their sources.
//!
//! ```text
//! ---ITEM---
//! 名稱：<name>
//! 地址：<address>   or   類別：<category>
//! Emoji：<emoji>
//! 描述：<description>
//! ```

pub mod grounding;
pub mod parse;
pub mod prompt;

pub use grounding::{attach_links, extract_links, find_link};
pub use parse::{parse_block, parse_suggestions};
pub use prompt::{grounding_options, suggestion_prompt, ITEM_SEPARATOR};

use crate::error::AdvisorError;
use goout_core::{Coordinates, Decision, SuggestionSet};
use goout_models::ChatSession;
use tracing::{debug, info, warn};

/// Ask `session` for suggestions matching `decision` and `activity`.
///
/// The exchange is appended to the session, so a refresh sees what was
/// suggested before. Succeeds with zero suggestions when nothing parses.
pub async fn get_suggestions(
    session: &mut ChatSession,
    decision: Decision,
    activity: &str,
    coords: Coordinates,
    is_refresh: bool,
) -> Result<SuggestionSet, AdvisorError> {
    let message = suggestion_prompt(decision, activity, coords, is_refresh);
    let options = grounding_options(decision, coords);
    debug!(session = session.id(), %decision, is_refresh, "requesting suggestions");

    let response = session.send(message, options).await.map_err(|e| {
        warn!(error = %e, "suggestion request failed");
        AdvisorError::suggestions(e)
    })?;

    let mut suggestions = parse_suggestions(&response.text());
    let grounding_links = extract_links(response.grounding_chunks());
    attach_links(&mut suggestions, &grounding_links, decision);

    info!(
        suggestions = suggestions.len(),
        links = grounding_links.len(),
        "suggestions ready"
    );
    Ok(SuggestionSet {
        decision,
        suggestions,
        grounding_links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use goout_models::{GenerateContentResponse, GroundingChunk, MockModel, ModelError};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    const REPLY: &str = "---ITEM---\n名稱：Blue Bottle Coffee\n地址：東京都江東區\nEmoji：☕\n描述：第三波咖啡\n---ITEM---\n名稱：清澄庭園\n地址：東京都江東區\n---ITEM---\n描述：沒有名字\n";

    fn tokyo() -> Coordinates {
        Coordinates::new(35.68, 139.8).unwrap()
    }

    #[tokio::test]
    async fn test_go_out_suggestions() {
        let model = MockModel::new("m").with_response(
            GenerateContentResponse::from_text(REPLY).with_grounding_chunks(vec![
                GroundingChunk::maps("Blue Bottle", "https://maps/bb", "places/bb"),
            ]),
        );
        let mut session = ChatSession::new(Arc::new(model.clone()));

        let set = get_suggestions(&mut session, Decision::GoOut, "喝咖啡", tokyo(), false)
            .await
            .unwrap();

        assert_eq!(set.decision, Decision::GoOut);
        assert_eq!(set.suggestions.len(), 2);
        assert_eq!(set.suggestions[0].map_uri(), Some("https://maps/bb"));
        assert_eq!(set.suggestions[1].link, None);
        assert_eq!(set.grounding_links.len(), 1);

        let request = &model.recorded_requests()[0];
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["tools"], serde_json::json!([{"googleMaps": {}}]));
        assert_eq!(
            json["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            35.68
        );
    }

    #[tokio::test]
    async fn test_stay_home_uses_search_and_external_links() {
        let model = MockModel::new("m").with_response(
            GenerateContentResponse::from_text("---ITEM---\n名稱：神隱少女\n類別：動畫電影\n")
                .with_grounding_chunks(vec![GroundingChunk::web("神隱少女 - 維基百科", "https://wiki")]),
        );
        let mut session = ChatSession::new(Arc::new(model.clone()));

        let set = get_suggestions(&mut session, Decision::StayHome, "看電影", tokyo(), false)
            .await
            .unwrap();

        assert_eq!(set.suggestions[0].address, "動畫電影");
        assert_eq!(set.suggestions[0].external_link(), Some("https://wiki"));

        let json = serde_json::to_value(&model.recorded_requests()[0]).unwrap();
        assert_eq!(json["tools"], serde_json::json!([{"googleSearch": {}}]));
        assert!(json.get("toolConfig").is_none());
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_empty_set() {
        let model = MockModel::new("m").with_text_response("抱歉，我找不到適合的地點。");
        let mut session = ChatSession::new(Arc::new(model));

        let set = get_suggestions(&mut session, Decision::GoOut, "x", tokyo(), false)
            .await
            .unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_wrapped() {
        let model = MockModel::new("m").with_error(ModelError::Timeout(std::time::Duration::from_secs(1)));
        let mut session = ChatSession::new(Arc::new(model));

        let err = get_suggestions(&mut session, Decision::GoOut, "x", tokyo(), true)
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Suggestions { .. }));
        assert_eq!(session.turns(), 0);
    }
}
