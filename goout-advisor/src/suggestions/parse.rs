//! Lenient parser for `---ITEM---` delimited suggestion text.
//!
//! Each field is read from the first line carrying its label, up to the end
//! of that line. Values spanning several lines are cut at the first newline.

use super::prompt::ITEM_SEPARATOR;
use goout_core::{PlaceSuggestion, DEFAULT_EMOJI};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NAME: LazyLock<Regex> = LazyLock::new(|| field_regex("名稱"));
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| field_regex("(?:地址|類別)"));
static EMOJI: LazyLock<Regex> = LazyLock::new(|| field_regex("Emoji"));
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| field_regex("描述"));

fn field_regex(label: &str) -> Regex {
    Regex::new(&format!("{label}：(.*?)(?:\n|$)")).expect("field pattern is valid")
}

fn capture(re: &Regex, block: &str) -> Option<String> {
    re.captures(block)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Parse one block. `None` when it has no name line.
pub fn parse_block(block: &str) -> Option<PlaceSuggestion> {
    let name = capture(&NAME, block)?;
    Some(PlaceSuggestion::new(
        name,
        capture(&ADDRESS, block).unwrap_or_default(),
        capture(&EMOJI, block).unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
        capture(&DESCRIPTION, block).unwrap_or_default(),
    ))
}

/// Parse every named block in `text`, in order.
///
/// Blocks without a name are dropped. Nothing is capped, sorted or
/// de-duplicated.
pub fn parse_suggestions(text: &str) -> Vec<PlaceSuggestion> {
    let mut suggestions = Vec::new();
    for block in text.split(ITEM_SEPARATOR) {
        if block.trim().is_empty() {
            continue;
        }
        match parse_block(block) {
            Some(suggestion) => suggestions.push(suggestion),
            None => debug!(block = block.trim(), "dropping suggestion block without a name"),
        }
    }
    suggestions
}
