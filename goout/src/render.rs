//! Plain-text and JSON rendering for the terminal.

use goout_advisor::DecisionCycle;
use goout_core::presets::PRESETS;
use goout_core::{Coordinates, DecisionResult, SuggestionSet};
use serde::Serialize;
use std::fmt::Write;

/// Decision card.
pub fn decision(result: &DecisionResult) -> String {
    format!(
        "AI 說：{}！\n\n{}\n\n建議活動：{}\n",
        result.decision, result.reason, result.activity
    )
}

/// Suggestion list with one link per entry, then the sources.
pub fn suggestions(set: &SuggestionSet) -> String {
    if set.is_empty() {
        return "找不到推薦建議，試試重新整理？\n".to_string();
    }

    let mut out = String::new();
    for (i, s) in set.suggestions.iter().enumerate() {
        let _ = writeln!(out, "{}. {} {}", i + 1, s.emoji, s.name);
        if !s.address.is_empty() {
            let _ = writeln!(out, "   {}", s.address);
        }
        if !s.description.is_empty() {
            let _ = writeln!(out, "   {}", s.description);
        }
        let _ = writeln!(out, "   {}", s.href());
    }

    if !set.grounding_links.is_empty() {
        out.push_str("\n資料來源：\n");
        for link in &set.grounding_links {
            let _ = writeln!(out, "- {} <{}>", link.title, link.uri);
        }
    }
    out
}

/// Preset keys and their labels.
pub fn presets() -> String {
    PRESETS
        .iter()
        .map(|p| format!("{:<10} {}", p.key, p.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// REPL help line.
pub const COMMANDS: &str = "[s] 推薦  [r] 換一批  [c] 分享文字  [n] 重新開始  [q] 離開";

/// Machine-readable cycle summary.
#[derive(Debug, Serialize)]
pub struct CycleReport<'a> {
    /// Cycle identifier.
    pub cycle: &'a str,
    /// Mood as entered.
    pub mood: &'a str,
    /// Position used.
    pub coords: Coordinates,
    /// Weather description.
    pub weather: &'a str,
    /// The decision.
    #[serde(flatten)]
    pub result: &'a DecisionResult,
    /// Latest suggestions, if fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<&'a SuggestionSet>,
}

impl<'a> From<&'a DecisionCycle> for CycleReport<'a> {
    fn from(cycle: &'a DecisionCycle) -> Self {
        Self {
            cycle: cycle.id(),
            mood: cycle.mood(),
            coords: cycle.coords(),
            weather: cycle.weather(),
            result: cycle.result(),
            suggestions: cycle.suggestions(),
        }
    }
}
