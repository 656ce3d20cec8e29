//! Follow-up prompts and grounding tools per decision.

use goout_core::{Coordinates, Decision};
use goout_models::{GoogleTool, ToolConfig, TurnOptions};

/// Separator between suggestion blocks.
pub const ITEM_SEPARATOR: &str = "---ITEM---";

const PLACE_FORMAT: &str = "請嚴格依照以下格式列出這 3 個地點，每個地點之間用 \"---ITEM---\" 分隔，不要包含其他前言或結語：

---ITEM---
名稱：[地點名稱]
地址：[大致地址或區域]
Emoji：[代表該地點的一個表情符號]
描述：[簡短吸引人的描述，約 30 字]
---ITEM---
名稱：...
";

const CONTENT_FORMAT: &str = "請嚴格依照以下格式列出這 3 個項目，每個項目之間用 \"---ITEM---\" 分隔，不要包含其他前言或結語：

---ITEM---
名稱：[具體的作品名/活動名]
類別：[例如：科幻電影、義式料理、瑜珈]
Emoji：[代表該項目的一個表情符號]
描述：[簡短吸引人的描述，約 30 字]
---ITEM---
名稱：...
";

/// The follow-up message asking for three suggestions.
///
/// Refresh prompts ask for different items and rely on the session history
/// for what was already suggested.
pub fn suggestion_prompt(
    decision: Decision,
    activity: &str,
    coords: Coordinates,
    is_refresh: bool,
) -> String {
    let (lead, format) = match (decision, is_refresh) {
        (Decision::GoOut, false) => (
            format!(
                "請根據「{activity}」這個活動，並參考使用者目前的位置（緯度 {}、經度 {}），用繁體中文推薦 3 個真實、具體存在且有趣的「地點」。",
                coords.lat, coords.lon
            ),
            PLACE_FORMAT,
        ),
        (Decision::GoOut, true) => (
            format!("請針對同一個活動「{activity}」，再推薦「另外」3 個與剛才「完全不同」的地點。避免重複之前的建議。"),
            PLACE_FORMAT,
        ),
        (Decision::StayHome, false) => (
            format!("既然決定「待在家」，請根據「{activity}」這個活動，推薦 3 個具體的「內容」或「點子」（例如具體的電影片名、書名、食譜名稱、或居家運動項目）。"),
            CONTENT_FORMAT,
        ),
        (Decision::StayHome, true) => (
            format!("請針對同一個居家活動主題「{activity}」，再推薦「另外」3 個與剛才「完全不同」的具體作品或點子（例如不同的電影、書名、食譜或遊戲）。"),
            CONTENT_FORMAT,
        ),
    };
    format!("{lead}\n\n{format}")
}

/// Grounding for the follow-up turn.
///
/// Going out uses maps retrieval biased toward `coords`; staying home uses
/// web search and sends no location.
pub fn grounding_options(decision: Decision, coords: Coordinates) -> TurnOptions {
    match decision {
        Decision::GoOut => TurnOptions::new()
            .with_tool(GoogleTool::google_maps())
            .with_tool_config(ToolConfig::near(coords)),
        Decision::StayHome => TurnOptions::new().with_tool(GoogleTool::google_search()),
    }
}
