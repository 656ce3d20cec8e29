//! Fixed prompt text and the decision response schema.

use goout_core::{Coordinates, Decision};
use serde_json::{json, Value};

/// Persona for the decision session.
pub const GUIDE_PERSONA: &str = "你是一位友善且帶點奇幻風格的在地嚮導，你的目標是幫助使用者決定今天是否該出門。你的回答必須使用繁體中文，並且總是充滿創意和說服力。你會同時考慮使用者提供的心情和天氣狀況。如果使用者後續詢問可以去哪裡，請根據你先前建議的活動以及使用者提供的地理位置，來推薦真實、具體的地點。";

/// Ask for a casual weather description at `coords`.
pub fn weather_prompt(coords: Coordinates) -> String {
    format!(
        "請用繁體中文，以輕鬆、口語化的方式，簡要描述在緯度 {}、經度 {} 的目前天氣狀況。例如：「天氣有點陰陰的，可能隨時會下雨喔！」或「是個陽光普照的好日子！」。",
        coords.lat, coords.lon
    )
}

/// The single decision question.
pub fn decision_prompt(input: &str) -> String {
    format!("基於以下因素：「{input}」，我今天應該出門還是待在家？")
}

/// Mood and weather combined into one decision input.
pub fn combined_input(mood: &str, weather: &str) -> String {
    format!("我的心情：{mood}。 目前天氣：{weather}")
}

/// Response schema for the decision turn.
pub fn decision_schema() -> Value {
    let go_out = Decision::GoOut.label();
    let stay_home = Decision::StayHome.label();
    json!({
        "type": "OBJECT",
        "properties": {
            "decision": {
                "type": "STRING",
                "enum": Decision::labels(),
                "description": format!(
                    "The final decision: '{go_out}' (Go Out) or '{stay_home}' (Stay Home)."
                )
            },
            "reason": {
                "type": "STRING",
                "description": "A creative, fun, and persuasive explanation for the decision, written in Traditional Chinese. Be encouraging and slightly whimsical."
            },
            "activity": {
                "type": "STRING",
                "description": "A short, suggested activity that fits the decision, written in Traditional Chinese. For example, '去附近的咖啡廳看本書' or '窩在沙發上看一部好電影'."
            }
        },
        "required": ["decision", "reason", "activity"]
    })
}
