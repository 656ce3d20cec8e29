//! Quick-pick mood presets.

use serde::Serialize;

/// A canned mood the user can pick instead of typing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodPreset {
    /// Short key for command-line selection.
    pub key: &'static str,
    /// Chip label.
    pub label: &'static str,
    /// The mood sentence sent to the decision engine.
    pub mood: &'static str,
}

/// Every preset, in display order.
pub static PRESETS: [MoodPreset; 5] = [
    MoodPreset {
        key: "lazy",
        label: "😴 懶懶的",
        mood: "覺得全身沒力，懶懶的，不太想動...",
    },
    MoodPreset {
        key: "stressed",
        label: "😤 壓力山大",
        mood: "工作壓力好大，覺得快爆炸了！",
    },
    MoodPreset {
        key: "happy",
        label: "🥳 超級開心",
        mood: "心情超級好！充滿活力！",
    },
    MoodPreset {
        key: "undecided",
        label: "🤔 猶豫不決",
        mood: "不知道該做什麼，有一點選擇障礙...",
    },
    MoodPreset {
        key: "tired",
        label: "💔 心好累",
        mood: "心情有點低落，覺得心好累...",
    },
];

impl MoodPreset {
    /// Find a preset by key (case-insensitive).
    #[must_use]
    pub fn find(key: &str) -> Option<&'static MoodPreset> {
        PRESETS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
    }
}
