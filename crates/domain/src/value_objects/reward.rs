use serde::{Deserialize, Serialize};

use super::Difficulty;

/// What a rule grants when it unlocks. The evaluator never reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Experience points
    #[serde(default)]
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Title shown in the unlock popup, when it differs from the rule title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_title: Option<String>,
}

impl Reward {
    pub fn challenge(difficulty: Difficulty, points: u32) -> Self {
        Self {
            difficulty: Some(difficulty),
            points,
            ..Self::default()
        }
    }

    pub fn badge(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::default()
        }
    }

    /// Badge label for the difficulty, if any
    pub fn difficulty_label(&self) -> Option<&'static str> {
        self.difficulty.map(|d| d.label())
    }

    /// Badge colour, neutral grey when no difficulty is set
    pub fn difficulty_color(&self) -> &'static str {
        Difficulty::color_or_fallback(self.difficulty)
    }
}
