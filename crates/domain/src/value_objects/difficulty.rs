//! Difficulty buckets for challenges and their presentation hints.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Difficulty bucket attached to a challenge reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Legendary,
}

impl Difficulty {
    /// Colour used when the difficulty is absent or unrecognised.
    pub const FALLBACK_COLOR: &'static str = "#6b7280";

    /// Lowercase key, also used as the catalog tag for the bucket
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Legendary => "legendary",
        }
    }

    /// Badge label shown next to a challenge
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "⭐ Easy",
            Difficulty::Medium => "⭐⭐ Medium",
            Difficulty::Hard => "⭐⭐⭐ Hard",
            Difficulty::Legendary => "👑 Legendary",
        }
    }

    /// Hex colour for the badge
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "#22c55e",
            Difficulty::Medium => "#f59e0b",
            Difficulty::Hard => "#ef4444",
            Difficulty::Legendary => "#a855f7",
        }
    }

    /// Colour for an optional difficulty, falling back to neutral grey.
    pub fn color_or_fallback(difficulty: Option<Difficulty>) -> &'static str {
        difficulty
            .map(|d| d.color())
            .unwrap_or(Self::FALLBACK_COLOR)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "legendary" => Ok(Difficulty::Legendary),
            other => Err(DomainError::parse(format!("Unknown difficulty: {}", other))),
        }
    }
}
