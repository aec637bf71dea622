//! Engine configuration from environment variables.

use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};

pub const DEFAULT_LEDGER_PATH: &str = "data/unlock_ledger.json";

/// Runtime settings. Every field has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON file holding every trainer's unlock ledgers
    pub ledger_path: PathBuf,
    /// Optional override for the built-in daily challenge list
    pub challenges_path: Option<PathBuf>,
    /// Optional override for the built-in achievement list
    pub achievements_path: Option<PathBuf>,
    /// Timezone whose calendar date decides "today" for the rotation
    pub utc_offset: FixedOffset,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
            challenges_path: None,
            achievements_path: None,
            utc_offset: utc(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let utc_offset = match get("POKEDREAM_UTC_OFFSET_MINUTES") {
            Some(raw) => parse_offset_minutes(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    "Invalid POKEDREAM_UTC_OFFSET_MINUTES, falling back to UTC"
                );
                utc()
            }),
            None => utc(),
        };

        Self {
            ledger_path: get("POKEDREAM_LEDGER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_PATH)),
            challenges_path: get("POKEDREAM_CHALLENGES_PATH").map(PathBuf::from),
            achievements_path: get("POKEDREAM_ACHIEVEMENTS_PATH").map(PathBuf::from),
            utc_offset,
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Minutes east of UTC, within chrono's +/- 24h range.
fn parse_offset_minutes(raw: &str) -> Option<FixedOffset> {
    let minutes: i32 = raw.parse().ok()?;
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}
