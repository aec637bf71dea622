//! Unlock ledger storage.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use pokedream_domain::{DomainError, RuleId, TrainerId, UnlockLedger};
use serde::{Deserialize, Serialize};

use super::RepoError;

/// Which catalog a ledger entry belongs to. Challenge and achievement ids
/// are tracked separately so they can never shadow each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerScope {
    Challenges,
    Achievements,
}

impl LedgerScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Challenges => "challenges",
            Self::Achievements => "achievements",
        }
    }
}

impl fmt::Display for LedgerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "challenges" | "challenge" => Ok(Self::Challenges),
            "achievements" | "achievement" => Ok(Self::Achievements),
            other => Err(DomainError::parse(format!("Unknown ledger scope: {}", other))),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerRepo: Send + Sync {
    /// The trainer's ledger for `scope`; empty if nothing was ever granted.
    async fn get(&self, trainer: &TrainerId, scope: LedgerScope) -> Result<UnlockLedger, RepoError>;

    /// Merge `ids` into the trainer's ledger. Returns how many were new.
    async fn grant(
        &self,
        trainer: &TrainerId,
        scope: LedgerScope,
        ids: &[RuleId],
    ) -> Result<usize, RepoError>;
}
