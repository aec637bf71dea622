//! Ledger use cases.
//!
//! Unlock checks never write. Clients acknowledge what they displayed, and
//! only then are the ids merged into the persisted ledger.

use std::sync::Arc;

use pokedream_domain::{DomainError, RuleCatalog, RuleId, TrainerId, UnlockLedger};
use serde::Serialize;

use crate::infrastructure::ports::{ClockPort, LedgerRepo, LedgerScope, RepoError};
use crate::use_cases::challenge::resolve_challenge;

/// Container for ledger use cases.
pub struct LedgerUseCases {
    pub acknowledge: Arc<AcknowledgeUnlocks>,
    pub view: Arc<ViewLedger>,
}

impl LedgerUseCases {
    pub fn new(acknowledge: Arc<AcknowledgeUnlocks>, view: Arc<ViewLedger>) -> Self {
        Self { acknowledge, view }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeResult {
    pub scope: LedgerScope,
    /// Ids that were not already in the ledger
    pub added: usize,
}

/// Merges presented unlocks into a trainer's ledger.
pub struct AcknowledgeUnlocks {
    challenges: Arc<RuleCatalog>,
    achievements: Arc<RuleCatalog>,
    ledgers: Arc<dyn LedgerRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AcknowledgeUnlocks {
    pub fn new(
        challenges: Arc<RuleCatalog>,
        achievements: Arc<RuleCatalog>,
        ledgers: Arc<dyn LedgerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            challenges,
            achievements,
            ledgers,
            clock,
        }
    }

    /// Idempotent: acknowledging the same ids twice adds nothing the second time.
    ///
    /// Every id must exist in the scope's catalog (for challenges, today's
    /// generated challenge also counts); otherwise nothing is written.
    pub async fn execute(
        &self,
        trainer: &TrainerId,
        scope: LedgerScope,
        ids: &[RuleId],
    ) -> Result<AcknowledgeResult, LedgerError> {
        for id in ids {
            match scope {
                LedgerScope::Challenges => {
                    resolve_challenge(&self.challenges, self.clock.as_ref(), id.as_str())?;
                }
                LedgerScope::Achievements => {
                    self.achievements.rule_by_id(id.as_str())?;
                }
            }
        }

        let added = if ids.is_empty() {
            0
        } else {
            self.ledgers.grant(trainer, scope, ids).await?
        };

        tracing::info!(
            trainer_id = %trainer,
            scope = %scope,
            requested = ids.len(),
            added,
            "Acknowledged unlocks"
        );
        Ok(AcknowledgeResult { scope, added })
    }
}

/// Reads a trainer's ledger for one scope.
pub struct ViewLedger {
    ledgers: Arc<dyn LedgerRepo>,
}

impl ViewLedger {
    pub fn new(ledgers: Arc<dyn LedgerRepo>) -> Self {
        Self { ledgers }
    }

    pub async fn execute(
        &self,
        trainer: &TrainerId,
        scope: LedgerScope,
    ) -> Result<UnlockLedger, LedgerError> {
        Ok(self.ledgers.get(trainer, scope).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ledger_store::InMemoryLedgerRepo;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockLedgerRepo;
    use chrono::{TimeZone, Utc};
    use pokedream_domain::builtin;

    fn use_case(ledgers: Arc<dyn LedgerRepo>) -> AcknowledgeUnlocks {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap();
        AcknowledgeUnlocks::new(
            Arc::new(builtin::daily_challenges().unwrap()),
            Arc::new(builtin::achievements().unwrap()),
            ledgers,
            Arc::new(FixedClock(now)),
        )
    }

    fn ids(raw: &[&str]) -> Vec<RuleId> {
        raw.iter().map(|id| RuleId::new(*id)).collect()
    }

    #[tokio::test]
    async fn acknowledge_is_idempotent() {
        let ledgers = Arc::new(InMemoryLedgerRepo::new());
        let acknowledge = use_case(ledgers.clone());
        let ash = TrainerId::new("ash");

        let first = acknowledge
            .execute(&ash, LedgerScope::Achievements, &ids(&["first", "five"]))
            .await
            .unwrap();
        let second = acknowledge
            .execute(&ash, LedgerScope::Achievements, &ids(&["first", "five"]))
            .await
            .unwrap();

        assert_eq!(first.added, 2);
        assert_eq!(second.added, 0);
        let ledger = ViewLedger::new(ledgers)
            .execute(&ash, LedgerScope::Achievements)
            .await
            .unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[tokio::test]
    async fn unknown_id_writes_nothing() {
        // No grant expectation: any write would panic the mock
        let ledgers = MockLedgerRepo::new();
        let acknowledge = use_case(Arc::new(ledgers));

        let result = acknowledge
            .execute(
                &TrainerId::new("ash"),
                LedgerScope::Achievements,
                &ids(&["first", "bug-steel"]),
            )
            .await;

        assert!(matches!(
            result,
            Err(LedgerError::Domain(DomainError::RuleNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn todays_generated_challenge_can_be_acknowledged() {
        let ledgers = Arc::new(InMemoryLedgerRepo::new());
        let acknowledge = use_case(ledgers.clone());
        let ash = TrainerId::new("ash");

        let result = acknowledge
            .execute(&ash, LedgerScope::Challenges, &ids(&["daily_2024-05-20"]))
            .await
            .unwrap();
        assert_eq!(result.added, 1);

        let yesterday = acknowledge
            .execute(&ash, LedgerScope::Challenges, &ids(&["daily_2024-05-19"]))
            .await;
        assert!(matches!(
            yesterday,
            Err(LedgerError::Domain(DomainError::RuleNotFound { .. }))
        ));

        // Generated ids only belong to the challenge ledger
        let wrong_scope = acknowledge
            .execute(&ash, LedgerScope::Achievements, &ids(&["daily_2024-05-20"]))
            .await;
        assert!(wrong_scope.is_err());
    }

    #[tokio::test]
    async fn empty_acknowledgement_skips_storage() {
        let acknowledge = use_case(Arc::new(MockLedgerRepo::new()));

        let result = acknowledge
            .execute(&TrainerId::new("ash"), LedgerScope::Challenges, &[])
            .await
            .unwrap();

        assert_eq!(result.added, 0);
    }
}
