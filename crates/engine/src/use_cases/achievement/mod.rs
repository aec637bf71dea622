//! Achievement use cases.

use std::sync::Arc;

use pokedream_domain::{
    progress, statuses, unlock_delta, AggregateStats, Progress, Rule, RuleCatalog, Subject,
    TrainerId,
};
use serde::Serialize;

use crate::infrastructure::ports::{LedgerRepo, LedgerScope, RepoError};

/// Container for achievement use cases.
pub struct AchievementUseCases {
    pub check: Arc<CheckAchievements>,
    pub progress: Arc<AchievementProgress>,
}

impl AchievementUseCases {
    pub fn new(check: Arc<CheckAchievements>, progress: Arc<AchievementProgress>) -> Self {
        Self { check, progress }
    }
}

/// Finds achievements a trainer has earned but not yet been shown.
pub struct CheckAchievements {
    catalog: Arc<RuleCatalog>,
    ledgers: Arc<dyn LedgerRepo>,
}

impl CheckAchievements {
    pub fn new(catalog: Arc<RuleCatalog>, ledgers: Arc<dyn LedgerRepo>) -> Self {
        Self { catalog, ledgers }
    }

    pub async fn execute(
        &self,
        trainer: &TrainerId,
        stats: AggregateStats,
    ) -> Result<Vec<Rule>, AchievementError> {
        let ledger = self.ledgers.get(trainer, LedgerScope::Achievements).await?;
        let subject = Subject::from(stats);

        let unlocked: Vec<Rule> = unlock_delta(self.catalog.as_ref(), &subject, &ledger)
            .into_iter()
            .cloned()
            .collect();

        if !unlocked.is_empty() {
            tracing::info!(
                trainer_id = %trainer,
                unlocked = unlocked.len(),
                "New achievements available"
            );
        }
        Ok(unlocked)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    #[serde(flatten)]
    pub achievement: Rule,
    pub unlocked: bool,
}

/// Profile page view: every achievement with its state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementProgressResult {
    pub progress: Progress,
    pub achievements: Vec<AchievementStatus>,
}

/// Computes achievement state from stats alone, independent of any ledger.
pub struct AchievementProgress {
    catalog: Arc<RuleCatalog>,
}

impl AchievementProgress {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, stats: AggregateStats) -> AchievementProgressResult {
        let subject = Subject::from(stats);
        let achievements = statuses(self.catalog.as_ref(), &subject)
            .into_iter()
            .map(|status| AchievementStatus {
                achievement: status.rule.clone(),
                unlocked: status.unlocked,
            })
            .collect();

        AchievementProgressResult {
            progress: progress(self.catalog.as_ref(), &subject),
            achievements,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AchievementError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockLedgerRepo;
    use mockall::predicate::*;
    use pokedream_domain::{builtin, UnlockLedger};

    fn achievements() -> Arc<RuleCatalog> {
        Arc::new(builtin::achievements().unwrap())
    }

    fn ids(rules: &[Rule]) -> Vec<&str> {
        rules.iter().map(|r| r.id().as_str()).collect()
    }

    #[tokio::test]
    async fn five_fire_creations_unlock_milestones_and_fan() {
        let mut ledgers = MockLedgerRepo::new();
        ledgers
            .expect_get()
            .with(eq(TrainerId::new("ash")), eq(LedgerScope::Achievements))
            .times(1)
            .returning(|_, _| Ok(UnlockLedger::new()));

        let use_case = CheckAchievements::new(achievements(), Arc::new(ledgers));
        let stats = AggregateStats::new(5, 0).with_category("Fire", 5);

        let unlocked = use_case.execute(&TrainerId::new("ash"), stats).await.unwrap();

        assert_eq!(ids(&unlocked), vec!["first", "five", "fire_fan"]);
    }

    #[tokio::test]
    async fn granted_achievements_are_not_repeated() {
        let mut ledgers = MockLedgerRepo::new();
        ledgers
            .expect_get()
            .returning(|_, _| Ok(["first", "five", "fire_fan"].into_iter().collect()));

        let use_case = CheckAchievements::new(achievements(), Arc::new(ledgers));
        let stats = AggregateStats::new(5, 0).with_category("Fire", 5);

        let unlocked = use_case.execute(&TrainerId::new("ash"), stats).await.unwrap();

        assert!(unlocked.is_empty());
    }

    #[tokio::test]
    async fn threshold_boundary() {
        let mut ledgers = MockLedgerRepo::new();
        ledgers
            .expect_get()
            .returning(|_, _| Ok(["first"].into_iter().collect()));
        let use_case = CheckAchievements::new(achievements(), Arc::new(ledgers));
        let ash = TrainerId::new("ash");

        let at_four = use_case.execute(&ash, AggregateStats::new(4, 0)).await.unwrap();
        let at_five = use_case.execute(&ash, AggregateStats::new(5, 0)).await.unwrap();

        assert!(at_four.is_empty());
        assert_eq!(ids(&at_five), vec!["five"]);
    }

    #[test]
    fn progress_lists_every_achievement() {
        let use_case = AchievementProgress::new(achievements());

        let result = use_case.execute(AggregateStats::new(10, 1));

        assert_eq!(result.progress.total, 20);
        assert_eq!(result.progress.unlocked, 4); // first, five, ten, shiny
        assert_eq!(result.achievements.len(), 20);
        assert!(result.achievements[2].unlocked);
        assert!(!result.achievements[3].unlocked);
    }

    #[test]
    fn progress_status_serializes_flat() {
        let use_case = AchievementProgress::new(achievements());
        let result = use_case.execute(AggregateStats::new(1, 0));

        let json = serde_json::to_value(&result.achievements[0]).unwrap();

        assert_eq!(json["id"], "first");
        assert_eq!(json["unlocked"], true);
        assert_eq!(json["reward"]["icon"], "🥚");
    }
}
