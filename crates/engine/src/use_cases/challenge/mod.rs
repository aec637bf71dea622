//! Challenge use cases.
//!
//! The flow is:
//! 1. Client asks for today's challenge (TodaysChallenge)
//! 2. Trainer creates something and submits it (CheckCreation)
//! 3. Client shows the unlocked challenges, then acknowledges them
//!    (ledger::AcknowledgeUnlocks)
//!
//! The generated daily challenge (GenerateDailyChallenge) runs alongside the
//! rotation. Its `daily_<date>` id is accepted wherever a challenge id is,
//! but only on its own UTC day.

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};
use pokedream_domain::{
    pick_random, seconds_until_reset, select_daily, unlock_delta, CreationSubject, DomainError,
    Rule, RuleCatalog, RuleId, Subject, TrainerId,
};
use serde::Serialize;

mod generate;

pub use generate::{
    resolve_challenge, GenerateDailyChallenge, GeneratedChallenge, GENERATED_ID_PREFIX,
};

use crate::infrastructure::ports::{ClockPort, LedgerRepo, LedgerScope, RandomPort, RepoError};

/// Container for challenge use cases.
pub struct ChallengeUseCases {
    pub today: Arc<TodaysChallenge>,
    pub check: Arc<CheckCreation>,
    pub random: Arc<RandomChallenge>,
    pub generate: Arc<GenerateDailyChallenge>,
    pub history: Arc<ChallengeHistory>,
}

impl ChallengeUseCases {
    pub fn new(
        today: Arc<TodaysChallenge>,
        check: Arc<CheckCreation>,
        random: Arc<RandomChallenge>,
        generate: Arc<GenerateDailyChallenge>,
        history: Arc<ChallengeHistory>,
    ) -> Self {
        Self {
            today,
            check,
            random,
            generate,
            history,
        }
    }
}

/// Today's entry of the rotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaysChallengeResult {
    pub challenge: Rule,
    /// Local calendar date the challenge was selected for
    pub date: NaiveDate,
    /// Only set when `date` is the current local date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_until_reset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_label: Option<&'static str>,
    pub difficulty_color: &'static str,
    /// Only known when a trainer was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Selects the daily challenge for the configured timezone's current date.
pub struct TodaysChallenge {
    catalog: Arc<RuleCatalog>,
    ledgers: Arc<dyn LedgerRepo>,
    clock: Arc<dyn ClockPort>,
    utc_offset: FixedOffset,
}

impl TodaysChallenge {
    pub fn new(
        catalog: Arc<RuleCatalog>,
        ledgers: Arc<dyn LedgerRepo>,
        clock: Arc<dyn ClockPort>,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            catalog,
            ledgers,
            clock,
            utc_offset,
        }
    }

    /// Challenge for `date`, or for the current local date when `None`.
    pub async fn execute(
        &self,
        trainer: Option<&TrainerId>,
        date: Option<NaiveDate>,
    ) -> Result<TodaysChallengeResult, ChallengeError> {
        let local = self
            .clock
            .now()
            .with_timezone(&self.utc_offset)
            .naive_local();
        let date = date.unwrap_or(local.date());
        let seconds_until_reset = (date == local.date()).then(|| seconds_until_reset(local));
        let challenge = select_daily(self.catalog.all_rules(), date)?;

        let completed = match trainer {
            Some(trainer) => {
                let ledger = self.ledgers.get(trainer, LedgerScope::Challenges).await?;
                Some(ledger.contains(challenge.id().as_str()))
            }
            None => None,
        };

        Ok(TodaysChallengeResult {
            challenge: challenge.clone(),
            date,
            seconds_until_reset,
            difficulty_label: challenge.reward().difficulty_label(),
            difficulty_color: challenge.reward().difficulty_color(),
            completed,
        })
    }
}

/// Checks one creation against the challenge catalog.
///
/// Read-only: the returned challenges are granted later through
/// `AcknowledgeUnlocks`, once the client has shown them.
pub struct CheckCreation {
    catalog: Arc<RuleCatalog>,
    ledgers: Arc<dyn LedgerRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CheckCreation {
    pub fn new(
        catalog: Arc<RuleCatalog>,
        ledgers: Arc<dyn LedgerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            catalog,
            ledgers,
            clock,
        }
    }

    /// Challenges newly completed by `creation`.
    ///
    /// With `challenge_id`, only that challenge is considered (the one the
    /// trainer was working on, possibly today's generated one); otherwise
    /// the whole catalog is scanned.
    pub async fn execute(
        &self,
        trainer: &TrainerId,
        creation: CreationSubject,
        challenge_id: Option<&str>,
    ) -> Result<Vec<Rule>, ChallengeError> {
        let ledger = self.ledgers.get(trainer, LedgerScope::Challenges).await?;
        let subject = Subject::from(creation);

        let completed: Vec<Rule> = match challenge_id {
            Some(id) => {
                let rule = resolve_challenge(&self.catalog, self.clock.as_ref(), id)?;
                unlock_delta(std::iter::once(&rule), &subject, &ledger)
                    .into_iter()
                    .cloned()
                    .collect()
            }
            None => unlock_delta(self.catalog.as_ref(), &subject, &ledger)
                .into_iter()
                .cloned()
                .collect(),
        };

        tracing::info!(
            trainer_id = %trainer,
            challenge_id = challenge_id.unwrap_or("*"),
            completed = completed.len(),
            "Checked creation against challenges"
        );
        Ok(completed)
    }
}

/// Picks any challenge, for trainers who want something other than today's.
pub struct RandomChallenge {
    catalog: Arc<RuleCatalog>,
    random: Arc<dyn RandomPort>,
}

impl RandomChallenge {
    pub fn new(catalog: Arc<RuleCatalog>, random: Arc<dyn RandomPort>) -> Self {
        Self { catalog, random }
    }

    pub fn execute(&self) -> Result<Rule, ChallengeError> {
        let rule = pick_random(self.catalog.all_rules(), |len| self.random.gen_index(len))?;
        Ok(rule.clone())
    }
}

/// A trainer's completed challenges, rotation and generated alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeHistoryResult {
    pub completions: Vec<RuleId>,
    pub total_completed: usize,
    /// How many of `completions` were generated daily challenges
    pub generated_completed: usize,
}

pub struct ChallengeHistory {
    ledgers: Arc<dyn LedgerRepo>,
}

impl ChallengeHistory {
    pub fn new(ledgers: Arc<dyn LedgerRepo>) -> Self {
        Self { ledgers }
    }

    pub async fn execute(
        &self,
        trainer: &TrainerId,
    ) -> Result<ChallengeHistoryResult, ChallengeError> {
        let ledger = self.ledgers.get(trainer, LedgerScope::Challenges).await?;
        let completions: Vec<RuleId> = ledger.iter().cloned().collect();
        let generated_completed = completions
            .iter()
            .filter(|id| id.as_str().starts_with(GENERATED_ID_PREFIX))
            .count();

        Ok(ChallengeHistoryResult {
            total_completed: completions.len(),
            generated_completed,
            completions,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
