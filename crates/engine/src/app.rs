//! Application state and composition.

use std::sync::Arc;

use pokedream_domain::{builtin, RuleCatalog};

use crate::config::EngineConfig;
use crate::infrastructure::{
    catalog_loader::{load_catalog, CatalogLoadError},
    clock::{SystemClock, SystemRandom},
    ledger_store::JsonFileLedgerRepo,
    ports::{ClockPort, LedgerRepo, RandomPort},
};
use crate::use_cases::{
    achievement::{AchievementProgress, CheckAchievements},
    challenge::{
        ChallengeHistory, CheckCreation, GenerateDailyChallenge, RandomChallenge, TodaysChallenge,
    },
    ledger::{AcknowledgeUnlocks, ViewLedger},
    AchievementUseCases, ChallengeUseCases, LedgerUseCases,
};

/// Main application state.
///
/// Holds the loaded catalogs and every use case wired to its ports.
pub struct App {
    pub challenges: Arc<RuleCatalog>,
    pub achievements: Arc<RuleCatalog>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub challenge: ChallengeUseCases,
    pub achievement: AchievementUseCases,
    pub ledger: LedgerUseCases,
}

impl App {
    pub fn new(
        config: &EngineConfig,
        challenges: RuleCatalog,
        achievements: RuleCatalog,
        ledgers: Arc<dyn LedgerRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let challenges = Arc::new(challenges);
        let achievements = Arc::new(achievements);

        let challenge = ChallengeUseCases::new(
            Arc::new(TodaysChallenge::new(
                challenges.clone(),
                ledgers.clone(),
                clock.clone(),
                config.utc_offset,
            )),
            Arc::new(CheckCreation::new(
                challenges.clone(),
                ledgers.clone(),
                clock.clone(),
            )),
            Arc::new(RandomChallenge::new(challenges.clone(), random)),
            Arc::new(GenerateDailyChallenge::new(ledgers.clone(), clock.clone())),
            Arc::new(ChallengeHistory::new(ledgers.clone())),
        );

        let achievement = AchievementUseCases::new(
            Arc::new(CheckAchievements::new(achievements.clone(), ledgers.clone())),
            Arc::new(AchievementProgress::new(achievements.clone())),
        );

        let ledger = LedgerUseCases::new(
            Arc::new(AcknowledgeUnlocks::new(
                challenges.clone(),
                achievements.clone(),
                ledgers.clone(),
                clock,
            )),
            Arc::new(ViewLedger::new(ledgers)),
        );

        Self {
            challenges,
            achievements,
            use_cases: UseCases {
                challenge,
                achievement,
                ledger,
            },
        }
    }

    /// Production wiring: catalogs from config (or built-in), JSON file
    /// ledger, system clock and randomness.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, CatalogLoadError> {
        let challenges =
            load_catalog(config.challenges_path.as_deref(), builtin::daily_challenges).await?;
        let achievements =
            load_catalog(config.achievements_path.as_deref(), builtin::achievements).await?;

        tracing::info!(
            challenges = challenges.len(),
            achievements = achievements.len(),
            ledger_path = %config.ledger_path.display(),
            "Catalogs loaded"
        );

        Ok(Self::new(
            config,
            challenges,
            achievements,
            Arc::new(JsonFileLedgerRepo::new(config.ledger_path.clone())),
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        ))
    }
}
