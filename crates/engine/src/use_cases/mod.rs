//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Catalogs are shared
//! as `Arc<RuleCatalog>`; everything with side effects goes through a port.

pub mod achievement;
pub mod challenge;
pub mod ledger;

pub use achievement::AchievementUseCases;
pub use challenge::ChallengeUseCases;
pub use ledger::LedgerUseCases;
