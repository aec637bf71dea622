//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Unlock ledger persistence (could swap the JSON file for a database)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{LedgerRepo, LedgerScope};
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use repos::MockLedgerRepo;
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
