//! PokeDream domain: rule catalogs, condition evaluation, unlock deltas, and
//! the daily challenge rotation.
//!
//! Everything here is pure. Persistence of unlock ledgers, clocks, and
//! randomness live in `pokedream-engine`.

pub mod builtin;
pub mod common;
pub mod daily;
pub mod entities;
pub mod error;
pub mod ids;
pub mod unlock;
pub mod value_objects;

pub use daily::{pick_random, seconds_until_reset, select_daily};
pub use entities::{Rule, RuleCatalog};
pub use error::DomainError;
pub use ids::{RuleId, TrainerId};
pub use unlock::{newly_satisfied, progress, statuses, unlock_delta, Progress, RuleStatus};
pub use value_objects::{
    AggregateStats, Condition, Counter, CreationSubject, Difficulty, Reward, Subject,
    UnlockLedger, RARE_FLAG,
};
