//! Value objects for rules and the records they are evaluated against.

mod condition;
mod difficulty;
mod ledger;
mod reward;
mod subject;

pub use condition::{Condition, Counter};
pub use difficulty::Difficulty;
pub use ledger::UnlockLedger;
pub use reward::Reward;
pub use subject::{AggregateStats, CreationSubject, Subject, RARE_FLAG};
