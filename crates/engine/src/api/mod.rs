//! Entry-point types: the JSON records the backend sends us and the views we
//! send back.

pub mod records;
pub mod views;

pub use records::{CreationRecord, StatsRecord};
pub use views::RuleView;
