//! Domain entities

mod catalog;
mod rule;

pub use catalog::RuleCatalog;
pub use rule::Rule;
