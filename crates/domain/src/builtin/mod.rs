//! Built-in rule catalogs shipped with the game.
//!
//! Both functions rebuild the catalog on every call; callers load them once at
//! startup and share the result.

pub mod achievements;
pub mod challenges;

pub use achievements::achievements;
pub use challenges::daily_challenges;
