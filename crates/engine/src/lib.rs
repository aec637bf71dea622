//! PokeDream Engine library.
//!
//! Wires the pure rule engine in `pokedream-domain` to storage, clocks and
//! configuration.
//!
//! ## Structure
//!
//! - `use_cases/` - Challenge, achievement and ledger orchestration
//! - `infrastructure/` - Ports and their implementations
//! - `api/` - Backend JSON records
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
