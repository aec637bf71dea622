//! Small pure helpers shared by the domain and the engine.
//!
//! No I/O and no clocks: callers pass in whatever "now" they have.

pub mod datetime;
pub mod text;

pub use datetime::parse_date;
pub use text::none_if_blank;
