//! Date parsing with domain errors.

use chrono::NaiveDate;

use crate::error::DomainError;

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use pokedream_domain::common::parse_date;
/// use chrono::Datelike;
///
/// let date = parse_date("2024-02-05").unwrap();
/// assert_eq!(date.ordinal(), 36);
/// ```
///
/// # Errors
///
/// Returns [`DomainError::Parse`] if the string is not an ISO calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::parse(format!("Invalid date '{}': {}", s, e)))
}
