//! Daily rotation over a fixed challenge list
//!
//! Selection consumes a calendar date, never a timestamp: the caller decides
//! which timezone "today" is in, so the rollover lands exactly on that local
//! midnight.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::entities::Rule;
use crate::error::DomainError;

/// The rule for `date`: index `(day_of_year - 1) mod len`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyCatalog`] when `catalog` is empty.
pub fn select_daily(catalog: &[Rule], date: NaiveDate) -> Result<&Rule, DomainError> {
    if catalog.is_empty() {
        return Err(DomainError::EmptyCatalog);
    }
    // ordinal0() is day_of_year - 1
    let index = date.ordinal0() as usize % catalog.len();
    Ok(&catalog[index])
}

/// Pick any rule using an injected index source.
///
/// `pick` receives the catalog length and returns an index; out-of-range
/// values wrap. Keeps randomness out of the domain.
pub fn pick_random<F>(catalog: &[Rule], pick: F) -> Result<&Rule, DomainError>
where
    F: FnOnce(usize) -> usize,
{
    if catalog.is_empty() {
        return Err(DomainError::EmptyCatalog);
    }
    let index = pick(catalog.len()) % catalog.len();
    Ok(&catalog[index])
}

/// Whole seconds from `now` until the next midnight of the same clock.
pub fn seconds_until_reset(now: NaiveDateTime) -> u32 {
    let next_midnight = (now.date() + Duration::days(1)).and_time(NaiveTime::MIN);
    // At most 86_400, so the cast cannot truncate
    (next_midnight - now).num_seconds() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(n: usize) -> Vec<Rule> {
        (0..n)
            .map(|i| Rule::new(format!("rule-{}", i), format!("Rule {}", i)))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_select_daily_rotates_and_wraps() {
        let catalog = rules(3);
        assert_eq!(select_daily(&catalog, date(2024, 1, 1)).unwrap().id().as_str(), "rule-0");
        assert_eq!(select_daily(&catalog, date(2024, 1, 2)).unwrap().id().as_str(), "rule-1");
        assert_eq!(select_daily(&catalog, date(2024, 1, 3)).unwrap().id().as_str(), "rule-2");
        assert_eq!(select_daily(&catalog, date(2024, 1, 4)).unwrap().id().as_str(), "rule-0");
    }

    #[test]
    fn test_select_daily_is_deterministic() {
        let catalog = rules(35);
        let day = date(2024, 7, 19);
        assert_eq!(
            select_daily(&catalog, day).unwrap(),
            select_daily(&catalog, day).unwrap()
        );
    }

    #[test]
    fn test_select_daily_restarts_each_year() {
        // 2024 is a leap year: Dec 31 is day 366
        let catalog = rules(7);
        assert_eq!(
            select_daily(&catalog, date(2024, 12, 31)).unwrap().id().as_str(),
            "rule-1"
        );
        assert_eq!(select_daily(&catalog, date(2025, 1, 1)).unwrap().id().as_str(), "rule-0");
    }

    #[test]
    fn test_select_daily_empty_catalog() {
        assert_eq!(
            select_daily(&[], date(2024, 1, 1)),
            Err(DomainError::EmptyCatalog)
        );
    }

    #[test]
    fn test_pick_random_wraps_out_of_range() {
        let catalog = rules(3);
        assert_eq!(pick_random(&catalog, |_| 1).unwrap().id().as_str(), "rule-1");
        assert_eq!(pick_random(&catalog, |len| len + 2).unwrap().id().as_str(), "rule-2");
        assert_eq!(pick_random(&[], |_| 0), Err(DomainError::EmptyCatalog));
    }

    #[test]
    fn test_seconds_until_reset() {
        let now = date(2024, 3, 10).and_hms_opt(23, 59, 30).unwrap();
        assert_eq!(seconds_until_reset(now), 30);

        let midnight = date(2024, 3, 10).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(seconds_until_reset(midnight), 86_400);
    }
}
