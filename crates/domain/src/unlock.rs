//! Unlock delta computation
//!
//! Every function here is a full scan over the supplied rules. Catalogs hold a
//! few dozen rules, so there is no incremental index.

use serde::Serialize;

use crate::entities::Rule;
use crate::value_objects::{Subject, UnlockLedger};

/// Rules satisfied by `subject` that are not yet in `ledger`.
///
/// The result is a subsequence of `rules` in the same order. The ledger is
/// not touched; callers grant the returned ids once they have been shown, and
/// a repeated call with the merged ledger returns nothing.
pub fn unlock_delta<'a, I>(rules: I, subject: &Subject, ledger: &UnlockLedger) -> Vec<&'a Rule>
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules
        .into_iter()
        .filter(|rule| !ledger.contains(rule.id().as_str()))
        .filter(|rule| rule.is_satisfied_by(subject))
        .collect()
}

/// Rules satisfied by `current` but not by `previous`.
///
/// Snapshot diff for callers that keep no ledger, only the previous stats.
/// A missing `previous` counts as nothing satisfied.
pub fn newly_satisfied<'a, I>(
    rules: I,
    previous: Option<&Subject>,
    current: &Subject,
) -> Vec<&'a Rule>
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules
        .into_iter()
        .filter(|rule| rule.is_satisfied_by(current))
        .filter(|rule| !previous.is_some_and(|p| rule.is_satisfied_by(p)))
        .collect()
}

/// Unlocked/total summary for a profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub unlocked: usize,
    pub total: usize,
}

/// One rule with whether the subject currently satisfies it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleStatus<'a> {
    pub rule: &'a Rule,
    pub unlocked: bool,
}

/// Status of every rule, in order
pub fn statuses<'a, I>(rules: I, subject: &Subject) -> Vec<RuleStatus<'a>>
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules
        .into_iter()
        .map(|rule| RuleStatus {
            rule,
            unlocked: rule.is_satisfied_by(subject),
        })
        .collect()
}

pub fn progress<'a, I>(rules: I, subject: &Subject) -> Progress
where
    I: IntoIterator<Item = &'a Rule>,
{
    let statuses = statuses(rules, subject);
    Progress {
        unlocked: statuses.iter().filter(|s| s.unlocked).count(),
        total: statuses.len(),
    }
}
