//! Conditions - machine-checkable predicates attached to rules
//!
//! Conditions are plain data so catalogs can be authored as JSON. A single
//! dispatch ([`Condition::is_satisfied_by`]) evaluates any variant against a
//! [`Subject`]. Evaluation is total: missing fields read as "not met" and a
//! condition aimed at the other kind of subject simply does not hold.

use serde::{Deserialize, Serialize};

use super::subject::{AggregateStats, CreationSubject, Subject};
use crate::error::DomainError;

/// A predicate over a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "type")]
pub enum Condition {
    // ==========================================================================
    // Creation conditions
    // ==========================================================================
    /// Creation must carry every listed category label (case-insensitive)
    TypeSet { types: Vec<String> },

    /// Creation text must contain at least one keyword as a substring
    /// (case-insensitive, no word boundaries: "rune" matches "underrunestone")
    Keyword { keywords: Vec<String> },

    /// Creation must have the named flag set to `true`
    Flag { flag: String },

    /// Holds for every creation; used where a challenge can't be verified
    AnyCreation,

    // ==========================================================================
    // Aggregate conditions
    // ==========================================================================
    /// Named counter must be at least `at_least` (inclusive)
    Threshold { counter: Counter, at_least: u64 },

    // ==========================================================================
    // Composition
    // ==========================================================================
    /// Every nested condition must hold
    AllOf { conditions: Vec<Condition> },
}

/// Counters readable from [`AggregateStats`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Counter {
    TotalCreations,
    RareCount,
    /// Number of categories present in the per-category breakdown
    DistinctCategories,
    /// Creations of one category; missing categories read as 0
    Category { category: String },
}

impl Counter {
    pub fn category(category: impl Into<String>) -> Self {
        Counter::Category {
            category: category.into(),
        }
    }

    /// Read this counter, defaulting to 0 for anything absent
    pub fn read(&self, stats: &AggregateStats) -> u64 {
        match self {
            Counter::TotalCreations => stats.total_creations,
            Counter::RareCount => stats.rare_count,
            Counter::DistinctCategories => stats.distinct_categories(),
            Counter::Category { category } => stats.category_count(category),
        }
    }

    fn display_name(&self) -> String {
        match self {
            Counter::TotalCreations => "creations".to_string(),
            Counter::RareCount => "shiny creations".to_string(),
            Counter::DistinctCategories => "distinct types".to_string(),
            Counter::Category { category } => format!("{}-type creations", category),
        }
    }
}

impl Condition {
    pub fn types(types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Condition::TypeSet {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Condition::Keyword {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn flag(flag: impl Into<String>) -> Self {
        Condition::Flag { flag: flag.into() }
    }

    pub fn at_least(counter: Counter, at_least: u64) -> Self {
        Condition::Threshold { counter, at_least }
    }

    pub fn all_of(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Condition::AllOf {
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Evaluate this condition against a subject.
    pub fn is_satisfied_by(&self, subject: &Subject) -> bool {
        match self {
            Condition::TypeSet { types } => subject
                .as_creation()
                .is_some_and(|c| has_all_types(c, types)),
            Condition::Keyword { keywords } => subject
                .as_creation()
                .is_some_and(|c| contains_any_keyword(c, keywords)),
            Condition::Flag { flag } => subject.as_creation().is_some_and(|c| c.flag(flag)),
            Condition::AnyCreation => subject.as_creation().is_some(),
            Condition::Threshold { counter, at_least } => subject
                .as_aggregate()
                .is_some_and(|stats| counter.read(stats) >= *at_least),
            Condition::AllOf { conditions } => {
                conditions.iter().all(|c| c.is_satisfied_by(subject))
            }
        }
    }

    /// Validate this condition for inclusion in a catalog.
    ///
    /// Validation rules:
    /// - TypeSet: types must be non-empty and contain non-empty strings
    /// - Keyword: keywords must be non-empty and contain non-empty strings
    /// - Flag: flag name must be non-empty
    /// - AllOf: must be non-empty and every nested condition must validate
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Condition::TypeSet { types } => non_empty_terms("TypeSet", "types", types),
            Condition::Keyword { keywords } => non_empty_terms("Keyword", "keywords", keywords),
            Condition::Flag { flag } => {
                if flag.trim().is_empty() {
                    return Err(DomainError::validation("Flag condition has an empty flag name"));
                }
                Ok(())
            }
            Condition::AnyCreation => Ok(()),
            Condition::Threshold { counter, .. } => match counter {
                Counter::Category { category } if category.trim().is_empty() => Err(
                    DomainError::validation("Threshold condition has an empty category"),
                ),
                _ => Ok(()),
            },
            Condition::AllOf { conditions } => {
                if conditions.is_empty() {
                    return Err(DomainError::validation("AllOf condition has no conditions"));
                }
                conditions.iter().try_for_each(Condition::validate)
            }
        }
    }

    /// Get a display description of this condition
    pub fn description(&self) -> String {
        match self {
            Condition::TypeSet { types } => format!("Has types {}", types.join("/")),
            Condition::Keyword { keywords } => {
                format!("Mentions any of: {}", keywords.join(", "))
            }
            Condition::Flag { flag } => format!("When '{}' is set", flag),
            Condition::AnyCreation => "Any creation".to_string(),
            Condition::Threshold { counter, at_least } => {
                format!("At least {} {}", at_least, counter.display_name())
            }
            Condition::AllOf { conditions } => conditions
                .iter()
                .map(Condition::description)
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

fn has_all_types(creation: &CreationSubject, types: &[String]) -> bool {
    types.iter().all(|t| creation.has_label(t))
}

fn contains_any_keyword(creation: &CreationSubject, keywords: &[String]) -> bool {
    let text = creation.searchable_text().to_lowercase();
    keywords.iter().any(|k| text.contains(&k.to_lowercase()))
}

fn non_empty_terms(variant: &str, field: &str, terms: &[String]) -> Result<(), DomainError> {
    if terms.is_empty() {
        return Err(DomainError::validation(format!(
            "{} condition has no {}",
            variant, field
        )));
    }
    if terms.iter().any(|t| t.trim().is_empty()) {
        return Err(DomainError::validation(format!(
            "{} condition contains an empty entry in {}",
            variant, field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creation(types: &[&str], text: &str) -> Subject {
        CreationSubject::new(types.iter().copied(), text).into()
    }

    fn stats(total: u64) -> Subject {
        AggregateStats::new(total, 0).into()
    }

    #[test]
    fn test_type_set_is_case_insensitive() {
        let condition = Condition::types(["Fire", "Water"]);
        assert!(condition.is_satisfied_by(&creation(&["fire", "WATER"], "")));
        assert!(!condition.is_satisfied_by(&creation(&["fire"], "")));
    }

    #[test]
    fn test_type_set_allows_extra_labels() {
        let condition = Condition::types(["Bug"]);
        assert!(condition.is_satisfied_by(&creation(&["Steel", "Bug"], "")));
    }

    #[test]
    fn test_keyword_matches_inside_words() {
        let condition = Condition::keywords(["rune"]);
        assert!(condition.is_satisfied_by(&creation(&[], "underrunestone")));
    }

    #[test]
    fn test_keyword_lowercases_both_sides() {
        let condition = Condition::keywords(["AI", "robot"]);
        assert!(condition.is_satisfied_by(&creation(&[], "An AI companion")));
        assert!(condition.is_satisfied_by(&creation(&[], "ROBOTIC arm")));
        assert!(!condition.is_satisfied_by(&creation(&[], "a quiet pond")));
    }

    #[test]
    fn test_flag_requires_strict_true() {
        let condition = Condition::flag("is_shiny");
        let shiny = CreationSubject::new(["Fire"], "").with_rare(true);
        let plain = CreationSubject::new(["Fire"], "").with_rare(false);
        let missing = CreationSubject::new(["Fire"], "");

        assert!(condition.is_satisfied_by(&shiny.into()));
        assert!(!condition.is_satisfied_by(&plain.into()));
        assert!(!condition.is_satisfied_by(&missing.into()));
    }

    #[test]
    fn test_any_creation_ignores_creation_contents_but_not_kind() {
        let condition = Condition::AnyCreation;
        assert!(condition.is_satisfied_by(&creation(&[], "")));
        assert!(condition.is_satisfied_by(&creation(&["Ghost"], "a lantern")));
        assert!(!condition.is_satisfied_by(&stats(10)));
        assert!(condition.validate().is_ok());

        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "anyCreation" }));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let condition = Condition::at_least(Counter::TotalCreations, 5);
        assert!(!condition.is_satisfied_by(&stats(4)));
        assert!(condition.is_satisfied_by(&stats(5)));
    }

    #[test]
    fn test_threshold_missing_category_reads_zero() {
        let condition = Condition::at_least(Counter::category("Dragon"), 1);
        let subject: Subject = AggregateStats::new(10, 0).with_category("Fire", 10).into();
        assert!(!condition.is_satisfied_by(&subject));
        assert!(Condition::at_least(Counter::category("Dragon"), 0).is_satisfied_by(&subject));
    }

    #[test]
    fn test_distinct_categories_counter() {
        let subject: Subject = AggregateStats::new(3, 0)
            .with_category("Fire", 1)
            .with_category("Water", 1)
            .with_category("Grass", 1)
            .into();
        assert!(Condition::at_least(Counter::DistinctCategories, 3).is_satisfied_by(&subject));
        assert!(!Condition::at_least(Counter::DistinctCategories, 4).is_satisfied_by(&subject));
    }

    #[test]
    fn test_mismatched_subject_never_holds() {
        assert!(!Condition::at_least(Counter::TotalCreations, 0)
            .is_satisfied_by(&creation(&["Fire"], "")));
        assert!(!Condition::types(["Fire"]).is_satisfied_by(&stats(100)));
    }

    #[test]
    fn test_all_of_requires_every_part() {
        let condition = Condition::all_of([
            Condition::types(["Fire", "Water"]),
            Condition::keywords(["steam"]),
        ]);
        assert!(condition.is_satisfied_by(&creation(&["Fire", "Water"], "Steamkettle")));
        assert!(!condition.is_satisfied_by(&creation(&["Fire", "Water"], "Puddle")));
    }

    #[test]
    fn test_validate_rejects_empty_terms() {
        assert!(Condition::types(Vec::<String>::new()).validate().is_err());
        assert!(Condition::keywords([""]).validate().is_err());
        assert!(Condition::flag(" ").validate().is_err());
        assert!(Condition::all_of(Vec::new()).validate().is_err());
        assert!(Condition::at_least(Counter::category(""), 1).validate().is_err());
        assert!(Condition::types(["Ghost", "Fairy"]).validate().is_ok());
    }

    #[test]
    fn test_condition_json_shape() {
        let condition = Condition::at_least(Counter::category("Fire"), 5);
        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "threshold",
                "counter": { "kind": "category", "category": "Fire" },
                "atLeast": 5
            })
        );

        let back: Condition = serde_json::from_value(json).unwrap();
        assert_eq!(back, condition);
    }

    #[test]
    fn test_condition_description() {
        assert_eq!(
            Condition::types(["Bug", "Steel"]).description(),
            "Has types Bug/Steel"
        );
        assert_eq!(
            Condition::at_least(Counter::RareCount, 3).description(),
            "At least 3 shiny creations"
        );
    }
}
