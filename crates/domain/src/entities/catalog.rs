//! Rule catalog - the static, ordered list of rules
//!
//! A catalog is built once at startup and never mutated afterwards, so it can
//! be shared freely (`Arc<RuleCatalog>`). Declaration order is significant:
//! when several rules unlock at once they are reported first-declared first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::rule::Rule;
use crate::error::DomainError;

/// Ordered, validated collection of rules with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rule>", into = "Vec<Rule>")]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Build a catalog, rejecting duplicate ids and malformed conditions.
    pub fn new(rules: Vec<Rule>) -> Result<Self, DomainError> {
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    fn validate(rules: &[Rule]) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in rules {
            if rule.id().as_str().trim().is_empty() {
                return Err(DomainError::validation("Rule id cannot be empty"));
            }
            if !seen.insert(rule.id().as_str()) {
                return Err(DomainError::validation(format!(
                    "Duplicate rule id: {}",
                    rule.id()
                )));
            }
            if let Some(condition) = rule.condition() {
                condition.validate().map_err(|e| {
                    DomainError::validation(format!("Rule '{}': {}", rule.id(), e))
                })?;
            }
        }
        Ok(())
    }

    /// Every rule in declaration order
    pub fn all_rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules carrying `tag`, in declaration order. Empty when none match.
    pub fn rules_by_tag(&self, tag: &str) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.has_tag(tag)).collect()
    }

    /// Direct lookup by id
    pub fn rule_by_id(&self, id: &str) -> Result<&Rule, DomainError> {
        self.rules
            .iter()
            .find(|r| r.id().as_str() == id)
            .ok_or_else(|| DomainError::rule_not_found(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Vec<Rule>> for RuleCatalog {
    type Error = DomainError;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

impl From<RuleCatalog> for Vec<Rule> {
    fn from(catalog: RuleCatalog) -> Self {
        catalog.rules
    }
}

impl<'a> IntoIterator for &'a RuleCatalog {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Condition, Counter};

    fn sample() -> RuleCatalog {
        RuleCatalog::new(vec![
            Rule::new("bug-steel", "Industrial Evolution")
                .with_tag("medium")
                .with_condition(Condition::types(["Bug", "Steel"])),
            Rule::new("fire-water", "Elemental Paradox")
                .with_tag("hard")
                .with_condition(Condition::types(["Fire", "Water"])),
            Rule::new("ghost-fairy", "Spectral Blessing")
                .with_tag("medium")
                .with_condition(Condition::types(["Ghost", "Fairy"])),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_rules_keeps_declaration_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.all_rules().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["bug-steel", "fire-water", "ghost-fairy"]);
    }

    #[test]
    fn test_rules_by_tag() {
        let catalog = sample();
        let medium: Vec<&str> = catalog
            .rules_by_tag("medium")
            .into_iter()
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(medium, vec!["bug-steel", "ghost-fairy"]);
        assert!(catalog.rules_by_tag("legendary").is_empty());
    }

    #[test]
    fn test_rule_by_id() {
        let catalog = sample();
        assert_eq!(catalog.rule_by_id("fire-water").unwrap().title(), "Elemental Paradox");
        assert_eq!(
            catalog.rule_by_id("water-fire"),
            Err(DomainError::rule_not_found("water-fire"))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = RuleCatalog::new(vec![
            Rule::new("first", "First Steps"),
            Rule::new("first", "Again"),
        ]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_malformed_condition_rejected() {
        let result = RuleCatalog::new(vec![
            Rule::new("vacuous", "Anything goes").with_condition(Condition::types(Vec::<String>::new()))
        ]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("vacuous"));
    }

    #[test]
    fn test_catalog_deserializes_with_validation() {
        let json = serde_json::json!([
            {
                "id": "five",
                "title": "Budding Trainer",
                "condition": { "type": "threshold", "counter": { "kind": "totalCreations" }, "atLeast": 5 }
            },
            { "id": "five", "title": "Duplicate" }
        ]);
        assert!(serde_json::from_value::<RuleCatalog>(json).is_err());

        let json = serde_json::json!([
            {
                "id": "five",
                "title": "Budding Trainer",
                "condition": { "type": "threshold", "counter": { "kind": "totalCreations" }, "atLeast": 5 }
            }
        ]);
        let catalog: RuleCatalog = serde_json::from_value(json).unwrap();
        assert_eq!(
            catalog.rule_by_id("five").unwrap().condition(),
            Some(&Condition::at_least(Counter::TotalCreations, 5))
        );
    }
}
