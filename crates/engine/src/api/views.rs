//! Rules decorated with presentation hints for clients.

use pokedream_domain::Rule;
use serde::Serialize;

/// A rule plus its difficulty badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleView<'a> {
    #[serde(flatten)]
    pub rule: &'a Rule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_label: Option<&'static str>,
    pub difficulty_color: &'static str,
}

impl<'a> From<&'a Rule> for RuleView<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            rule,
            difficulty_label: rule.reward().difficulty_label(),
            difficulty_color: rule.reward().difficulty_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedream_domain::builtin;

    #[test]
    fn challenge_view_carries_badge_next_to_rule_fields() {
        let challenges = builtin::daily_challenges().unwrap();
        let rule = challenges.rule_by_id("bug-steel").unwrap();

        let json = serde_json::to_value(RuleView::from(rule)).unwrap();

        assert_eq!(json["id"], "bug-steel");
        assert_eq!(json["reward"]["difficulty"], "medium");
        assert_eq!(json["difficultyLabel"], "⭐⭐ Medium");
        assert_eq!(json["difficultyColor"], "#f59e0b");
    }

    #[test]
    fn achievement_view_uses_fallback_color() {
        let achievements = builtin::achievements().unwrap();
        let rule = achievements.rule_by_id("first").unwrap();

        let json = serde_json::to_value(RuleView::from(rule)).unwrap();

        assert!(json.get("difficultyLabel").is_none());
        assert_eq!(json["difficultyColor"], "#6b7280");
    }
}
