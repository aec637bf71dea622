//! Rule entity - a named condition and reward pair
//!
//! Rules are either daily challenges (checked against a single creation) or
//! achievements (checked against a trainer's aggregate statistics). Both
//! share this shape; only the condition variants they use differ.

use serde::{Deserialize, Serialize};

use crate::ids::RuleId;
use crate::value_objects::{Condition, Reward, Subject};

/// A challenge or achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    id: RuleId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    hint: String,
    /// Secondary classification (difficulty bucket, group) for filtering
    #[serde(default)]
    tags: Vec<String>,
    /// A rule without a condition is never satisfied
    #[serde(default)]
    condition: Option<Condition>,
    #[serde(default)]
    reward: Reward,
}

impl Rule {
    pub fn new(id: impl Into<RuleId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            hint: String::new(),
            tags: Vec::new(),
            condition: None,
            reward: Reward::default(),
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    // === Builder Methods ===

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.reward = reward;
        self
    }

    /// Whether this rule's condition holds for the subject.
    ///
    /// Total: rules with no condition are never satisfied.
    pub fn is_satisfied_by(&self, subject: &Subject) -> bool {
        self.condition
            .as_ref()
            .is_some_and(|c| c.is_satisfied_by(subject))
    }
}
