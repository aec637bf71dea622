//! Subjects - the records a rule condition is tested against
//!
//! A subject is built fresh by the caller for every evaluation. Challenges are
//! checked against a single creation; achievements against a trainer's
//! aggregate statistics.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Flag set on creations that rolled the rare ("shiny") variant
pub const RARE_FLAG: &str = "is_shiny";

/// A single creation, reduced to what conditions can inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationSubject {
    category_labels: BTreeSet<String>,
    searchable_text: String,
    #[serde(default)]
    flags: HashMap<String, bool>,
}

impl CreationSubject {
    pub fn new(
        category_labels: impl IntoIterator<Item = impl Into<String>>,
        searchable_text: impl Into<String>,
    ) -> Self {
        Self {
            category_labels: category_labels.into_iter().map(Into::into).collect(),
            searchable_text: searchable_text.into(),
            flags: HashMap::new(),
        }
    }

    /// Builds the searchable text the way the client does: name, description
    /// and concept joined by single spaces, missing parts left empty.
    pub fn from_parts(
        category_labels: impl IntoIterator<Item = impl Into<String>>,
        name: Option<&str>,
        description: Option<&str>,
        concept: Option<&str>,
    ) -> Self {
        let text = format!(
            "{} {} {}",
            name.unwrap_or_default(),
            description.unwrap_or_default(),
            concept.unwrap_or_default()
        );
        Self::new(category_labels, text)
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    pub fn with_rare(self, is_rare: bool) -> Self {
        self.with_flag(RARE_FLAG, is_rare)
    }

    pub fn category_labels(&self) -> &BTreeSet<String> {
        &self.category_labels
    }

    pub fn searchable_text(&self) -> &str {
        &self.searchable_text
    }

    pub fn flags(&self) -> &HashMap<String, bool> {
        &self.flags
    }

    /// Case-insensitive label membership
    pub fn has_label(&self, label: &str) -> bool {
        self.category_labels
            .iter()
            .any(|l| l.to_lowercase() == label.to_lowercase())
    }

    /// Missing flags read as `false`
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

/// A trainer's aggregate creation statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    #[serde(default)]
    pub total_creations: u64,
    #[serde(default)]
    pub rare_count: u64,
    #[serde(default)]
    pub category_counts: HashMap<String, u64>,
}

impl AggregateStats {
    pub fn new(total_creations: u64, rare_count: u64) -> Self {
        Self {
            total_creations,
            rare_count,
            category_counts: HashMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>, count: u64) -> Self {
        self.category_counts.insert(category.into(), count);
        self
    }

    /// Count for one category, 0 when the category was never created.
    /// Keys are matched exactly, as the stats backend reports them.
    pub fn category_count(&self, category: &str) -> u64 {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    /// Number of categories present in the breakdown
    pub fn distinct_categories(&self) -> u64 {
        self.category_counts.len() as u64
    }
}

/// The record handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Subject {
    Creation(CreationSubject),
    Aggregate(AggregateStats),
}

impl Subject {
    pub fn as_creation(&self) -> Option<&CreationSubject> {
        match self {
            Subject::Creation(c) => Some(c),
            Subject::Aggregate(_) => None,
        }
    }

    pub fn as_aggregate(&self) -> Option<&AggregateStats> {
        match self {
            Subject::Aggregate(a) => Some(a),
            Subject::Creation(_) => None,
        }
    }
}

impl From<CreationSubject> for Subject {
    fn from(value: CreationSubject) -> Self {
        Subject::Creation(value)
    }
}

impl From<AggregateStats> for Subject {
    fn from(value: AggregateStats) -> Self {
        Subject::Aggregate(value)
    }
}
