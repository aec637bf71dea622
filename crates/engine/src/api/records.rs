//! Backend JSON records and their conversion into evaluation subjects.
//!
//! Field names follow the backend's snake_case documents, not the camelCase
//! used for rule catalogs.

use std::collections::HashMap;

use pokedream_domain::common::none_if_blank;
use pokedream_domain::{AggregateStats, CreationSubject};
use serde::Deserialize;

/// One generated creature as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreationRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// The backend may store `null` for a missing secondary type
    #[serde(default)]
    pub types: Vec<Option<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub concept: Option<String>,
    #[serde(default)]
    pub is_shiny: bool,
}

impl From<CreationRecord> for CreationSubject {
    fn from(record: CreationRecord) -> Self {
        let labels: Vec<String> = record
            .types
            .iter()
            .flatten()
            .filter_map(|t| none_if_blank(t))
            .map(String::from)
            .collect();
        CreationSubject::from_parts(
            labels,
            record.name.as_deref(),
            record.description.as_deref(),
            record.concept.as_deref(),
        )
        .with_rare(record.is_shiny)
    }
}

/// A trainer's aggregate statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatsRecord {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub shinies: u64,
    #[serde(default)]
    pub type_counts: HashMap<String, u64>,
}

impl From<StatsRecord> for AggregateStats {
    fn from(record: StatsRecord) -> Self {
        let mut stats = AggregateStats::new(record.total, record.shinies);
        stats.category_counts = record.type_counts;
        stats
    }
}
