use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::RuleId;

/// Rule ids already granted to one trainer.
///
/// Owned and persisted by the caller. Evaluation only reads it; callers merge
/// a delta back with [`UnlockLedger::grant`] once it has been presented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockLedger {
    granted: BTreeSet<RuleId>,
}

impl UnlockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.granted.contains(id)
    }

    /// Merge ids into the ledger. Returns how many were not already present.
    pub fn grant<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<RuleId>,
    {
        let mut added = 0;
        for id in ids {
            if self.granted.insert(id.into()) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleId> {
        self.granted.iter()
    }
}

impl<T: Into<RuleId>> FromIterator<T> for UnlockLedger {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_is_idempotent() {
        let mut ledger = UnlockLedger::new();
        assert_eq!(ledger.grant(["first", "five"]), 2);
        assert_eq!(ledger.grant(["five", "ten"]), 1);
        assert_eq!(ledger.len(), 3);
        assert!(ledger.contains("ten"));
    }

    #[test]
    fn test_ledger_serializes_as_sorted_list() {
        let ledger: UnlockLedger = ["shiny", "first"].into_iter().collect();
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"["first","shiny"]"#);
    }
}
