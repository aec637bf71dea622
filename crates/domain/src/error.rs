//! Unified error types for the domain layer
//!
//! Condition evaluation itself is total and never produces these; they come
//! from catalog construction, direct lookups, and rotation over an empty catalog.

use thiserror::Error;

use crate::ids::RuleId;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested rule id is absent from the catalog
    #[error("Rule not found: {id}")]
    RuleNotFound { id: RuleId },

    /// Daily selection or random pick over a zero-length catalog
    #[error("Cannot select from an empty rule catalog")]
    EmptyCatalog,

    /// Validation failed (duplicate ids, malformed conditions)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a rule not found error
    pub fn rule_not_found(id: impl Into<RuleId>) -> Self {
        Self::RuleNotFound { id: id.into() }
    }

    /// Creates a validation error for catalog invariant violations.
    ///
    /// # Example
    /// ```ignore
    /// if !seen.insert(rule.id()) {
    ///     return Err(DomainError::validation(format!("Duplicate rule id: {}", rule.id())));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
