//! Validation rule and result types.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A single check applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The field must be present, non-null and non-empty.
    Required,
    /// When present, the field must parse as a calendar date.
    Date,
}

/// The rule list declared for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [RuleKind],
}

/// Error messages keyed by field name, in field order.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Input that passed every declared rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput(Map<String, Value>);

impl ValidatedInput {
    pub(crate) fn new(input: Map<String, Value>) -> Self {
        Self(input)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Rejected input: a human-readable message plus every failed rule,
/// grouped by field. The field map is meant to reach the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub errors: FieldErrors,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }

    /// Fields that failed at least one rule.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_its_message() {
        let mut errors = FieldErrors::new();
        errors.insert("title".into(), vec!["The title field is required.".into()]);
        let err = ValidationError::new("Invalid input provided, see errors", errors);

        assert_eq!(err.to_string(), "Invalid input provided, see errors");
        let source: &dyn std::error::Error = &err;
        assert!(source.source().is_none());
    }
}
