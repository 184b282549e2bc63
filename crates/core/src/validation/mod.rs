//! Form validation.
//!
//! Provides rule types and a pure-logic evaluator that checks a JSON object
//! against per-field rule lists, without database dependencies.

pub mod evaluator;
pub mod rules;

pub use evaluator::{parse_date, validate};
pub use rules::{FieldErrors, FieldRules, RuleKind, ValidatedInput, ValidationError};
