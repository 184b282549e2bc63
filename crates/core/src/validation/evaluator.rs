//! Rule evaluator. Pure logic, no database access.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use super::rules::{FieldErrors, FieldRules, RuleKind, ValidatedInput, ValidationError};

/// Message carried by every [`ValidationError`] produced here.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input provided, see errors";

/// Accepted textual date layouts, tried in order after RFC 3339.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Check `input` against every rule in `rules`.
///
/// All rules are evaluated; the error lists every failing field, not just
/// the first one.
pub fn validate(
    input: &Map<String, Value>,
    rules: &[FieldRules],
) -> Result<ValidatedInput, ValidationError> {
    let mut errors = FieldErrors::new();

    for field_rules in rules {
        let value = input.get(field_rules.field);
        for rule in field_rules.rules {
            if let Some(message) = evaluate_single_rule(*rule, field_rules.field, value) {
                errors
                    .entry(field_rules.field.to_string())
                    .or_default()
                    .push(message);
            }
        }
    }

    if errors.is_empty() {
        Ok(ValidatedInput::new(input.clone()))
    } else {
        Err(ValidationError::new(INVALID_INPUT_MESSAGE, errors))
    }
}

fn evaluate_single_rule(rule: RuleKind, field: &str, value: Option<&Value>) -> Option<String> {
    match rule {
        RuleKind::Required => evaluate_required(field, value),
        RuleKind::Date => evaluate_date(field, value),
    }
}

/// Field names are shown to users with underscores replaced by spaces.
fn display_name(field: &str) -> String {
    field.replace('_', " ")
}

fn evaluate_required(field: &str, value: Option<&Value>) -> Option<String> {
    let missing = match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
        _ => false,
    };
    missing.then(|| format!("The {} field is required.", display_name(field)))
}

fn evaluate_date(field: &str, value: Option<&Value>) -> Option<String> {
    let value = match value {
        None | Some(Value::Null) => return None, // date doesn't enforce presence
        Some(Value::String(s)) if s.is_empty() => return None,
        Some(v) => v,
    };
    let parsed = value.as_str().and_then(parse_date);
    match parsed {
        Some(_) => None,
        None => Some(format!("The {} is not a valid date.", display_name(field))),
    }
}

/// Parse a user-supplied date string.
///
/// Accepts plain dates (`2017-06-06`, `06/06/2017`), date-times with or
/// without a `T` separator, and RFC 3339 timestamps. Time components are
/// discarded.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}
