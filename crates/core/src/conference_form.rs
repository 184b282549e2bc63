//! Conference creation form.
//!
//! Raw form input is cleaned of empty fields, validated against a fixed
//! rule set and turned into a typed [`ConferenceInput`]. Persistence is the
//! caller's job; nothing here touches the database.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::validation::{parse_date, validate, FieldRules, RuleKind, ValidatedInput};

/// Rules applied to every conference submitted through the form.
pub const CONFERENCE_RULES: &[FieldRules] = &[
    FieldRules {
        field: "title",
        rules: &[RuleKind::Required],
    },
    FieldRules {
        field: "description",
        rules: &[RuleKind::Required],
    },
    FieldRules {
        field: "url",
        rules: &[RuleKind::Required],
    },
    FieldRules {
        field: "starts_at",
        rules: &[RuleKind::Date],
    },
    FieldRules {
        field: "ends_at",
        rules: &[RuleKind::Date],
    },
    FieldRules {
        field: "cfp_starts_at",
        rules: &[RuleKind::Date],
    },
    FieldRules {
        field: "cfp_ends_at",
        rules: &[RuleKind::Date],
    },
];

/// Validated, typed conference fields ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConferenceInput {
    pub title: String,
    pub description: String,
    pub url: String,
    pub starts_at: Option<NaiveDate>,
    pub ends_at: Option<NaiveDate>,
    pub cfp_starts_at: Option<NaiveDate>,
    pub cfp_ends_at: Option<NaiveDate>,
}

/// Drop every field whose value is falsy.
///
/// Falsy means `null`, `false`, zero, the empty string, the string `"0"`,
/// and empty arrays or objects. Optional dates left blank in a form are
/// removed here so they never reach the date rule.
pub fn remove_empty_fields(input: Map<String, Value>) -> Map<String, Value> {
    input.into_iter().filter(|(_, v)| !is_falsy(v)).collect()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Clean, validate and type the raw form input.
///
/// Fails with [`CoreError::Validation`] listing every failing field.
pub fn fill_out(raw: Map<String, Value>) -> Result<ConferenceInput, CoreError> {
    let input = remove_empty_fields(raw);
    let validated = validate(&input, CONFERENCE_RULES)?;
    Ok(ConferenceInput::from_validated(&validated))
}

impl ConferenceInput {
    fn from_validated(input: &ValidatedInput) -> Self {
        Self {
            title: text_field(input, "title"),
            description: text_field(input, "description"),
            url: text_field(input, "url"),
            starts_at: date_field(input, "starts_at"),
            ends_at: date_field(input, "ends_at"),
            cfp_starts_at: date_field(input, "cfp_starts_at"),
            cfp_ends_at: date_field(input, "cfp_ends_at"),
        }
    }
}

fn text_field(input: &ValidatedInput, field: &str) -> String {
    match input.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn date_field(input: &ValidatedInput, field: &str) -> Option<NaiveDate> {
    input.get(field).and_then(Value::as_str).and_then(parse_date)
}
