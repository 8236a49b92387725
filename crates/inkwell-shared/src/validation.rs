//! Structural validation of inbound payloads.
//!
//! Issues are reported in the `{type, loc, msg, input, ctx}` shape API
//! clients already parse. Checks are type-only: an empty string is a valid string.

use std::num::IntErrorKind;

use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::dto::PostCreate;

/// One segment of an issue location, e.g. `["body", "title"]` or `["body", 17]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Loc {
    Key(String),
    Index(usize),
}

impl From<&str> for Loc {
    fn from(key: &str) -> Self {
        Loc::Key(key.to_string())
    }
}

impl From<usize> for Loc {
    fn from(index: usize) -> Self {
        Loc::Index(index)
    }
}

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<Loc>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl ValidationIssue {
    pub fn missing(field: &str, input: Value) -> Self {
        Self {
            kind: "missing".to_string(),
            loc: vec!["body".into(), field.into()],
            msg: "Field required".to_string(),
            input: Some(input),
            ctx: None,
        }
    }

    pub fn not_a_string(field: &str, input: Value) -> Self {
        Self {
            kind: "string_type".to_string(),
            loc: vec!["body".into(), field.into()],
            msg: "Input should be a valid string".to_string(),
            input: Some(input),
            ctx: None,
        }
    }

    pub fn not_an_object(input: Value) -> Self {
        Self {
            kind: "model_attributes_type".to_string(),
            loc: vec!["body".into()],
            msg: "Input should be a valid dictionary or object to extract fields from".to_string(),
            input: Some(input),
            ctx: None,
        }
    }

    pub fn invalid_json(offset: usize, error: &serde_json::Error) -> Self {
        Self {
            kind: "json_invalid".to_string(),
            loc: vec!["body".into(), offset.into()],
            msg: "JSON decode error".to_string(),
            input: Some(json!({})),
            ctx: Some(json!({ "error": error.to_string() })),
        }
    }

    pub fn not_an_integer(location: &str, param: &str, raw: &str) -> Self {
        Self {
            kind: "int_parsing".to_string(),
            loc: vec![location.into(), param.into()],
            msg: "Input should be a valid integer, unable to parse string as an integer"
                .to_string(),
            input: Some(Value::String(raw.to_string())),
            ctx: None,
        }
    }
}

/// A payload failed structural validation. Never empty.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation issue(s)", .0.len())]
pub struct ValidationError(Vec<ValidationIssue>);

impl ValidationError {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.0
    }
}

impl From<ValidationIssue> for ValidationError {
    fn from(issue: ValidationIssue) -> Self {
        Self(vec![issue])
    }
}

/// Validate a raw JSON body against the `PostCreate` shape.
///
/// Every missing or mistyped field is reported, not only the first.
pub fn validate_post_create(body: &[u8]) -> Result<PostCreate, ValidationError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ValidationIssue::invalid_json(error_offset(body, &e), &e))?;

    let Value::Object(object) = value else {
        return Err(ValidationIssue::not_an_object(value).into());
    };

    match (
        string_field(&object, "author"),
        string_field(&object, "title"),
        string_field(&object, "content"),
    ) {
        (Ok(author), Ok(title), Ok(content)) => Ok(PostCreate {
            author,
            title,
            content,
        }),
        (author, title, content) => Err(ValidationError(
            [author.err(), title.err(), content.err()]
                .into_iter()
                .flatten()
                .collect(),
        )),
    }
}

fn string_field(object: &Map<String, Value>, field: &str) -> Result<String, ValidationIssue> {
    match object.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(ValidationIssue::not_a_string(field, other.clone())),
        None => Err(ValidationIssue::missing(
            field,
            Value::Object(object.clone()),
        )),
    }
}

/// Parse an integer path parameter.
///
/// Integers too large for `i128` are still integers: they saturate to the
/// nearest bound instead of failing.
pub fn parse_path_int(raw: &str, param: &str) -> Result<i128, ValidationError> {
    raw.parse::<i128>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i128::MAX),
        IntErrorKind::NegOverflow => Ok(i128::MIN),
        _ => Err(ValidationIssue::not_an_integer("path", param, raw).into()),
    })
}

/// Byte offset of a serde_json error, from its 1-based line and column.
fn error_offset(body: &[u8], error: &serde_json::Error) -> usize {
    let line = error.line().saturating_sub(1);
    let preceding: usize = body
        .split(|b| *b == b'\n')
        .take(line)
        .map(|l| l.len() + 1)
        .sum();
    (preceding + error.column().saturating_sub(1)).min(body.len())
}
