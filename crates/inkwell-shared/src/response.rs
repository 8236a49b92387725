//! Error body returned by the JSON API.

use serde::Serialize;

use crate::validation::ValidationIssue;

/// `{"detail": ...}` - the single error shape of the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub detail: Detail,
}

/// Either a human-readable message or the list of validation issues.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

impl ErrorBody {
    pub fn message(detail: impl Into<String>) -> Self {
        Self {
            detail: Detail::Message(detail.into()),
        }
    }

    pub fn issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            detail: Detail::Issues(issues),
        }
    }
}
