//! Validation issues returned as data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Missing or blank input
    Required,
    /// Not a recognized domestic or international shape
    Format,
    /// Digit count inconsistent with the detected class or prefix
    Length,
    /// Well-formed but rejected by a fraud heuristic
    Heuristic,
    /// Unexpected failure inside the pipeline
    Internal,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Required => "required",
            Self::Format => "format",
            Self::Length => "length",
            Self::Heuristic => "heuristic",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// A single problem found while validating a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required() -> Self {
        Self::new(IssueKind::Required, "phone number is required")
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(IssueKind::Format, message)
    }

    pub fn length(message: impl Into<String>) -> Self {
        Self::new(IssueKind::Length, message)
    }

    pub fn heuristic(message: impl Into<String>) -> Self {
        Self::new(IssueKind::Heuristic, message)
    }

    /// The single generic entry reported for internal faults.
    pub fn internal() -> Self {
        Self::new(
            IssueKind::Internal,
            "an unexpected error occurred while validating the phone number",
        )
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
