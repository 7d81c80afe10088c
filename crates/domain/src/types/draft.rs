//! Event drafts and validation verdicts

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// User-edited event before it is published or updated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub is_all_day: bool,
}

impl EventDraft {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Whether a draft creates a new event or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    Insert,
    Update,
}

impl SubmissionMode {
    /// Verb used in confirmation prompts.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Insert => "veröffentlichen",
            Self::Update => "aktualisieren",
        }
    }
}

/// Outcome of validating a draft.
///
/// A warning lets the user confirm and proceed; an error blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Warning(String),
    Error(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Warning(message) | Self::Error(message) => Some(message),
        }
    }
}
