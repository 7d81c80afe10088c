//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typed failure while resolving calendar dates.
///
/// A wrong date is worse than a visible error, so none of these are ever
/// defaulted away by the normalizer.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateError {
    #[error("malformed ISO-8601 timestamp '{value}': {reason}")]
    Malformed { value: String, reason: String },

    #[error("event {event_id} is missing start/end date")]
    MissingEventDate { event_id: String },

    #[error("invalid IANA time zone identifier '{0}'")]
    InvalidTimeZone(String),

    #[error("cannot shift all-day end date of event {event_id} by one day")]
    CalendarArithmetic { event_id: String },

    #[error("local midnight of {date} does not exist in time zone {time_zone}")]
    NonexistentLocalTime { date: String, time_zone: String },
}

/// Main error type for Seesturm
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SeesturmError {
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SeesturmError {
    /// Whether retrying the same operation can reasonably succeed.
    ///
    /// Drives the retry affordance of error cards; date errors are retryable
    /// because the calendar may be fixed upstream between two fetches.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Date(_) | Self::Cancelled => true,
            Self::Config(_)
            | Self::Auth(_)
            | Self::NotFound(_)
            | Self::InvalidInput(_)
            | Self::Internal(_) => false,
        }
    }

    /// Stable label for logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Cancelled => "cancelled",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Seesturm operations
pub type Result<T> = std::result::Result<T, SeesturmError>;
