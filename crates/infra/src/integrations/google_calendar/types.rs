//! Google API wire types not covered by the domain DTOs

use serde::Deserialize;

/// Error envelope returned by Google APIs on non-success statuses
#[derive(Debug, Deserialize)]
pub struct GoogleErrorBody {
    pub error: GoogleError,
}

#[derive(Debug, Deserialize)]
pub struct GoogleError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl GoogleErrorBody {
    /// `"PERMISSION_DENIED: API key not valid"` or just the message.
    pub fn detail(&self) -> String {
        match self.error.status.as_deref() {
            Some(status) if !status.is_empty() => format!("{status}: {}", self.error.message),
            _ => self.error.message.clone(),
        }
    }
}
