//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use reqwest::StatusCode;
use seesturm_domain::SeesturmError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SeesturmError);

impl From<InfraError> for SeesturmError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SeesturmError> for InfraError {
    fn from(value: SeesturmError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSeesturmError {
    fn into_seesturm(self) -> SeesturmError;
}

/// Domain error for a non-success HTTP status, with `detail` appended.
pub fn status_error(status: StatusCode, detail: &str) -> SeesturmError {
    let code = status.as_u16();
    let mut message = format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    if !detail.is_empty() {
        message.push_str(": ");
        message.push_str(detail);
    }

    match code {
        401 | 403 => SeesturmError::Auth(message),
        404 => SeesturmError::NotFound(message),
        429 => SeesturmError::Network(message),
        400..=499 => SeesturmError::InvalidInput(message),
        _ => SeesturmError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SeesturmError */
/* -------------------------------------------------------------------------- */

impl IntoSeesturmError for HttpError {
    fn into_seesturm(self) -> SeesturmError {
        if self.is_timeout() {
            return SeesturmError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return SeesturmError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_error(status, "");
        }

        if self.is_decode() {
            return SeesturmError::InvalidInput(format!("failed to decode HTTP response: {self}"));
        }

        SeesturmError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_seesturm())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → SeesturmError */
/* -------------------------------------------------------------------------- */

impl IntoSeesturmError for JsonError {
    fn into_seesturm(self) -> SeesturmError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => SeesturmError::Network(format!("failed to read JSON: {self}")),
            Category::Syntax | Category::Data | Category::Eof => {
                SeesturmError::InvalidInput(format!("malformed JSON payload: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_seesturm())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
