//! Failure taxonomy of a sign-up submission.
//!
//! A failed `POST /users` is either a structured validation rejection, which is
//! recovered by showing the messages next to the offending fields, or a
//! transport failure, which leaves the form editable and shows a generic notice.

use shared::models::ValidationErrorResponse;
use thiserror::Error;

/// Why a registration request did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignUpError {
    /// The server rejected one or more fields with a `400` payload.
    #[error("validation failed: {0}")]
    Validation(ValidationErrorResponse),

    /// The request never produced a usable answer.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<ValidationErrorResponse> for SignUpError {
    fn from(response: ValidationErrorResponse) -> Self {
        Self::Validation(response)
    }
}

/// Failures below the validation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::MalformedBody(error.to_string())
        } else {
            match error.status() {
                Some(status) => Self::Status(status.as_u16()),
                None => Self::Network(error.to_string()),
            }
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedBody(error.to_string())
    }
}
