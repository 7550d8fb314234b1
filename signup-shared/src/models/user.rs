//! Registration request body.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body for `POST /users`.
///
/// Built once from the form's field values when a submission starts and never
/// mutated afterwards.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    /// The requested username.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

impl SignUpRequest {
    /// Creates a request from the three submitted values.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of log lines.
impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_serializes_expected_keys() {
        let request = SignUpRequest::new("test1", "test1@gmail.com", "T3rl4lu@123");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "test1",
                "email": "test1@gmail.com",
                "password": "T3rl4lu@123",
            })
        );
    }

    #[test]
    fn test_sign_up_request_debug_redacts_password() {
        let request = SignUpRequest::new("test1", "test1@gmail.com", "T3rl4lu@123");
        let debug_str = format!("{request:?}");
        assert!(debug_str.contains("test1@gmail.com"));
        assert!(debug_str.contains("<redacted>"));
        assert!(!debug_str.contains("T3rl4lu@123"));
    }
}
