//! Validation failures reported by the registration API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A field of the sign-up form.
///
/// The wire names match the keys the registration API uses in
/// `validationErrors`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SignUpField {
    /// User Name input.
    Username,
    /// Email input.
    Email,
    /// Password input.
    Password,
    /// Password Repeat input. Never sent, but the server may still name it.
    PasswordRepeat,
}

/// Raw field→message object as sent by the server.
///
/// Keys are kept as strings so that an unknown key does not make the whole
/// payload unreadable.
pub type ValidationErrors = BTreeMap<String, String>;

/// Body of a `400 Bad Request` returned by `POST /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorResponse {
    /// Summary message of the failure.
    #[serde(default)]
    pub message: String,

    /// Request path the error was raised for.
    #[serde(default)]
    pub path: String,

    /// Server-side timestamp, passed through as sent.
    #[serde(default, rename = "timeStamp")]
    pub time_stamp: String,

    /// Per-field messages, one per rejected field.
    #[serde(default, rename = "validationErrors")]
    pub validation_errors: ValidationErrors,
}

impl ValidationErrorResponse {
    /// Creates a response carrying only a summary message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Adds a field message, replacing any previous one for the same key.
    #[must_use]
    pub fn with_field_error(mut self, field: SignUpField, message: impl Into<String>) -> Self {
        self.validation_errors
            .insert(field.as_ref().to_string(), message.into());
        self
    }

    /// Returns the message reported for `field`, if any.
    #[must_use]
    pub fn field_error(&self, field: SignUpField) -> Option<&str> {
        self.validation_errors
            .get(field.as_ref())
            .map(String::as_str)
    }
}

impl std::fmt::Display for ValidationErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.validation_errors.is_empty() {
            write!(f, "{}", self.message)
        } else {
            let fields: Vec<&str> = self.validation_errors.keys().map(String::as_str).collect();
            write!(f, "{} ({})", self.message, fields.join(", "))
        }
    }
}

impl std::error::Error for ValidationErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case(SignUpField::Username, "username")]
    #[test_case(SignUpField::Email, "email")]
    #[test_case(SignUpField::Password, "password")]
    #[test_case(SignUpField::PasswordRepeat, "passwordRepeat")]
    fn test_field_wire_names(field: SignUpField, name: &str) {
        assert_eq!(field.as_ref(), name);
        assert_eq!(field.to_string(), name);
        assert_eq!(SignUpField::from_str(name), Ok(field));
        assert_eq!(serde_json::to_string(&field).unwrap(), format!("\"{name}\""));
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        assert!(SignUpField::from_str("nickname").is_err());
        assert_eq!(SignUpField::iter().count(), 4);
    }

    #[test]
    fn test_deserializes_server_payload() {
        let json = r#"{
            "validationErrors": {"username": "username is not allowed to be empty"},
            "message": "Validation Failure",
            "path": "/api/1.0/users",
            "timeStamp": "1684836405"
        }"#;
        let response: ValidationErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Validation Failure");
        assert_eq!(response.path, "/api/1.0/users");
        assert_eq!(response.time_stamp, "1684836405");
        assert_eq!(
            response.field_error(SignUpField::Username),
            Some("username is not allowed to be empty")
        );
        assert_eq!(response.field_error(SignUpField::Email), None);
    }

    #[test]
    fn test_keeps_unknown_keys_as_sent() {
        let response: ValidationErrorResponse =
            serde_json::from_str(r#"{"validationErrors":{"nickname":"too long"}}"#).unwrap();
        assert_eq!(
            response.validation_errors.get("nickname").map(String::as_str),
            Some("too long")
        );
    }

    #[test]
    fn test_display_lists_rejected_fields() {
        let response = ValidationErrorResponse::new("Validation Failure")
            .with_field_error(SignUpField::Email, "E-mail in use")
            .with_field_error(SignUpField::Username, "Username cannot be null");
        assert_eq!(response.to_string(), "Validation Failure (email, username)");
        assert_eq!(
            ValidationErrorResponse::new("Bad Request").to_string(),
            "Bad Request"
        );
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let response = ValidationErrorResponse::new("Validation Failure")
            .with_field_error(SignUpField::Password, "Password cannot be null");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["validationErrors"]["password"], "Password cannot be null");
        assert!(json.get("timeStamp").is_some());
    }
}
