//! Validation logic for the sign-up form.
//!
//! Pure functions deciding whether the form may be submitted, which advisory
//! message to show under the password repeat input, and how a server rejection
//! maps onto the form's fields.

use shared::models::{SignUpField, ValidationErrorResponse};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Translation key of the password mismatch message.
pub const PASSWORD_MISMATCH_KEY: &str = "passwordMismatch";

/// Field→message pairs to show on the form after a server rejection.
pub type ValidationErrorMap = BTreeMap<SignUpField, String>;

/// Whether the submit action is enabled.
///
/// True iff both passwords are non-empty and equal. This is a client-only
/// gate: the server may still reject the request.
pub fn can_submit(password: &str, password_repeat: &str) -> bool {
    !password.is_empty() && !password_repeat.is_empty() && password == password_repeat
}

/// Whether the two password inputs differ.
pub fn passwords_mismatch(password: &str, password_repeat: &str) -> bool {
    password != password_repeat
}

/// The localized mismatch message, shown whenever the two passwords differ.
///
/// # Arguments
/// * `password` - Value of the password input
/// * `password_repeat` - Value of the password repeat input
/// * `translate` - Resolves a translation key in the active language
pub fn mismatch_message(
    password: &str,
    password_repeat: &str,
    translate: impl Fn(&str) -> String,
) -> Option<String> {
    passwords_mismatch(password, password_repeat).then(|| translate(PASSWORD_MISMATCH_KEY))
}

/// Extracts the per-field messages from a `400` payload.
///
/// Only fields the server actually reported appear in the result, so applying
/// it never clears an existing error. Unknown keys are skipped.
pub fn map_server_errors(payload: &ValidationErrorResponse) -> ValidationErrorMap {
    payload
        .validation_errors
        .iter()
        .filter_map(|(key, message)| match SignUpField::from_str(key) {
            Ok(field) => Some((field, message.clone())),
            Err(_) => {
                log::debug!("ignoring validation error for unknown field {key}");
                None
            }
        })
        .collect()
}
