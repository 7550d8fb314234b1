//! Wire models of the user registration API.

pub mod errors;
pub mod user;

pub use errors::{SignUpField, ValidationErrorResponse, ValidationErrors};
pub use user::SignUpRequest;
