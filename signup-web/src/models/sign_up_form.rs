use crate::containers::sign_up_validation::{can_submit, map_server_errors};
use crate::error::SignUpError;
use shared::models::{SignUpField, SignUpRequest};

/// Value and server-reported error of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    /// Editable again, with the server's messages shown on the fields.
    FailedValidation,
}

/// Progress flags derived from the phase; never both true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub in_progress: bool,
    pub succeeded: bool,
}

/// Form-level notice shown outside of any field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    /// The last request failed below the validation layer; retrying may help.
    TransportFailure,
}

/// Local state of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    username: FieldState,
    email: FieldState,
    password: FieldState,
    password_repeat: FieldState,
    phase: SubmissionPhase,
    notice: Option<FormNotice>,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: SignUpField) -> &FieldState {
        match field {
            SignUpField::Username => &self.username,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::PasswordRepeat => &self.password_repeat,
        }
    }

    fn field_mut(&mut self, field: SignUpField) -> &mut FieldState {
        match field {
            SignUpField::Username => &mut self.username,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
            SignUpField::PasswordRepeat => &mut self.password_repeat,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn notice(&self) -> Option<FormNotice> {
        self.notice
    }

    pub fn submission(&self) -> SubmissionState {
        SubmissionState {
            in_progress: self.phase == SubmissionPhase::InFlight,
            succeeded: self.phase == SubmissionPhase::Succeeded,
        }
    }

    /// Stores a keystroke and clears that field's error.
    ///
    /// Returns `false` once the form has been submitted successfully, since the
    /// inputs are no longer shown.
    pub fn on_change(&mut self, field: SignUpField, value: impl Into<String>) -> bool {
        if self.phase == SubmissionPhase::Succeeded {
            return false;
        }
        let state = self.field_mut(field);
        state.value = value.into();
        state.error = None;
        true
    }

    /// Whether a click on the submit button would start a request.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Idle | SubmissionPhase::FailedValidation
        ) && can_submit(&self.password.value, &self.password_repeat.value)
    }

    /// Enters `InFlight` and snapshots the request body.
    ///
    /// Returns `None` without changing anything when the passwords do not
    /// allow submission or a request is already outstanding.
    pub fn begin_submission(&mut self) -> Option<SignUpRequest> {
        if !self.can_submit() {
            return None;
        }
        self.phase = SubmissionPhase::InFlight;
        self.notice = None;
        Some(SignUpRequest::new(
            self.username.value.clone(),
            self.email.value.clone(),
            self.password.value.clone(),
        ))
    }

    /// Applies the outcome of the outstanding request.
    ///
    /// Ignored unless a request is in flight.
    pub fn complete_submission(&mut self, outcome: &Result<(), SignUpError>) -> bool {
        if self.phase != SubmissionPhase::InFlight {
            return false;
        }
        match outcome {
            Ok(()) => self.phase = SubmissionPhase::Succeeded,
            Err(SignUpError::Validation(payload)) => {
                for (field, message) in map_server_errors(payload) {
                    self.field_mut(field).error = Some(message);
                }
                self.phase = SubmissionPhase::FailedValidation;
            }
            Err(SignUpError::Transport(_)) => {
                self.phase = SubmissionPhase::Idle;
                self.notice = Some(FormNotice::TransportFailure);
            }
        }
        true
    }
}
