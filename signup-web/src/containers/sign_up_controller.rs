//! Submission controller for the sign-up form.
//!
//! Owns the [`SignUpForm`] state and drives it through a registration request:
//! snapshot the fields, send one `POST /users` in the current language, and
//! apply the outcome. Every state change is followed by a call to the
//! notifier, which the view uses to redraw.

use crate::api::SignUpTransport;
use crate::error::SignUpError;
use crate::locale::LocaleContext;
use crate::models::SignUpForm;
use shared::models::SignUpField;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Drives the sign-up form. Clones share the same form.
#[derive(Clone)]
pub struct SignUpController {
    form: Rc<RefCell<SignUpForm>>,
    transport: Rc<dyn SignUpTransport>,
    locale: LocaleContext,
    notify: Rc<dyn Fn()>,
    mounted: Rc<Cell<bool>>,
}

impl SignUpController {
    pub fn new(transport: Rc<dyn SignUpTransport>, locale: LocaleContext) -> Self {
        Self {
            form: Rc::new(RefCell::new(SignUpForm::new())),
            transport,
            locale,
            notify: Rc::new(|| {}),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Sets the callback run after every state change.
    #[must_use]
    pub fn with_notifier(mut self, notify: impl Fn() + 'static) -> Self {
        self.notify = Rc::new(notify);
        self
    }

    /// Borrows the current form state.
    pub fn form(&self) -> Ref<'_, SignUpForm> {
        self.form.borrow()
    }

    /// Handles a keystroke in one of the inputs.
    pub fn on_change(&self, field: SignUpField, value: impl Into<String>) {
        let changed = self.form.borrow_mut().on_change(field, value);
        if changed {
            (self.notify)();
        }
    }

    /// Submits the form.
    ///
    /// The transition to `InFlight` happens before the first await point, so
    /// on a single-threaded executor any overlapping call finds the request
    /// outstanding and returns without sending.
    pub async fn submit(&self) {
        let request = self.form.borrow_mut().begin_submission();
        let Some(request) = request else {
            log::debug!(
                "sign-up submit ignored in {:?} phase",
                self.form.borrow().phase()
            );
            return;
        };
        (self.notify)();

        let language = self.locale.current_language();
        log::info!(
            "submitting sign-up for {} (Accept-Language: {})",
            request.username,
            language.code()
        );
        let outcome = self.transport.register(&request, language).await;

        if !self.is_mounted() {
            log::debug!("sign-up response arrived after teardown; dropped");
            return;
        }
        log_outcome(&outcome);
        self.form.borrow_mut().complete_submission(&outcome);
        (self.notify)();
    }

    /// Marks the view as torn down; later responses leave the state alone.
    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

fn log_outcome(outcome: &Result<(), SignUpError>) {
    match outcome {
        Ok(()) => log::info!("sign-up accepted"),
        Err(SignUpError::Validation(payload)) => {
            let fields: Vec<&str> = payload
                .validation_errors
                .keys()
                .map(String::as_str)
                .collect();
            log::warn!("sign-up rejected for fields [{}]", fields.join(", "));
        }
        Err(SignUpError::Transport(err)) => log::error!("sign-up request failed: {err}"),
    }
}

impl PartialEq for SignUpController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.form, &other.form)
    }
}

impl fmt::Debug for SignUpController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpController")
            .field("form", &*self.form.borrow())
            .field("locale", &self.locale)
            .field("mounted", &self.mounted.get())
            .finish_non_exhaustive()
    }
}
