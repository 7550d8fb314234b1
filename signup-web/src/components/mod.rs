pub(crate) mod error_form_text;
pub(crate) mod form_input;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod spinner;

pub use form_input::FormInput;
pub use language_selector::LanguageSelector;
pub use spinner::Spinner;
