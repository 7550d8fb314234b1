//! Sign-up container module.
//!
//! Renders the four-field sign-up form on top of a [`SignUpController`] and
//! swaps it for the account activation notice once the server accepts the
//! registration.

use super::sign_up_controller::SignUpController;
use super::sign_up_validation::mismatch_message;
use crate::api::{SignUpClient, SignUpTransport};
use crate::components::{FormInput, Spinner};
use crate::locale::LocaleContext;
use crate::models::FormNotice;
use i18nrs::yew::use_translation;
use shared::models::SignUpField;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{
    AttrValue, Callback, Html, MouseEvent, Properties, function_component, html, use_context,
    use_effect_with, use_force_update, use_memo,
};

/// Transport handed to the form; compared by identity.
#[derive(Clone)]
pub struct TransportHandle(pub Rc<dyn SignUpTransport>);

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransportHandle")
    }
}

#[derive(Properties, PartialEq, Debug)]
pub struct SignUpProps {
    /// Overrides the shared HTTP client.
    #[prop_or_default]
    pub transport: Option<TransportHandle>,
}

/// The sign-up form.
///
/// * User Name
/// * Email
/// * Password
/// * Password Repeat (must match Password before the button enables)
///
/// Server-side validation messages are shown under the rejected inputs and
/// disappear as soon as the input is edited.
#[function_component(SignUp)]
pub fn sign_up(props: &SignUpProps) -> Html {
    let (i18n, _) = use_translation();
    let locale = use_context::<LocaleContext>().unwrap_or_default();
    let redraw = use_force_update();

    let controller = {
        let transport = props.transport.clone();
        use_memo((), move |_| {
            let transport = transport.map_or_else(
                || Rc::new(SignUpClient::shared()) as Rc<dyn SignUpTransport>,
                |handle| handle.0,
            );
            SignUpController::new(transport, locale).with_notifier(move || redraw.force_update())
        })
    };

    {
        let controller = Rc::clone(&controller);
        use_effect_with((), move |_| move || controller.unmount());
    }

    let on_change = |field: SignUpField| {
        let controller = Rc::clone(&controller);
        Callback::from(move |value: String| controller.on_change(field, value))
    };

    let on_submit = {
        let controller = Rc::clone(&controller);
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let controller = (*controller).clone();
            spawn_local(async move { controller.submit().await });
        })
    };

    let form = controller.form().clone();
    let submission = form.submission();

    if submission.succeeded {
        return html! {
            <div class="alert alert-success shadow-lg" role="alert" data-testid="signUpSuccess">
                <span>{i18n.t("accountActivationNotification")}</span>
            </div>
        };
    }

    let error_of = |field: SignUpField| form.field(field).error.clone().map(AttrValue::from);
    let value_of = |field: SignUpField| AttrValue::from(form.field(field).value.clone());
    let password = &form.field(SignUpField::Password).value;
    let password_repeat = &form.field(SignUpField::PasswordRepeat).value;
    let repeat_error = error_of(SignUpField::PasswordRepeat).or_else(|| {
        mismatch_message(password, password_repeat, |key| i18n.t(key)).map(AttrValue::from)
    });

    html! {
        <div class="card w-full max-w-md bg-base-200 shadow-xl">
            <form class="card-body" data-testid="formSignUp">
                <h1 class="card-title text-4xl font-bold justify-center">{i18n.t("signUp")}</h1>

                if form.notice() == Some(FormNotice::TransportFailure) {
                    <div class="alert alert-error" role="alert">
                        <span>{i18n.t("genericError")}</span>
                    </div>
                }

                <FormInput
                    id="username"
                    label={i18n.t("username")}
                    value={value_of(SignUpField::Username)}
                    error={error_of(SignUpField::Username)}
                    on_change={on_change(SignUpField::Username)}
                />
                <FormInput
                    id="email"
                    label={i18n.t("email")}
                    value={value_of(SignUpField::Email)}
                    error={error_of(SignUpField::Email)}
                    on_change={on_change(SignUpField::Email)}
                />
                <FormInput
                    id="password"
                    label={i18n.t("password")}
                    input_type="password"
                    value={value_of(SignUpField::Password)}
                    error={error_of(SignUpField::Password)}
                    on_change={on_change(SignUpField::Password)}
                />
                <FormInput
                    id="passwordRepeat"
                    label={i18n.t("passwordRepeat")}
                    input_type="password"
                    value={value_of(SignUpField::PasswordRepeat)}
                    error={repeat_error}
                    on_change={on_change(SignUpField::PasswordRepeat)}
                />

                <div class="form-control mt-6">
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={!form.can_submit()}
                        onclick={on_submit}
                    >
                        if submission.in_progress {
                            <Spinner label={i18n.t("loading")} />
                        }
                        {i18n.t("signUp")}
                    </button>
                </div>
            </form>
        </div>
    }
}
