use i18nrs::yew::use_translation;
use yew::{Callback, Html, function_component, html, use_context};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language;
use crate::locale::LocaleContext;

/// Buttons switching the shared [`LocaleContext`].
///
/// Rendered text follows through the locale subscription installed by the app.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    // Subscribing to the translation context re-renders the selector on switch.
    let _ = use_translation();
    let locale = use_context::<LocaleContext>().unwrap_or_default();
    let active = locale.current_language();

    let on_click = {
        let locale = locale.clone();
        Callback::from(move |language| locale.set_language(language))
    };

    html! {
        <div class="flex justify-center gap-2 mt-4" data-testid="language-selector">
        {
            for language::ordered_languages().into_iter().map(|info| {
                html! {
                    <LanguageSelectorButton
                        is_active={info.language == active}
                        info={info}
                        on_click={on_click.clone()}
                    />
                }
            })
        }
        </div>
    }
}
