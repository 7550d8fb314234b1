use crate::components::LanguageSelector;
use crate::containers::sign_up::SignUp;
use crate::language::{Language, supported_languages, translate};
use crate::locale::LocaleContext;
use i18nrs::yew::{I18nProvider, I18nProviderConfig, use_translation};
use std::collections::HashMap;
use yew::{ContextProvider, Html, function_component, html, use_context, use_effect_with, use_memo};

/// Translation catalogs keyed by language tag, as the provider expects them.
pub fn translations() -> HashMap<&'static str, &'static str> {
    supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect()
}

#[function_component(InternationalApp)]
pub fn international_app() -> Html {
    let locale = use_memo((), |_| LocaleContext::new(Language::default()));

    let config = I18nProviderConfig {
        translations: translations(),
        default_language: locale.current_language().code().to_string(),
        ..Default::default()
    };

    html! {
        <ContextProvider<LocaleContext> context={(*locale).clone()}>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </ContextProvider<LocaleContext>>
    }
}

/// Mirrors the active language onto `<html lang>` and the document title.
fn reflect_language(language: Language) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(&translate(language, "signUp"));
    if let Some(root) = document.document_element()
        && let Err(err) = root.set_attribute("lang", language.code())
    {
        log::warn!("could not set document language: {err:?}");
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let (_, set_language) = use_translation();
    let locale = use_context::<LocaleContext>().unwrap_or_default();

    // Forward locale changes to the translation provider for as long as the app is mounted.
    use_effect_with(locale, move |locale| {
        reflect_language(locale.current_language());
        let subscription = locale.subscribe(move |language| {
            reflect_language(language);
            set_language.emit(language.code().to_string());
        });
        move || drop(subscription)
    });

    html! {
        <div class="flex flex-col justify-center items-center min-h-screen p-6" data-testid="signUpPage">
            <SignUp />
            <LanguageSelector />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations_cover_supported_languages() {
        let translations = translations();
        assert_eq!(translations.len(), 2);
        for code in ["en", "id"] {
            let catalog: serde_json::Value =
                serde_json::from_str(translations.get(code).unwrap()).unwrap();
            assert!(catalog.get("signUp").is_some());
        }
    }
}
