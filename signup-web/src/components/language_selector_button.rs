use i18nrs::yew::use_translation;
use yew::{Callback, Html, Properties, function_component, html};

use crate::language::{Language, LanguageInfo};

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    pub on_click: Callback<Language>,
}

#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let (i18n, _) = use_translation();
    let info = &props.info;
    let language = info.language;
    let on_click = props.on_click.clone();
    html! {
        <button
            type="button"
            class={if props.is_active { "btn btn-ghost btn-sm btn-active" } else { "btn btn-ghost btn-sm" }}
            title={i18n.t(info.label_key)}
            lang={info.code}
            data-testid={format!("language-{}", info.code)}
            onclick={move |event: yew::MouseEvent| {
                event.prevent_default();
                on_click.emit(language);
            }}>
            <span>{info.flag}</span>
            <span class="sr-only">{info.native_name}</span>
        </button>
    }
}
