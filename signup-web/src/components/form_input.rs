use web_sys::HtmlInputElement;
use yew::events::InputEvent;
use yew::{AttrValue, Callback, Html, Properties, TargetCast, function_component, html};

use crate::components::error_form_text::ErrorFormText;

#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Labelled input that reports every keystroke and shows an optional error below.
#[function_component(FormInput)]
pub fn form_input(props: &FormInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <div class="form-control mt-2">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                class={format!("input input-bordered w-full {}", if props.error.is_some() { "input-error" } else { "" })}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(message) = &props.error {
                <label class="label">
                    <ErrorFormText message={message.clone()} />
                </label>
            }
        </div>
    }
}
