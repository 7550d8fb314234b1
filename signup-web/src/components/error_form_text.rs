use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorFormTextProps {
    pub message: AttrValue,
}

#[function_component(ErrorFormText)]
pub fn error_form_text(props: &ErrorFormTextProps) -> Html {
    html! {
        <span class="label-text-alt text-error text-sm">{props.message.clone()}</span>
    }
}
