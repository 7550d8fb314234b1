use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Text announced to screen readers.
    pub label: AttrValue,
}

/// Busy indicator shown inside the submit button while a request is pending.
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <span
            role="status"
            aria-label={props.label.clone()}
            class="loading loading-spinner loading-sm mr-2"
        ></span>
    }
}
