use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpinnerProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="bl-spinner" role="status">
            <span class="bl-spinner-dot" aria-hidden="true"></span>
            <span class="bl-spinner-label">{ props.label.clone() }</span>
        </div>
    }
}
