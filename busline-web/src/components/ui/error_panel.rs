use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="bl-error" role="alert">
            <p>{ props.message.clone() }</p>
            { props.on_retry.as_ref().map(|retry| {
                let retry = retry.clone();
                let onclick = Callback::from(move |_| retry.emit(()));
                html!{ <button type="button" class="bl-btn bl-btn-ghost" {onclick}>{ "Retry" }</button> }
            }) }
        </div>
    }
}
