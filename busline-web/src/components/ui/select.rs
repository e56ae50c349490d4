#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;
use yew::prelude::*;

/// A single `<option>` entry: machine value plus the text shown to the user.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub text: AttrValue,
}

#[derive(Properties, PartialEq, Clone)]
pub struct SelectProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    pub options: Vec<SelectOption>,
    /// Fired with the selected option value; an empty string means the
    /// placeholder row was picked.
    #[prop_or_default]
    pub onchange: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let onchange = {
        let emit = props.onchange.clone();
        Callback::from(move |event: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                    emit.emit(select.value());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&event, &emit);
            }
        })
    };
    html! {
        <label class="bl-field">
            { props.label.as_ref().map(|label| html!{ <span class="bl-field-label">{ label.clone() }</span> }) }
            <select id={props.id.clone()} class="bl-select" value={props.value.clone()} {onchange}>
                { props.placeholder.as_ref().map(|text| html!{
                    <option value="" selected={props.value.is_empty()}>{ text.clone() }</option>
                }) }
                { for props.options.iter().map(|option| html!{
                    <option
                        value={option.value.clone()}
                        selected={option.value == props.value}
                    >{ option.text.clone() }</option>
                }) }
            </select>
        </label>
    }
}
