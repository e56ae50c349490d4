#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TextInputProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    #[prop_or_default]
    pub invalid: bool,
    /// Fired with the raw input value on every keystroke.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let emit = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                    emit.emit(input.value());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&event, &emit);
            }
        })
    };
    let class = if props.invalid {
        classes!("bl-input", "bl-input-invalid")
    } else {
        classes!("bl-input")
    };
    html! {
        <label class="bl-field">
            { props.label.as_ref().map(|label| html!{ <span class="bl-field-label">{ label.clone() }</span> }) }
            <input
                id={props.id.clone()}
                type={props.kind.clone()}
                class={class}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                {oninput}
            />
        </label>
    }
}
