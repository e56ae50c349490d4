use crate::components::ui::TextInput;
use busline_core::validate;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NameStepProps {
    pub value: AttrValue,
    /// True once the user has tried to advance past this step.
    #[prop_or_default]
    pub attempted: bool,
    pub on_change: Callback<String>,
}

#[function_component(NameStep)]
pub fn name_step(props: &NameStepProps) -> Html {
    // An untouched input shows no error until an advance was refused.
    let error = (props.attempted || !props.value.is_empty())
        .then(|| validate::passenger_name(&props.value).err())
        .flatten();
    html! {
        <div class="wizard-step">
            <TextInput
                label="Full name"
                value={props.value.clone()}
                placeholder="e.g. Ann Lee"
                invalid={error.is_some()}
                oninput={props.on_change.clone()}
            />
            { error.map(|err| html!{ <p class="bl-hint bl-hint-error">{ err.to_string() }</p> }) }
        </div>
    }
}
