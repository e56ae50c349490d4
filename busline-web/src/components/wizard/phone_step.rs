use crate::components::ui::{Select, SelectOption, TextInput};
use busline_core::countries::{self, COUNTRIES};
use busline_core::validate::{self, ValidationError};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PhoneStepProps {
    pub country: Option<String>,
    /// Digits only; normalization happens upstream.
    pub phone: AttrValue,
    /// True once the user has tried to advance past this step.
    #[prop_or_default]
    pub attempted: bool,
    pub on_country: Callback<Option<String>>,
    pub on_phone: Callback<String>,
}

#[function_component(PhoneStep)]
pub fn phone_step(props: &PhoneStepProps) -> Html {
    let options = COUNTRIES
        .iter()
        .map(|country| SelectOption {
            value: AttrValue::Static(country.code),
            text: AttrValue::from(format!("{} ({})", country.name, country.dial_code)),
        })
        .collect::<Vec<_>>();
    let onchange = {
        let emit = props.on_country.clone();
        Callback::from(move |value: String| {
            emit.emit((!value.is_empty()).then_some(value));
        })
    };

    let country = props.country.as_deref().and_then(countries::by_code);
    let error = match country {
        Some(country) => (props.attempted || !props.phone.is_empty())
            .then(|| validate::phone(&props.phone, country).err())
            .flatten(),
        None => props.attempted.then_some(ValidationError::CountryMissing),
    };
    html! {
        <div class="wizard-step">
            <Select
                label="Country"
                value={props.country.clone().unwrap_or_default()}
                placeholder="Select country"
                {options}
                {onchange}
            />
            { country.map(|country| {
                html!{
                    <div class="phone-row">
                        <span class="phone-dial-code">{ country.dial_code }</span>
                        <TextInput
                            label="Phone number"
                            kind="tel"
                            value={props.phone.clone()}
                            placeholder="291234567"
                            invalid={error.is_some()}
                            oninput={props.on_phone.clone()}
                        />
                    </div>
                }
            }) }
            { match error {
                Some(err) => html!{ <p class="bl-hint bl-hint-error">{ err.to_string() }</p> },
                None => html!{ <p class="bl-hint">{ "Digits only, without the country code." }</p> },
            } }
        </div>
    }
}
