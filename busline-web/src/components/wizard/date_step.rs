use crate::components::ui::TextInput;
use busline_core::validate::{self, BOOKING_WINDOW_DAYS, ValidationError};
use chrono::{Days, NaiveDate};
use yew::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Properties, PartialEq, Clone)]
pub struct DateStepProps {
    pub value: Option<NaiveDate>,
    pub today: NaiveDate,
    /// True once the user has tried to advance past this step.
    #[prop_or_default]
    pub attempted: bool,
    pub on_change: Callback<Option<NaiveDate>>,
}

#[function_component(DateStep)]
pub fn date_step(props: &DateStepProps) -> Html {
    let horizon = props
        .today
        .checked_add_days(Days::new(BOOKING_WINDOW_DAYS))
        .unwrap_or(props.today);
    let oninput = {
        let emit = props.on_change.clone();
        Callback::from(move |raw: String| {
            emit.emit(NaiveDate::parse_from_str(&raw, DATE_FORMAT).ok());
        })
    };
    let error = match props.value {
        Some(date) => validate::travel_date(date, props.today).err(),
        None => props.attempted.then_some(ValidationError::DateMissing),
    };
    html! {
        <div class="wizard-step">
            <TextInput
                label="Travel date"
                kind="date"
                value={props.value.map(|date| date.format(DATE_FORMAT).to_string()).unwrap_or_default()}
                min={props.today.format(DATE_FORMAT).to_string()}
                max={horizon.format(DATE_FORMAT).to_string()}
                invalid={error.is_some()}
                {oninput}
            />
            { error.map(|err| html!{ <p class="bl-hint bl-hint-error">{ err.to_string() }</p> }) }
        </div>
    }
}
