use crate::components::ui::{ErrorPanel, Spinner};
use busline_core::countries;
use busline_core::models::{BookingForm, Route};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmStepProps {
    pub form: BookingForm,
    /// `None` while the route lookup is in flight, `Some(Err)` when it failed.
    pub route: Option<Result<Route, String>>,
    pub on_retry: Callback<()>,
    pub submitting: bool,
}

#[function_component(ConfirmStep)]
pub fn confirm_step(props: &ConfirmStepProps) -> Html {
    if props.submitting {
        return html! { <Spinner label="Booking..." /> };
    }
    let route = match &props.route {
        None => return html! { <Spinner label="Loading route details..." /> },
        Some(Err(message)) => {
            return html! {
                <ErrorPanel message={message.clone()} on_retry={props.on_retry.clone()} />
            };
        }
        Some(Ok(route)) => route,
    };
    let form = &props.form;
    let dial_code = form
        .country_code
        .as_deref()
        .and_then(countries::by_code)
        .map_or("", |country| country.dial_code);
    let date = form
        .travel_date
        .map_or_else(String::new, |date| date.format("%Y-%m-%d").to_string());
    let total = route.price * f64::from(form.ticket_count);

    let row = |label: &str, value: String| {
        html! {
            <div class="confirm-row">
                <dt>{ label.to_string() }</dt>
                <dd>{ value }</dd>
            </div>
        }
    };
    html! {
        <dl class="confirm-summary">
            { row("Passenger", form.passenger_name.clone()) }
            { row("Date", date) }
            { row("Route", route.name.clone()) }
            { row("Tickets", form.ticket_count.to_string()) }
            { row("Phone", format!("{dial_code} {}", form.passenger_phone)) }
            { row("Total", format!("{total:.2} {}", route.currency)) }
        </dl>
    }
}
