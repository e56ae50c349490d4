use crate::components::ui::{Button, ButtonVariant, ErrorPanel, Spinner};
use busline_core::models::Route;
use busline_core::validate::{self, MAX_TICKETS, MIN_TICKETS};
use yew::prelude::*;

/// One tick down, a no-op at the lower bound.
fn decremented(count: u8) -> u8 {
    count.saturating_sub(1).max(MIN_TICKETS)
}

/// One tick up, a no-op at the upper bound.
fn incremented(count: u8) -> u8 {
    count.saturating_add(1).min(MAX_TICKETS)
}

#[derive(Properties, PartialEq, Clone)]
pub struct TicketsStepProps {
    pub count: u8,
    /// The route picked on the previous step: `None` while its lookup is in
    /// flight, `Some(Err)` when the lookup failed.
    pub route: Option<Result<Route, String>>,
    pub on_retry: Callback<()>,
    pub on_change: Callback<u8>,
}

#[function_component(TicketsStep)]
pub fn tickets_step(props: &TicketsStepProps) -> Html {
    let route = match &props.route {
        None => return html! { <Spinner label="Loading route details..." /> },
        Some(Err(message)) => {
            return html! {
                <ErrorPanel message={message.clone()} on_retry={props.on_retry.clone()} />
            };
        }
        Some(Ok(route)) => route,
    };
    let down = {
        let emit = props.on_change.clone();
        let count = props.count;
        Callback::from(move |_| emit.emit(decremented(count)))
    };
    let up = {
        let emit = props.on_change.clone();
        let count = props.count;
        Callback::from(move |_| emit.emit(incremented(count)))
    };
    let error = validate::ticket_count(props.count).err();
    let total = route.price * f64::from(props.count);
    html! {
        <div class="wizard-step">
            <p class="ticket-route">
                { format!("{}: {:.2} {} per ticket", route.name, route.price, route.currency) }
            </p>
            <div class="ticket-counter">
                <Button
                    label="-"
                    variant={ButtonVariant::Ghost}
                    aria_label="Fewer tickets"
                    disabled={props.count <= MIN_TICKETS}
                    onclick={down}
                />
                <span class="ticket-count">{ props.count }</span>
                <Button
                    label="+"
                    variant={ButtonVariant::Ghost}
                    aria_label="More tickets"
                    disabled={props.count >= MAX_TICKETS}
                    onclick={up}
                />
            </div>
            { match error {
                Some(err) => html!{ <p class="bl-hint bl-hint-error">{ err.to_string() }</p> },
                None => html!{ <p class="ticket-total">{ format!("Total: {total:.2} {}", route.currency) }</p> },
            } }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_clamps_at_both_bounds() {
        assert_eq!(decremented(1), 1);
        assert_eq!(decremented(2), 1);
        assert_eq!(incremented(10), 10);
        assert_eq!(incremented(9), 10);
    }
}
