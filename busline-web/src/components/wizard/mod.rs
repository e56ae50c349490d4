//! The multi-step booking flow: a reducer around the core wizard machine plus
//! the chrome wiring that keeps the host primary/back buttons in step.

pub mod confirm_step;
pub mod date_step;
pub mod name_step;
pub mod phone_step;
pub mod route_step;
pub mod tickets_step;

use crate::chrome::{Impact, Notice, PlatformChrome};
use crate::components::ui::{Button, ButtonVariant, ErrorPanel, StepDots};
use crate::services::{Services, use_services};
use busline_core::models::{Booking, Route};
use busline_core::validate;
use busline_core::wizard::{BookingWizard, WizardStep};
use chrono::NaiveDate;
use confirm_step::ConfirmStep;
use date_step::DateStep;
use name_step::NameStep;
use phone_step::PhoneStep;
use route_step::RouteStep;
use std::rc::Rc;
use tickets_step::TicketsStep;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub enum WizardAction {
    SetName(String),
    SetDate(Option<NaiveDate>),
    SetRoute(Option<String>),
    SetRouteLoaded(bool),
    SetTickets(u8),
    SetCountry(Option<String>),
    SetPhone(String),
    Next,
    Back,
    GoTo(WizardStep),
    Reset,
}

/// Reducer wrapper over the step machine. Every action clones the machine and
/// applies a single mutation through its methods, so refused transitions stay
/// refused here too.
#[derive(PartialEq)]
pub struct WizardState {
    pub wizard: BookingWizard,
    /// Set when an advance was refused; the active step then shows its
    /// empty-field error text instead of blocking silently.
    pub attempted: bool,
}

impl WizardState {
    #[must_use]
    pub fn new(prefill_name: Option<&str>) -> Self {
        Self {
            wizard: BookingWizard::new(prefill_name),
            attempted: false,
        }
    }
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: WizardAction) -> Rc<Self> {
        let mut wizard = self.wizard.clone();
        let mut attempted = self.attempted;
        match action {
            WizardAction::SetName(name) => wizard.form.passenger_name = name,
            WizardAction::SetDate(date) => {
                // Availability depends on the weekday, so a previously picked
                // route may not run on the new date.
                wizard.form.travel_date = date;
                wizard.form.route_id = None;
                wizard.set_route_loaded(false);
            }
            WizardAction::SetRoute(route_id) => {
                wizard.form.route_id = route_id;
                wizard.set_route_loaded(false);
            }
            WizardAction::SetRouteLoaded(loaded) => wizard.set_route_loaded(loaded),
            WizardAction::SetTickets(count) => wizard.form.ticket_count = count,
            WizardAction::SetCountry(code) => {
                // Operator prefixes differ per country; the entered number is
                // discarded together with the old country.
                wizard.form.country_code = code;
                wizard.form.passenger_phone.clear();
            }
            WizardAction::SetPhone(raw) => {
                wizard.form.passenger_phone = validate::digits_only(&raw);
            }
            WizardAction::Next => {
                attempted = !wizard.next(today());
            }
            WizardAction::Back => {
                wizard.back();
                attempted = false;
            }
            WizardAction::GoTo(step) => {
                wizard.go_to(step);
                attempted = false;
            }
            WizardAction::Reset => {
                wizard = BookingWizard::new(None);
                attempted = false;
            }
        }
        Rc::new(Self { wizard, attempted })
    }
}

/// Align the host buttons with the active step. Called from an effect on
/// every step or validity change so the click handlers never go stale.
pub fn sync_chrome(
    chrome: &dyn PlatformChrome,
    wizard: &BookingWizard,
    on_primary: &Callback<()>,
    on_back: &Callback<()>,
) {
    chrome.show_main_button(wizard.main_button_label(), on_primary.clone());
    if wizard.shows_back_button() {
        chrome.show_back_button(on_back.clone());
    } else {
        chrome.hide_back_button();
    }
}

/// Hide both host buttons; called when the wizard unmounts or completes.
pub fn release_chrome(chrome: &dyn PlatformChrome) {
    chrome.hide_main_button();
    chrome.hide_back_button();
}

fn primary_callback(
    services: &Services,
    state: &UseReducerHandle<WizardState>,
    selected_route: &UseStateHandle<Option<Result<Route, String>>>,
    booked: &UseStateHandle<Option<Booking>>,
    submitting: &UseStateHandle<bool>,
) -> Callback<()> {
    let services = services.clone();
    let state = state.clone();
    let selected_route = selected_route.clone();
    let booked = booked.clone();
    let submitting = submitting.clone();
    Callback::from(move |()| {
        if state.wizard.step() != WizardStep::Confirm {
            if state.wizard.can_advance(today()) {
                services.chrome.haptic_impact(Impact::Medium);
            } else {
                services.chrome.haptic_notification(Notice::Warning);
            }
            // A refused advance is recorded so the step can show why.
            state.dispatch(WizardAction::Next);
            return;
        }
        if *submitting {
            return;
        }
        let Some(Ok(route)) = (*selected_route).clone() else {
            services.chrome.show_alert("Route data is still loading.");
            return;
        };
        let form = state.wizard.form.clone();
        let total = route.price * f64::from(form.ticket_count);
        let date = form
            .travel_date
            .map_or_else(String::new, |date| date.format("%Y-%m-%d").to_string());
        let message = format!(
            "Book {} ticket(s) for {} on {date}, total {total:.2} {}?",
            form.ticket_count, route.name, route.currency
        );

        let services = services.clone();
        let booked = booked.clone();
        let submitting = submitting.clone();
        let confirm = {
            let services = services.clone();
            Callback::from(move |confirmed: bool| {
                if !confirmed {
                    services.chrome.haptic_selection();
                    return;
                }
                submitting.set(true);
                let services = services.clone();
                let form = form.clone();
                let route = route.clone();
                let date = date.clone();
                let booked = booked.clone();
                let submitting = submitting.clone();
                spawn_local(async move {
                    match services.api.create_booking(&form, services.user_id()).await {
                        Ok(booking) => {
                            services.chrome.haptic_notification(Notice::Success);
                            let payload = serde_json::json!({
                                "action": "booking_confirmed",
                                "booking_id": booking.id,
                                "passenger": booking.passenger_name,
                                "date": date,
                                "route": route.name,
                                "tickets": booking.ticket_count,
                                "phone": booking.passenger_phone,
                                "total_price": booking.total_price,
                            });
                            services.chrome.send_data(&payload);
                            booked.set(Some(booking));
                        }
                        Err(err) => {
                            log::error!("booking failed: {err}");
                            services.chrome.haptic_notification(Notice::Error);
                            services
                                .chrome
                                .show_alert("Booking failed. Please try again.");
                        }
                    }
                    submitting.set(false);
                });
            })
        };
        services.chrome.show_confirm(&message, confirm);
    })
}

#[function_component(WizardHost)]
pub fn wizard_host() -> Html {
    let services = use_services();
    let state = {
        let prefill = services.chrome.user().map(|user| user.full_name());
        use_reducer(move || WizardState::new(prefill.as_deref()))
    };
    let selected_route = use_state(|| None::<Result<Route, String>>);
    let route_reload = use_state(|| 0_u32);
    let booked = use_state(|| None::<Booking>);
    let submitting = use_state(|| false);

    // Selected-route lookup; the Tickets step is gated on it resolving. A
    // failed lookup lands in the state as Err so the step can render it
    // inline with a retry.
    {
        let services = services.clone();
        let dispatch = state.dispatcher();
        let selected_route = selected_route.clone();
        let deps = (state.wizard.form.route_id.clone(), *route_reload);
        use_effect_with(deps, move |(route_id, _)| {
            selected_route.set(None);
            if let Some(id) = route_id.clone() {
                spawn_local(async move {
                    match services.api.route(&id).await {
                        Ok(route) => {
                            selected_route.set(Some(Ok(route)));
                            dispatch.dispatch(WizardAction::SetRouteLoaded(true));
                        }
                        Err(err) => {
                            log::error!("route lookup failed: {err}");
                            selected_route.set(Some(Err(err.to_string())));
                        }
                    }
                });
            }
        });
    }

    // Host button wiring, rebound whenever the step or its validity changes.
    {
        let services = services.clone();
        let state = state.clone();
        let selected_route = selected_route.clone();
        let booked = booked.clone();
        let submitting = submitting.clone();
        let deps = (
            state.wizard.step(),
            state.wizard.can_advance(today()),
            booked.is_some(),
        );
        use_effect_with(deps, move |&(_, _, done)| {
            if done {
                release_chrome(&*services.chrome);
                return;
            }
            let on_primary =
                primary_callback(&services, &state, &selected_route, &booked, &submitting);
            let on_back = {
                let chrome = services.chrome.clone();
                let dispatch = state.dispatcher();
                Callback::from(move |()| {
                    chrome.haptic_impact(Impact::Light);
                    dispatch.dispatch(WizardAction::Back);
                })
            };
            sync_chrome(&*services.chrome, &state.wizard, &on_primary, &on_back);
        });
    }

    // Unmount cleanup.
    {
        let chrome = services.chrome.clone();
        use_effect_with((), move |()| move || release_chrome(&*chrome));
    }

    if let Some(booking) = (*booked).clone() {
        let on_reset = {
            let dispatch = state.dispatcher();
            let booked = booked.clone();
            Callback::from(move |_| {
                booked.set(None);
                dispatch.dispatch(WizardAction::Reset);
            })
        };
        return html! {
            <section class="wizard wizard-done">
                <h2>{ "Booking received" }</h2>
                <p>{ format!("Reference {}", booking.id) }</p>
                <p>{ format!("Total {:.2} {}", booking.total_price, booking.currency) }</p>
                <p>{ format!("Status: {}", booking.status.label()) }</p>
                <Button label="Book another trip" onclick={on_reset} />
            </section>
        };
    }

    let step = state.wizard.step();
    let form = &state.wizard.form;
    let attempted = state.attempted;
    let today_value = today();
    let on_route_retry = {
        let route_reload = route_reload.clone();
        Callback::from(move |()| route_reload.set(*route_reload + 1))
    };

    let body = match step {
        WizardStep::Name => {
            let on_change = {
                let dispatch = state.dispatcher();
                Callback::from(move |name| dispatch.dispatch(WizardAction::SetName(name)))
            };
            html! { <NameStep value={form.passenger_name.clone()} {attempted} {on_change} /> }
        }
        WizardStep::Date => {
            let on_change = {
                let dispatch = state.dispatcher();
                Callback::from(move |date| dispatch.dispatch(WizardAction::SetDate(date)))
            };
            html! {
                <DateStep value={form.travel_date} today={today_value} {attempted} {on_change} />
            }
        }
        WizardStep::Route => match form.travel_date {
            Some(date) => {
                let on_select = {
                    let dispatch = state.dispatcher();
                    Callback::from(move |id| dispatch.dispatch(WizardAction::SetRoute(id)))
                };
                html! {
                    <RouteStep
                        {date}
                        selected={form.route_id.clone()}
                        {attempted}
                        {on_select}
                    />
                }
            }
            None => html! { <ErrorPanel message="Pick a travel date first." /> },
        },
        WizardStep::Tickets => {
            let on_change = {
                let dispatch = state.dispatcher();
                Callback::from(move |count| dispatch.dispatch(WizardAction::SetTickets(count)))
            };
            html! {
                <TicketsStep
                    count={form.ticket_count}
                    route={(*selected_route).clone()}
                    on_retry={on_route_retry.clone()}
                    {on_change}
                />
            }
        }
        WizardStep::Phone => {
            let on_country = {
                let dispatch = state.dispatcher();
                Callback::from(move |code| dispatch.dispatch(WizardAction::SetCountry(code)))
            };
            let on_phone = {
                let dispatch = state.dispatcher();
                Callback::from(move |raw| dispatch.dispatch(WizardAction::SetPhone(raw)))
            };
            html! {
                <PhoneStep
                    country={form.country_code.clone()}
                    phone={form.passenger_phone.clone()}
                    {attempted}
                    {on_country}
                    {on_phone}
                />
            }
        }
        WizardStep::Confirm => html! {
            <ConfirmStep
                form={form.clone()}
                route={(*selected_route).clone()}
                on_retry={on_route_retry.clone()}
                submitting={*submitting}
            />
        },
    };

    let on_dot = {
        let dispatch = state.dispatcher();
        Callback::from(move |step| dispatch.dispatch(WizardAction::GoTo(step)))
    };

    // In-page navigation is only rendered outside a host WebView, where the
    // host buttons degrade to log lines.
    let fallback_nav = (!services.chrome.is_embedded()).then(|| {
        let on_primary =
            primary_callback(&services, &state, &selected_route, &booked, &submitting);
        let primary = Callback::from(move |_| on_primary.emit(()));
        let back = state.wizard.shows_back_button().then(|| {
            let chrome = services.chrome.clone();
            let dispatch = state.dispatcher();
            let onclick = Callback::from(move |_| {
                chrome.haptic_impact(Impact::Light);
                dispatch.dispatch(WizardAction::Back);
            });
            html! { <Button label="Back" variant={ButtonVariant::Ghost} {onclick} /> }
        });
        // Kept enabled like the host main button; a refused press makes the
        // step show its error text.
        html! {
            <div class="wizard-nav">
                { back }
                <Button label={state.wizard.main_button_label()} onclick={primary} />
            </div>
        }
    });

    html! {
        <section class="wizard">
            <StepDots current={step} on_select={on_dot} />
            <h2 class="wizard-title">{ step.title() }</h2>
            { body }
            { fallback_nav }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::recording::RecordingChrome;

    fn reduce(state: Rc<WizardState>, action: WizardAction) -> Rc<WizardState> {
        Reducible::reduce(state, action)
    }

    #[test]
    fn phone_input_is_normalized_to_digits() {
        let state = Rc::new(WizardState::new(None));
        let state = reduce(state, WizardAction::SetPhone("+29 123-45-67".into()));
        assert_eq!(state.wizard.form.passenger_phone, "291234567");
    }

    #[test]
    fn changing_the_date_drops_the_route_choice() {
        let state = Rc::new(WizardState::new(None));
        let state = reduce(state, WizardAction::SetRoute(Some("minsk-riga".into())));
        let state = reduce(state, WizardAction::SetRouteLoaded(true));
        let state = reduce(state, WizardAction::SetDate(today().succ_opt()));
        assert!(state.wizard.form.route_id.is_none());
    }

    #[test]
    fn changing_the_country_clears_the_entered_phone() {
        let state = Rc::new(WizardState::new(None));
        let state = reduce(state, WizardAction::SetPhone("291234567".into()));
        let state = reduce(state, WizardAction::SetCountry(Some("LT".into())));
        assert!(state.wizard.form.passenger_phone.is_empty());
        assert_eq!(state.wizard.form.country_code.as_deref(), Some("LT"));
    }

    #[test]
    fn next_through_the_reducer_respects_validation() {
        let state = Rc::new(WizardState::new(None));
        let state = reduce(state, WizardAction::Next);
        assert_eq!(state.wizard.step(), WizardStep::Name);

        let state = reduce(state, WizardAction::SetName("Ann Lee".into()));
        let state = reduce(state, WizardAction::Next);
        assert_eq!(state.wizard.step(), WizardStep::Date);
    }

    #[test]
    fn refused_advance_is_recorded_until_the_step_passes() {
        let state = Rc::new(WizardState::new(None));
        let state = reduce(state, WizardAction::Next);
        assert!(state.attempted);
        assert_eq!(state.wizard.step(), WizardStep::Name);

        // Editing the field does not hide the recorded refusal by itself.
        let state = reduce(state, WizardAction::SetName("Ann Lee".into()));
        assert!(state.attempted);

        let state = reduce(state, WizardAction::Next);
        assert!(!state.attempted);
        assert_eq!(state.wizard.step(), WizardStep::Date);
    }

    #[test]
    fn back_and_jump_clear_the_recorded_refusal() {
        let state = Rc::new(WizardState::new(Some("Ann Lee")));
        let state = reduce(state, WizardAction::Next);
        let state = reduce(state, WizardAction::Next);
        assert!(state.attempted);

        let state = reduce(state, WizardAction::Back);
        assert!(!state.attempted);

        let state = reduce(state, WizardAction::Next);
        let state = reduce(state, WizardAction::Next);
        let state = reduce(state, WizardAction::GoTo(WizardStep::Name));
        assert!(!state.attempted);
    }

    #[test]
    fn reset_returns_to_a_blank_first_step() {
        let state = Rc::new(WizardState::new(Some("Ann Lee")));
        let state = reduce(state, WizardAction::Next);
        let state = reduce(state, WizardAction::Reset);
        assert_eq!(state.wizard.step(), WizardStep::Name);
        assert!(state.wizard.form.passenger_name.is_empty());
    }

    #[test]
    fn sync_chrome_shows_the_step_label_and_hides_back_on_the_first_step() {
        let chrome = RecordingChrome::default();
        let wizard = BookingWizard::new(None);
        sync_chrome(
            &chrome,
            &wizard,
            &Callback::from(|()| {}),
            &Callback::from(|()| {}),
        );
        assert_eq!(
            chrome.events(),
            vec!["main:show:Continue".to_string(), "back:hide".to_string()]
        );
        assert!(chrome.main_button_visible());
        assert!(!chrome.back_button_visible());
    }

    #[test]
    fn sync_chrome_shows_back_past_the_first_step() {
        let chrome = RecordingChrome::default();
        let mut wizard = BookingWizard::new(None);
        wizard.form.passenger_name = "Ann Lee".into();
        assert!(wizard.next(today()));
        sync_chrome(
            &chrome,
            &wizard,
            &Callback::from(|()| {}),
            &Callback::from(|()| {}),
        );
        assert!(chrome.back_button_visible());
        assert!(chrome.events().contains(&"back:show".to_string()));
    }

    #[test]
    fn release_chrome_hides_both_buttons() {
        let chrome = RecordingChrome::default();
        sync_chrome(
            &chrome,
            &BookingWizard::new(None),
            &Callback::from(|()| {}),
            &Callback::from(|()| {}),
        );
        release_chrome(&chrome);
        assert!(!chrome.main_button_visible());
        assert!(!chrome.back_button_visible());
    }

    #[test]
    fn host_back_click_walks_one_step_back() {
        let chrome = RecordingChrome::default();
        let state = Rc::new(WizardState::new(Some("Ann Lee")));
        let state = reduce(state, WizardAction::Next);
        assert_eq!(state.wizard.step(), WizardStep::Date);

        let walked = Rc::new(std::cell::RefCell::new(state));
        let slot = walked.clone();
        let on_back = Callback::from(move |()| {
            let current = slot.borrow().clone();
            *slot.borrow_mut() = Reducible::reduce(current, WizardAction::Back);
        });
        sync_chrome(
            &chrome,
            &walked.borrow().wizard.clone(),
            &Callback::from(|()| {}),
            &on_back,
        );
        chrome.click_back();
        assert_eq!(walked.borrow().wizard.step(), WizardStep::Name);
    }
}
