use crate::components::ui::{ErrorPanel, Spinner, TextInput};
use crate::services::use_services;
use busline_core::models::{Route, Schedule};
use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Route browser: free-text search plus a date filter, with per-route
/// departure listings where the data has any.
#[function_component(SchedulePage)]
pub fn schedule_page() -> Html {
    let services = use_services();
    let routes = use_state(|| None::<Result<Vec<Route>, String>>);
    let query = use_state(String::new);
    let date = use_state(|| chrono::Local::now().date_naive());
    let open_route = use_state(|| None::<String>);
    let departures = use_state(|| None::<Vec<Schedule>>);

    {
        let services = services.clone();
        let routes = routes.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match services.api.list_routes().await {
                    Ok(list) => routes.set(Some(Ok(list))),
                    Err(err) => routes.set(Some(Err(err.to_string()))),
                }
            });
        });
    }

    // Departure lookup for the expanded route.
    {
        let services = services.clone();
        let departures = departures.clone();
        use_effect_with(((*open_route).clone(), *date), move |(route_id, date)| {
            departures.set(None);
            if let Some(route_id) = route_id.clone() {
                let date = *date;
                spawn_local(async move {
                    match services.api.schedules_for(&route_id, date).await {
                        Ok(list) => departures.set(Some(list)),
                        Err(err) => {
                            log::error!("schedule lookup failed: {err}");
                            departures.set(Some(Vec::new()));
                        }
                    }
                });
            }
        });
    }

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_date = {
        let date = date.clone();
        Callback::from(move |raw: String| {
            if let Ok(parsed) = NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                date.set(parsed);
            }
        })
    };

    let body = match &*routes {
        None => html! { <Spinner label="Loading schedule..." /> },
        Some(Err(message)) => html! { <ErrorPanel message={message.clone()} /> },
        Some(Ok(list)) => {
            let visible: Vec<&Route> = list
                .iter()
                .filter(|route| route.runs_on(*date))
                .filter(|route| query.is_empty() || route.matches_query(&query))
                .collect();
            if visible.is_empty() {
                html! { <p>{ "No routes match the chosen day and search." }</p> }
            } else {
                html! {
                    <ul class="schedule-list">
                        { for visible.iter().map(|route| {
                            let open = open_route.as_deref() == Some(route.id.as_str());
                            let onclick = {
                                let open_route = open_route.clone();
                                let id = route.id.clone();
                                Callback::from(move |_| {
                                    let next = if open_route.as_deref() == Some(id.as_str()) {
                                        None
                                    } else {
                                        Some(id.clone())
                                    };
                                    open_route.set(next);
                                })
                            };
                            html!{
                                <li class="schedule-card" key={route.id.clone()}>
                                    <button type="button" class="schedule-card-head" {onclick}>
                                        <span>{ &route.name }</span>
                                        <span>{ format!("{}, {}", route.duration, super::day_names(&route.available_days)) }</span>
                                    </button>
                                    { open.then(|| match &*departures {
                                        None => html!{ <Spinner label="Loading departures..." /> },
                                        Some(list) if list.is_empty() => html!{
                                            <p class="schedule-empty">{ "No timetabled departures for this date. Seats are assigned at boarding." }</p>
                                        },
                                        Some(list) => html!{
                                            <ul class="departure-list">
                                                { for list.iter().map(|schedule| html!{
                                                    <li key={schedule.id.clone()}>
                                                        { format!(
                                                            "{} to {}, {} of {} seats free",
                                                            schedule.departure_time,
                                                            schedule.arrival_time,
                                                            schedule.available_seats,
                                                            schedule.total_seats,
                                                        ) }
                                                    </li>
                                                }) }
                                            </ul>
                                        },
                                    }) }
                                </li>
                            }
                        }) }
                    </ul>
                }
            }
        }
    };

    html! {
        <main class="page page-schedule">
            <h2>{ "Schedule" }</h2>
            <div class="schedule-filters">
                <TextInput label="Search" placeholder="City or route" value={(*query).clone()} oninput={on_query} />
                <TextInput label="Date" kind="date" value={date.format(DATE_FORMAT).to_string()} oninput={on_date} />
            </div>
            { body }
        </main>
    }
}
