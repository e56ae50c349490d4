use crate::components::ui::{ErrorPanel, Spinner, TextInput};
use crate::services::use_services;
use busline_core::models::Route;
use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RouteStepProps {
    pub date: NaiveDate,
    pub selected: Option<String>,
    /// True once the user has tried to advance past this step.
    #[prop_or_default]
    pub attempted: bool,
    pub on_select: Callback<Option<String>>,
}

#[function_component(RouteStep)]
pub fn route_step(props: &RouteStepProps) -> Html {
    let services = use_services();
    let routes = use_state(|| None::<Result<Vec<Route>, String>>);
    let reload = use_state(|| 0_u32);
    let query = use_state(String::new);

    {
        let services = services.clone();
        let routes = routes.clone();
        let selected = props.selected.clone();
        let on_select = props.on_select.clone();
        use_effect_with((props.date, *reload), move |&(date, _)| {
            routes.set(None);
            spawn_local(async move {
                match services.api.routes_available_on(date).await {
                    Ok(list) => {
                        // A previously chosen route may have dropped out of
                        // the refreshed list; clear it instead of keeping a
                        // selection the user can no longer see.
                        if let Some(id) = &selected {
                            if !list.iter().any(|route| &route.id == id) {
                                on_select.emit(None);
                            }
                        }
                        routes.set(Some(Ok(list)));
                    }
                    Err(err) => routes.set(Some(Err(err.to_string()))),
                }
            });
        });
    }

    let on_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let body = match &*routes {
        None => html! { <Spinner label="Loading routes..." /> },
        Some(Err(message)) => {
            let on_retry = {
                let reload = reload.clone();
                Callback::from(move |()| reload.set(*reload + 1))
            };
            html! { <ErrorPanel message={message.clone()} {on_retry} /> }
        }
        Some(Ok(list)) if list.is_empty() => html! {
            <p class="route-list-empty">{ "No routes run on this date. Try another day." }</p>
        },
        Some(Ok(list)) => {
            let visible: Vec<&Route> = list
                .iter()
                .filter(|route| query.is_empty() || route.matches_query(&query))
                .collect();
            if visible.is_empty() {
                html! { <p class="route-list-empty">{ "No routes match the search." }</p> }
            } else {
                html! {
                    <ul class="route-list">
                        { for visible.iter().map(|route| {
                            let picked = props.selected.as_deref() == Some(route.id.as_str());
                            let onclick = {
                                let on_select = props.on_select.clone();
                                let chrome = services.chrome.clone();
                                let id = route.id.clone();
                                Callback::from(move |_| {
                                    chrome.haptic_selection();
                                    on_select.emit(Some(id.clone()));
                                })
                            };
                            let class = if picked {
                                classes!("route-card", "route-card-picked")
                            } else {
                                classes!("route-card")
                            };
                            html!{
                                <li>
                                    <button type="button" {class} {onclick}>
                                        <span class="route-card-name">{ &route.name }</span>
                                        <span class="route-card-duration">{ format!("{} on the road", route.duration) }</span>
                                        <span class="route-card-price">{ format!("{:.2} {}", route.price, route.currency) }</span>
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            }
        }
    };

    html! {
        <div class="wizard-step">
            <TextInput
                label="Search"
                placeholder="City or route"
                value={(*query).clone()}
                oninput={on_query}
            />
            { body }
            { (props.attempted && props.selected.is_none()).then(|| html!{
                <p class="bl-hint bl-hint-error">{ "Pick a route to continue." }</p>
            }) }
        </div>
    }
}
