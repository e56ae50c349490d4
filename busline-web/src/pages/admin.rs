use crate::chrome::Notice;
use crate::components::ui::{Button, ButtonVariant, ErrorPanel, Spinner, TextInput};
use crate::services::use_services;
use busline_core::api::NewRoute;
use busline_core::models::{DayCode, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Placeholder gate for the demo build; a real deployment would check the
// host platform's identity instead.
const ADMIN_PASSWORD: &str = "admin123";

fn parse_days(raw: &str) -> Vec<DayCode> {
    let mut days: Vec<DayCode> = raw
        .split(',')
        .filter_map(|part| part.trim().parse::<DayCode>().ok())
        .filter(|&day| day <= 6)
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

#[derive(Clone, PartialEq, Default)]
struct RouteDraft {
    origin: String,
    destination: String,
    duration: String,
    price: String,
    days: String,
}

impl RouteDraft {
    fn build(&self) -> Option<NewRoute> {
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        let price = self.price.trim().parse::<f64>().ok()?;
        let days = parse_days(&self.days);
        if origin.is_empty() || destination.is_empty() || price <= 0.0 || days.is_empty() {
            return None;
        }
        Some(NewRoute {
            name: format!("{origin} – {destination}"),
            origin: origin.to_string(),
            destination: destination.to_string(),
            duration: self.duration.trim().to_string(),
            price,
            currency: "BYN".to_string(),
            available_days: days,
        })
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let services = use_services();
    let unlocked = use_state(|| false);
    let password = use_state(String::new);
    let routes = use_state(|| None::<Result<Vec<Route>, String>>);
    let reload = use_state(|| 0_u32);
    let draft = use_state(RouteDraft::default);

    {
        let services = services.clone();
        let routes = routes.clone();
        let load = *unlocked;
        use_effect_with((*reload, load), move |&(_, load)| {
            if !load {
                return;
            }
            routes.set(None);
            spawn_local(async move {
                match services.api.list_routes().await {
                    Ok(list) => routes.set(Some(Ok(list))),
                    Err(err) => routes.set(Some(Err(err.to_string()))),
                }
            });
        });
    }

    if !*unlocked {
        let on_password = {
            let password = password.clone();
            Callback::from(move |value: String| password.set(value))
        };
        let onclick = {
            let services = services.clone();
            let password = password.clone();
            let unlocked = unlocked.clone();
            Callback::from(move |_| {
                if *password == ADMIN_PASSWORD {
                    unlocked.set(true);
                } else {
                    services.chrome.haptic_notification(Notice::Error);
                    services.chrome.show_alert("Wrong password.");
                }
            })
        };
        return html! {
            <main class="page page-admin">
                <h2>{ "Admin" }</h2>
                <TextInput label="Password" kind="password" value={(*password).clone()} oninput={on_password} />
                <Button label="Sign in" {onclick} />
            </main>
        };
    }

    let delete = {
        let services = services.clone();
        let reload = reload.clone();
        Callback::from(move |route: Route| {
            let services = services.clone();
            let reload = reload.clone();
            let message = format!("Delete route {}?", route.name);
            let on_choice = {
                let services = services.clone();
                Callback::from(move |confirmed: bool| {
                    if !confirmed {
                        return;
                    }
                    let services = services.clone();
                    let reload = reload.clone();
                    let id = route.id.clone();
                    spawn_local(async move {
                        match services.api.delete_route(&id).await {
                            Ok(()) => reload.set(*reload + 1),
                            Err(err) => {
                                log::error!("route delete failed: {err}");
                                services.chrome.show_alert("Could not delete the route.");
                            }
                        }
                    });
                })
            };
            services.chrome.show_confirm(&message, on_choice);
        })
    };

    let create = {
        let services = services.clone();
        let draft = draft.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            let Some(route) = draft.build() else {
                services.chrome.haptic_notification(Notice::Warning);
                services
                    .chrome
                    .show_alert("Fill in origin, destination, a price and at least one day (0-6).");
                return;
            };
            let services = services.clone();
            let draft = draft.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match services.api.create_route(route).await {
                    Ok(_) => {
                        draft.set(RouteDraft::default());
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        log::error!("route create failed: {err}");
                        services.chrome.show_alert("Could not create the route.");
                    }
                }
            });
        })
    };

    let field = |label: &'static str,
                 placeholder: &'static str,
                 value: String,
                 apply: fn(&mut RouteDraft, String)| {
        let draft = draft.clone();
        let oninput = Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        });
        html! { <TextInput {label} {placeholder} {value} {oninput} /> }
    };

    let body = match &*routes {
        None => html! { <Spinner label="Loading routes..." /> },
        Some(Err(message)) => html! { <ErrorPanel message={message.clone()} /> },
        Some(Ok(list)) => html! {
            <ul class="admin-route-list">
                { for list.iter().map(|route| {
                    let onclick = {
                        let delete = delete.clone();
                        let route = route.clone();
                        Callback::from(move |_| delete.emit(route.clone()))
                    };
                    html!{
                        <li key={route.id.clone()}>
                            <span>{ format!("{} ({}, {:.2} {})", route.name, super::day_names(&route.available_days), route.price, route.currency) }</span>
                            <Button label="Delete" variant={ButtonVariant::Danger} {onclick} />
                        </li>
                    }
                }) }
            </ul>
        },
    };

    html! {
        <main class="page page-admin">
            <h2>{ "Admin" }</h2>
            { body }
            <h3>{ "New route" }</h3>
            <div class="admin-form">
                { field("Origin", "Minsk", draft.origin.clone(), |draft, value| draft.origin = value) }
                { field("Destination", "Lviv", draft.destination.clone(), |draft, value| draft.destination = value) }
                { field("Travel time", "09:45", draft.duration.clone(), |draft, value| draft.duration = value) }
                { field("Price, BYN", "95", draft.price.clone(), |draft, value| draft.price = value) }
                { field("Days (0=Sun .. 6=Sat)", "1,3,5", draft.days.clone(), |draft, value| draft.days = value) }
                <Button label="Add route" onclick={create} />
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_list_parsing_drops_junk_and_duplicates() {
        assert_eq!(parse_days("1, 3,5,5, 9, x"), vec![1, 3, 5]);
        assert!(parse_days("").is_empty());
    }

    #[test]
    fn draft_requires_price_and_days() {
        let mut draft = RouteDraft {
            origin: "Minsk".into(),
            destination: "Lviv".into(),
            duration: "09:45".into(),
            price: "95".into(),
            days: "1,3".into(),
        };
        let route = draft.build().unwrap();
        assert_eq!(route.name, "Minsk – Lviv");
        assert_eq!(route.available_days, vec![1, 3]);

        draft.price = "free".into();
        assert!(draft.build().is_none());
        draft.price = "95".into();
        draft.days = "7,8".into();
        assert!(draft.build().is_none());
    }
}
