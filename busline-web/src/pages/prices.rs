use crate::components::ui::{ErrorPanel, Spinner};
use crate::services::use_services;
use busline_core::models::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(PricesPage)]
pub fn prices_page() -> Html {
    let services = use_services();
    let routes = use_state(|| None::<Result<Vec<Route>, String>>);

    {
        let services = services.clone();
        let routes = routes.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match services.api.list_routes().await {
                    Ok(mut list) => {
                        list.sort_by(|a, b| a.price.total_cmp(&b.price));
                        routes.set(Some(Ok(list)));
                    }
                    Err(err) => routes.set(Some(Err(err.to_string()))),
                }
            });
        });
    }

    let body = match &*routes {
        None => html! { <Spinner label="Loading prices..." /> },
        Some(Err(message)) => html! { <ErrorPanel message={message.clone()} /> },
        Some(Ok(list)) => html! {
            <table class="price-table">
                <thead>
                    <tr>
                        <th>{ "Route" }</th>
                        <th>{ "Travel time" }</th>
                        <th>{ "Runs" }</th>
                        <th>{ "Price" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for list.iter().map(|route| html!{
                        <tr key={route.id.clone()}>
                            <td>{ &route.name }</td>
                            <td>{ &route.duration }</td>
                            <td>{ super::day_names(&route.available_days) }</td>
                            <td>{ format!("{:.2} {}", route.price, route.currency) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };
    html! {
        <main class="page page-prices">
            <h2>{ "Ticket prices" }</h2>
            { body }
        </main>
    }
}
