//! Application shell: service construction, theming and routing.

use crate::chrome;
use crate::pages::{
    AdminPage, AssistantPage, BookingPage, MyBookingsPage, NotFoundPage, PricesPage, SchedulePage,
};
use crate::router::Route;
use crate::services::Services;
use crate::storage::{FrameLatency, LocalStorageStore};
use busline_core::api::{DataService, MockApi};
use busline_core::store::MemoryStore;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Detect the host chrome and open the durable store. A browser that blocks
/// `localStorage` still gets a working app, just without persistence.
fn build_services() -> Services {
    let chrome = chrome::detect();
    let api: Rc<dyn DataService> = match MockApi::new(LocalStorageStore, FrameLatency::default()) {
        Ok(api) => Rc::new(api),
        Err(err) => {
            log::warn!("localStorage unavailable ({err}); keeping data in memory for this session");
            Rc::new(
                MockApi::new(MemoryStore::default(), FrameLatency::default())
                    .expect("the in-memory store accepts every write"),
            )
        }
    };
    Services::new(chrome, api)
}

fn switch(route: Route) -> Html {
    match route {
        Route::Booking => html! { <BookingPage /> },
        Route::Schedule => html! { <SchedulePage /> },
        Route::Prices => html! { <PricesPage /> },
        Route::MyBookings => html! { <MyBookingsPage /> },
        Route::Assistant => html! { <AssistantPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| build_services());
    let services = (*services).clone();

    {
        let theme = services.chrome.color_scheme();
        use_effect_with(theme, move |theme| {
            if let Some(body) = crate::dom::document().body() {
                let _ = body.set_attribute("data-theme", theme.css_name());
            }
        });
    }

    html! {
        <ContextProvider<Services> context={services}>
            <BrowserRouter>
                <header class="app-header">
                    <h1 class="app-title">{ "Busline" }</h1>
                    <nav class="app-nav">
                        { for Route::MENU.iter().map(|route| html!{
                            <Link<Route> to={route.clone()} classes="app-nav-link">
                                { route.title() }
                            </Link<Route>>
                        }) }
                    </nav>
                </header>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Services>>
    }
}
