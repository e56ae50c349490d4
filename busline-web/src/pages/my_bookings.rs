use crate::chrome::Notice;
use crate::components::ui::{Button, ButtonVariant, ErrorPanel, Spinner};
use crate::services::use_services;
use busline_core::models::{Booking, BookingStatus, Route};
use busline_core::api::BookingPatch;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn route_name<'a>(routes: &'a [Route], id: &'a str) -> &'a str {
    routes
        .iter()
        .find(|route| route.id == id)
        .map_or(id, |route| route.name.as_str())
}

#[function_component(MyBookingsPage)]
pub fn my_bookings_page() -> Html {
    let services = use_services();
    let data = use_state(|| None::<Result<(Vec<Booking>, Vec<Route>), String>>);
    let reload = use_state(|| 0_u32);

    {
        let services = services.clone();
        let data = data.clone();
        use_effect_with(*reload, move |_| {
            data.set(None);
            spawn_local(async move {
                let loaded = async {
                    let bookings = services.api.bookings_for_user(services.user_id()).await?;
                    let routes = services.api.list_routes().await?;
                    Ok::<_, busline_core::api::ApiError>((bookings, routes))
                }
                .await;
                data.set(Some(loaded.map_err(|err| err.to_string())));
            });
        });
    }

    let cancel = {
        let services = services.clone();
        let reload = reload.clone();
        Callback::from(move |booking: Booking| {
            let services = services.clone();
            let reload = reload.clone();
            let message = format!("Cancel booking {}?", booking.id);
            let on_choice = {
                let services = services.clone();
                Callback::from(move |confirmed: bool| {
                    if !confirmed {
                        return;
                    }
                    let services = services.clone();
                    let reload = reload.clone();
                    let id = booking.id.clone();
                    spawn_local(async move {
                        let patch = BookingPatch {
                            status: Some(BookingStatus::Cancelled),
                        };
                        match services.api.update_booking(&id, patch).await {
                            Ok(_) => {
                                services.chrome.haptic_notification(Notice::Success);
                                reload.set(*reload + 1);
                            }
                            Err(err) => {
                                log::error!("cancel failed: {err}");
                                services.chrome.haptic_notification(Notice::Error);
                                services.chrome.show_alert("Could not cancel the booking.");
                            }
                        }
                    });
                })
            };
            services.chrome.show_confirm(&message, on_choice);
        })
    };

    let body = match &*data {
        None => html! { <Spinner label="Loading your tickets..." /> },
        Some(Err(message)) => html! { <ErrorPanel message={message.clone()} /> },
        Some(Ok((bookings, _))) if bookings.is_empty() => html! {
            <p>{ "You have no bookings yet. Book a trip from the first tab." }</p>
        },
        Some(Ok((bookings, routes))) => html! {
            <ul class="booking-list">
                { for bookings.iter().map(|booking| {
                    let cancellable = booking.status == BookingStatus::Pending;
                    let onclick = {
                        let cancel = cancel.clone();
                        let booking = booking.clone();
                        Callback::from(move |_| cancel.emit(booking.clone()))
                    };
                    html!{
                        <li class={classes!("booking-card", format!("booking-{}", booking.status.label().to_lowercase()))} key={booking.id.clone()}>
                            <div class="booking-head">
                                <span class="booking-route">{ route_name(routes, &booking.route_id) }</span>
                                <span class="booking-status">{ booking.status.label() }</span>
                            </div>
                            <p>{ format!("{} ticket(s), {:.2} {}", booking.ticket_count, booking.total_price, booking.currency) }</p>
                            <p class="booking-meta">
                                { format!("{}, booked {}", booking.id, booking.created_at.format("%Y-%m-%d %H:%M")) }
                            </p>
                            { cancellable.then(|| html!{
                                <Button label="Cancel" variant={ButtonVariant::Danger} {onclick} />
                            }) }
                        </li>
                    }
                }) }
            </ul>
        },
    };
    html! {
        <main class="page page-bookings">
            <h2>{ "My tickets" }</h2>
            { body }
        </main>
    }
}
