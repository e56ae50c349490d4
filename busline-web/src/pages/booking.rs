use crate::components::wizard::WizardHost;
use yew::prelude::*;

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    html! {
        <main class="page page-booking">
            <WizardHost />
        </main>
    }
}
