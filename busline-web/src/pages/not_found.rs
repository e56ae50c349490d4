use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page page-not-found">
            <h2>{ "Page not found" }</h2>
            <p>{ "The address does not match any page of this app." }</p>
        </main>
    }
}
