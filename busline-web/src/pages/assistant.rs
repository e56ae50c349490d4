use crate::components::ui::{Button, TextInput};
use crate::services::use_services;
use busline_core::assistant;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_user: bool,
    text: String,
}

#[function_component(AssistantPage)]
pub fn assistant_page() -> Html {
    let services = use_services();
    let lines = use_state(|| {
        vec![ChatLine {
            from_user: false,
            text: "Hello! Ask me about schedules, routes or ticket prices.".to_string(),
        }]
    });
    let draft = use_state(String::new);
    let thinking = use_state(|| false);

    let send = {
        let services = services.clone();
        let lines = lines.clone();
        let draft = draft.clone();
        let thinking = thinking.clone();
        Callback::from(move |()| {
            let question = draft.trim().to_string();
            if question.is_empty() || *thinking {
                return;
            }
            draft.set(String::new());
            thinking.set(true);
            let mut log = (*lines).clone();
            log.push(ChatLine {
                from_user: true,
                text: question.clone(),
            });
            lines.set(log.clone());

            let services = services.clone();
            let lines = lines.clone();
            let thinking = thinking.clone();
            spawn_local(async move {
                let routes = services.api.list_routes().await.unwrap_or_default();
                log.push(ChatLine {
                    from_user: false,
                    text: assistant::reply(&question, &routes),
                });
                lines.set(log);
                thinking.set(false);
            });
        })
    };

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |value: String| draft.set(value))
    };
    let onclick = {
        let send = send.clone();
        Callback::from(move |_| send.emit(()))
    };

    html! {
        <main class="page page-assistant">
            <h2>{ "Assistant" }</h2>
            <div class="chat-log">
                { for lines.iter().map(|line| {
                    let class = if line.from_user { "chat-line chat-user" } else { "chat-line chat-bot" };
                    html!{ <p class={class}>{ &line.text }</p> }
                }) }
                { (*thinking).then(|| html!{ <p class="chat-line chat-bot chat-thinking">{ "..." }</p> }) }
            </div>
            <div class="chat-input">
                <TextInput placeholder="e.g. When is the bus to Warsaw?" value={(*draft).clone()} {oninput} />
                <Button label="Send" disabled={*thinking} {onclick} />
            </div>
        </main>
    }
}
