use dioxus::prelude::*;

use crate::components::Button;

#[component]
pub fn PageNotFoundView(path: String, on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "The page you are looking for could not be found 😢" }
            p { class: "muted", "/{path}" }
            Button { onclick: move |_| on_back.call(()), "← Go back" }
        }
    }
}
