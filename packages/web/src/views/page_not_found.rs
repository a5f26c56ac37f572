use dioxus::prelude::*;
use ui::views::PageNotFoundView;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    rsx! {
        PageNotFoundView {
            path: segments.join("/"),
            on_back: move |_| nav.go_back(),
        }
    }
}
