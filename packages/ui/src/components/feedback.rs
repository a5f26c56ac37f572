use dioxus::prelude::*;

use super::Label;

/// A labelled form field with its validation message underneath.
#[component]
pub fn FormRow(
    #[props(into)] label: String,
    #[props(into)] html_for: String,
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "form-row",
            Label { html_for, "{label}" }
            {children}
            if let Some(error) = error {
                span { class: "form-error", "{error}" }
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "progressbar", "aria-label": "Loading" }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        p { class: "error-message", "{message}" }
    }
}

/// Heading row shared by the pages.
#[component]
pub fn PageHeading(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "page-heading",
            h1 { "{title}" }
            {children}
        }
    }
}
