use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// "Are you sure?" body for a delete window.
#[component]
pub fn ConfirmDelete(
    #[props(into)] resource_name: String,
    #[props(default)] disabled: bool,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "confirm-delete",
            h3 { "Delete {resource_name}" }
            p {
                "Are you sure you want to delete this {resource_name} permanently? "
                "This action cannot be undone."
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled,
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
            }
        }
    }
}
