use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use store::Cabin;

use super::{use_cabin_saver, ConfirmDelete, CreateCabinForm};
use crate::backend::make_backend;
use crate::components::{error_options, success_options, use_toast};
use crate::modal::{use_modal_scope, ModalOpen, ModalWindow};

const CABINS_CSS: Asset = asset!("/assets/styling/cabins.css");

#[component]
pub fn CabinTable(cabins: Vec<Cabin>, on_change: EventHandler<()>) -> Element {
    rsx! {
        document::Stylesheet { href: CABINS_CSS }

        div {
            class: "cabin-table",
            role: "table",
            div {
                class: "cabin-table-header",
                role: "row",
                div {}
                div { "Cabin" }
                div { "Capacity" }
                div { "Price" }
                div { "Discount" }
                div {}
            }
            if cabins.is_empty() {
                p { class: "table-empty", "No cabins could be found." }
            }
            for cabin in cabins.iter().cloned() {
                CabinRow { key: "{cabin.id}", cabin, on_change }
            }
        }
    }
}

/// One cabin with its edit and delete windows, sharing one modal scope.
#[component]
pub fn CabinRow(cabin: Cabin, on_change: EventHandler<()>) -> Element {
    let modal = use_modal_scope();
    let saver = use_cabin_saver(modal, on_change);
    let toast = use_toast();
    let mut deleting = use_signal(|| false);
    let id = cabin.id;

    // Owned by the row so a dismissed confirm window does not cancel it.
    let delete = use_callback(move |_: ()| {
        spawn(async move {
            deleting.set(true);
            let result = api::cabins::delete_cabin(&make_backend(), id).await;
            deleting.set(false);
            match result {
                Ok(()) => {
                    toast.success("Cabin successfully deleted".to_string(), success_options());
                    if let Err(err) = modal.try_close() {
                        tracing::debug!("cabin deleted after its window closed: {err}");
                    }
                    on_change.call(());
                }
                Err(e) => toast.error(e.to_string(), error_options()),
            }
        });
    });

    let edited = cabin.clone();

    rsx! {
        div {
            class: "cabin-row",
            role: "row",
            img { class: "cabin-image", src: "{cabin.image}", alt: "Cabin {cabin.name}" }
            div { class: "cabin-name", "{cabin.name}" }
            div { "Fits up to {cabin.max_capacity} guests" }
            div { class: "cabin-price", "${cabin.regular_price}" }
            if cabin.discount > 0 {
                div { class: "cabin-discount", "${cabin.discount}" }
            } else {
                span { "-" }
            }
            div {
                class: "cabin-actions",
                ModalOpen {
                    modal,
                    opens: "edit",
                    render: move |open: EventHandler<MouseEvent>| rsx! {
                        button {
                            class: "icon-button",
                            "aria-label": "Edit cabin",
                            onclick: move |evt| open.call(evt),
                            Icon { width: 14, height: 14, icon: FaPen }
                        }
                    },
                }
                ModalOpen {
                    modal,
                    opens: "delete",
                    render: move |open: EventHandler<MouseEvent>| rsx! {
                        button {
                            class: "icon-button",
                            "aria-label": "Delete cabin",
                            onclick: move |evt| open.call(evt),
                            Icon { width: 14, height: 14, icon: FaTrash }
                        }
                    },
                }
                ModalWindow {
                    modal,
                    name: "edit",
                    render: move |close: EventHandler<()>| rsx! {
                        CreateCabinForm {
                            cabin: edited.clone(),
                            saving: saver.is_saving(),
                            on_submit: move |draft| saver.save(draft, Some(id)),
                            on_close: close,
                        }
                    },
                }
                ModalWindow {
                    modal,
                    name: "delete",
                    render: move |close: EventHandler<()>| rsx! {
                        ConfirmDelete {
                            resource_name: "cabin",
                            disabled: deleting(),
                            on_confirm: move |_| delete.call(()),
                            on_close: close,
                        }
                    },
                }
            }
        }
    }
}
