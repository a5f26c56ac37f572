use dioxus::prelude::*;

use super::{use_cabin_saver, CreateCabinForm};
use crate::components::Button;
use crate::modal::{use_modal_scope, ModalOpen, ModalWindow};

/// "Add new cabin" button and the window holding the cabin form.
#[component]
pub fn AddCabin(on_saved: EventHandler<()>) -> Element {
    let modal = use_modal_scope();
    let saver = use_cabin_saver(modal, on_saved);

    rsx! {
        div {
            ModalOpen {
                modal,
                opens: "cabin-form",
                render: move |open: EventHandler<MouseEvent>| rsx! {
                    Button { onclick: move |evt| open.call(evt), "Add new cabin" }
                },
            }
            ModalWindow {
                modal,
                name: "cabin-form",
                render: move |close: EventHandler<()>| rsx! {
                    CreateCabinForm {
                        saving: saver.is_saving(),
                        on_submit: move |draft| saver.save(draft, None),
                        on_close: close,
                    }
                },
            }
        }
    }
}
