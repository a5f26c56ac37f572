use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use super::{use_outside_click, use_portal, ModalError, ModalHandle, Portal, PortalTarget};

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// The name a window holds in its scope, and whether it got it.
struct Registration {
    name: String,
    result: Result<(), ModalError>,
}

/// The window called `name`. Renders nothing unless it is the open one.
///
/// `render` draws the body and receives a handler that closes the window,
/// for forms that dismiss themselves after a successful submit. The window
/// is painted into `target`, or into the [`PortalTarget`] provided by an
/// ancestor when `target` is not given. Renaming a mounted window releases
/// the old name and claims the new one.
#[component]
pub fn ModalWindow(
    modal: ModalHandle,
    #[props(into)] name: String,
    render: Callback<EventHandler<()>, Element>,
    target: Option<PortalTarget>,
) -> Element {
    let provided = use_portal();
    let mounted = use_hook(|| Rc::new(RefCell::new(None::<Registration>)));
    use_drop({
        let mounted = mounted.clone();
        move || {
            if let Some(Registration { name, result: Ok(()) }) = mounted.borrow_mut().take() {
                modal.unregister_window(&name);
            }
        }
    });

    let stale = match &*mounted.borrow() {
        Some(current) => current.name != name,
        None => true,
    };
    if stale {
        if let Some(Registration { name: old, result: Ok(()) }) = mounted.borrow_mut().take() {
            modal.unregister_window(&old);
        }
        let result = modal.register_window(&name);
        *mounted.borrow_mut() = Some(Registration {
            name: name.clone(),
            result,
        });
    }
    let registered = mounted
        .borrow()
        .as_ref()
        .map_or(Ok(()), |current| current.result.clone());
    registered?;

    let target = target.or(provided).ok_or(ModalError::MissingPortalTarget)?;

    if !modal.is_open(&name) {
        return rsx! {};
    }

    rsx! {
        OpenWindow { modal, target, render }
    }
}

/// Body of an open window. Mounted only while open, so the outside-click
/// listener lives exactly as long as the window is on screen.
#[component]
fn OpenWindow(
    modal: ModalHandle,
    target: PortalTarget,
    render: Callback<EventHandler<()>, Element>,
) -> Element {
    let close = use_callback(move |_: ()| {
        // The scope may already be gone when a late pointer-down arrives.
        if let Err(err) = modal.try_close() {
            tracing::debug!("modal close ignored: {err}");
        }
    });
    let outside = use_outside_click(close, true);
    let backdrop = outside.clone();

    rsx! {
        document::Stylesheet { href: MODAL_CSS }

        Portal {
            target,
            div {
                class: "modal-overlay",
                onclick: move |_| {
                    if !backdrop.is_active() {
                        close.call(());
                    }
                },
                div {
                    class: "modal-window",
                    role: "dialog",
                    "aria-modal": "true",
                    onmounted: move |evt| outside.attach(evt),
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| close.call(()),
                        Icon { width: 16, height: 16, icon: FaXmark }
                    }
                    div {
                        class: "modal-body",
                        {render.call(close)}
                    }
                }
            }
        }
    }
}
