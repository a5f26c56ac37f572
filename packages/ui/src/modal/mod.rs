//! # Modal
//!
//! A compound modal widget: one scope owns the open/close state, any number
//! of [`ModalOpen`] triggers open a named window, and each [`ModalWindow`]
//! shows its content only while its name is the open one.
//!
//! Nothing is shared through context. [`use_modal_scope`] returns a
//! [`ModalHandle`] that the parent passes to every trigger and window it
//! renders, and each piece receives exactly the capability it needs: a
//! trigger's render callback gets an `open` handler, a window's render
//! callback gets a `close` handler.
//!
//! ```rust,ignore
//! let modal = use_modal_scope();
//! rsx! {
//!     ModalOpen {
//!         modal,
//!         opens: "cabin-form",
//!         render: move |open: EventHandler<MouseEvent>| rsx! {
//!             Button { onclick: move |e| open.call(e), "Add new cabin" }
//!         },
//!     }
//!     ModalWindow {
//!         modal,
//!         name: "cabin-form",
//!         render: move |close: EventHandler<()>| rsx! {
//!             CreateCabinForm { on_close: close }
//!         },
//!     }
//! }
//! ```
//!
//! An open window is painted through a [`Portal`] into the app's
//! [`PortalHost`], closes from its close button, and closes on a pointer-down
//! anywhere outside it (see [`use_outside_click`]).

mod handle;
mod open;
mod outside_click;
mod portal;
mod state;
mod window;

pub use handle::{use_modal_scope, ModalHandle};
pub use open::ModalOpen;
pub use outside_click::{
    use_outside_click, DomNode, EventPhase, ListenerId, OutsideClick, OutsideClickRef, PointerHost,
    DISMISS_EVENT,
};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use outside_click::DocumentHost;
pub use portal::{
    use_portal, use_portal_target, LayerKey, OverlayLayer, Portal, PortalHost, PortalTarget,
};
pub use state::{DialogState, WindowNames};
pub use window::ModalWindow;

/// Misuse of the modal widget.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModalError {
    #[error("a window named {0:?} is already mounted in this modal")]
    DuplicateWindow(String),

    #[error("modal windows need a non-empty name")]
    EmptyName,

    #[error("the modal scope has been dropped")]
    ScopeClosed,

    #[error("no portal target: render a PortalHost or pass `target` to the window")]
    MissingPortalTarget,
}

#[cfg(test)]
mod rendering;
#[cfg(test)]
mod scenarios;
