use dioxus::prelude::*;

use super::{DialogState, ModalError, WindowNames};

/// Handle to one modal scope, returned by [`use_modal_scope`].
///
/// Copy it into the triggers and windows that belong to the scope. The
/// state lives as long as the component that called [`use_modal_scope`].
#[derive(Clone, Copy, PartialEq)]
pub struct ModalHandle {
    state: Signal<DialogState>,
    windows: CopyValue<WindowNames>,
}

/// Create a modal scope owned by the calling component. Starts closed.
pub fn use_modal_scope() -> ModalHandle {
    let state = use_signal(DialogState::default);
    let windows = use_hook(|| CopyValue::new(WindowNames::default()));
    ModalHandle { state, windows }
}

impl ModalHandle {
    /// Name of the open window, or `""`. Subscribes the caller.
    pub fn open_name(&self) -> String {
        self.state.read().open_name().to_string()
    }

    /// Whether `name` is the open window. Subscribes the caller.
    pub fn is_open(&self, name: &str) -> bool {
        self.state.read().is_open(name)
    }

    pub fn try_open(&self, name: &str) -> Result<(), ModalError> {
        let mut state = self.state;
        let mut state = state.try_write().map_err(|_| ModalError::ScopeClosed)?;
        if !state.is_open(name) {
            tracing::debug!(window = name, "modal open");
            state.open(name);
        }
        Ok(())
    }

    pub fn try_close(&self) -> Result<(), ModalError> {
        let mut state = self.state;
        let mut state = state.try_write().map_err(|_| ModalError::ScopeClosed)?;
        if *state != DialogState::Closed {
            tracing::debug!(window = state.open_name(), "modal close");
            state.close();
        }
        Ok(())
    }

    /// Open the window called `name`, replacing any open one.
    ///
    /// # Panics
    ///
    /// If the owning component has been dropped. Use [`ModalHandle::try_open`]
    /// from code that may outlive it.
    pub fn open(&self, name: &str) {
        if let Err(err) = self.try_open(name) {
            panic!("ModalHandle::open({name:?}) used outside its scope: {err}");
        }
    }

    /// Close whatever window is open.
    ///
    /// # Panics
    ///
    /// If the owning component has been dropped.
    pub fn close(&self) {
        if let Err(err) = self.try_close() {
            panic!("ModalHandle::close() used outside its scope: {err}");
        }
    }

    pub(crate) fn register_window(&self, name: &str) -> Result<(), ModalError> {
        let mut windows = self.windows;
        let mut windows = windows.try_write().map_err(|_| ModalError::ScopeClosed)?;
        windows.register(name)?;
        tracing::debug!(window = name, mounted = windows.len(), "modal window registered");
        Ok(())
    }

    pub(crate) fn unregister_window(&self, name: &str) {
        let mut windows = self.windows;
        if let Ok(mut windows) = windows.try_write() {
            windows.unregister(name);
        };
        // A window that unmounts while open must not leave the scope pointing at it.
        let mut state = self.state;
        if let Ok(mut state) = state.try_write() {
            if state.is_open(name) {
                tracing::debug!(window = name, "modal window unmounted while open");
                state.close();
            }
        };
    }
}
