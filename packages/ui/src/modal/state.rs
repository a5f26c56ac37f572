//! Registry state: which named window is open, and which names are mounted.

use std::collections::BTreeSet;

use super::ModalError;

/// Open/close state of one modal scope.
///
/// At most one window is open per scope; opening another name replaces the
/// current one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    OpenAs(String),
}

impl DialogState {
    /// The open window's name, or `""` when closed.
    pub fn open_name(&self) -> &str {
        match self {
            DialogState::Closed => "",
            DialogState::OpenAs(name) => name,
        }
    }

    /// Whether the window called `name` should be on screen.
    pub fn is_open(&self, name: &str) -> bool {
        matches!(self, DialogState::OpenAs(open) if open == name)
    }

    /// Open `name`, closing whatever was open. An empty name closes.
    pub fn open(&mut self, name: &str) {
        *self = if name.is_empty() {
            DialogState::Closed
        } else {
            DialogState::OpenAs(name.to_string())
        };
    }

    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }
}

/// Names of the windows currently mounted in one scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowNames {
    names: BTreeSet<String>,
}

impl WindowNames {
    /// Claim `name` for a window. Fails on an empty or already claimed name.
    pub fn register(&mut self, name: &str) -> Result<(), ModalError> {
        if name.is_empty() {
            return Err(ModalError::EmptyName);
        }
        if !self.names.insert(name.to_string()) {
            return Err(ModalError::DuplicateWindow(name.to_string()));
        }
        Ok(())
    }

    pub fn unregister(&mut self, name: &str) {
        self.names.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
