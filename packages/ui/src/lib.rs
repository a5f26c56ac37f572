//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub use components::COMPONENTS_CSS;

mod backend;
pub use backend::{app_config, make_backend, AppBackend};

mod timer;

pub mod modal;
pub use modal::{
    use_modal_scope, use_portal_target, ModalHandle, ModalOpen, ModalWindow, PortalHost,
    PortalTarget,
};

pub mod queries;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod cabins;
