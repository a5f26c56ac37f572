//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

use crate::backend::make_backend;
use crate::components::{error_options, use_toast};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// `true` until the first session lookup has finished.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Look up an existing session on mount
    let _ = use_resource(move || async move {
        let user = match api::auth::current_user(&make_backend()).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Treating session as signed out: {}", e);
                None
            }
        };
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let toast = use_toast();
    let mut pending = use_signal(|| false);

    let onclick = move |_| async move {
        pending.set(true);
        match api::auth::logout(&make_backend()).await {
            Ok(()) => auth_state.set(AuthState {
                user: None,
                loading: false,
            }),
            Err(e) => toast.error(e.to_string(), error_options()),
        }
        pending.set(false);
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: onclick,
            "{label}"
        }
    }
}
