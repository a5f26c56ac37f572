use dioxus::prelude::*;

use crate::backend::make_backend;
use crate::components::{Button, ErrorMessage, FormRow, Input, Spinner};
use crate::{use_auth, AuthState};

/// Email + password sign-in form. `on_logged_in` runs once a session exists.
#[component]
pub fn LoginView(on_logged_in: EventHandler<()>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            pending.set(true);
            error.set(None);
            match api::auth::login(&make_backend(), &email(), &password()).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    on_logged_in.call(());
                }
                Err(e) => {
                    password.set(String::new());
                    error.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    };

    rsx! {
        div {
            class: "login-layout",
            h1 { class: "logo", "The Wild Oasis" }
            h4 { "Log in to your account" }
            form {
                class: "login-form",
                onsubmit: handle_submit,
                FormRow { label: "Email address", html_for: "email",
                    Input {
                        id: "email",
                        r#type: "email",
                        value: email(),
                        disabled: pending(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                FormRow { label: "Password", html_for: "password",
                    Input {
                        id: "password",
                        r#type: "password",
                        value: password(),
                        disabled: pending(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    ErrorMessage { message }
                }
                Button { r#type: "submit", disabled: pending(),
                    if pending() { Spinner {} } else { "Log in" }
                }
            }
        }
    }
}
