use api::auth::SignUpForm;
use dioxus::prelude::*;

use crate::backend::make_backend;
use crate::components::{
    error_options, success_options, use_toast, Button, ButtonVariant, ErrorMessage, FormRow, Input,
    PageHeading,
};

/// Create a new staff account.
#[component]
pub fn UsersView() -> Element {
    let mut form = use_signal(SignUpForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let toast = use_toast();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        if let Err(e) = current.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        spawn(async move {
            submitting.set(true);
            let result = api::auth::sign_up(&make_backend(), &current).await;
            submitting.set(false);
            match result {
                Ok(user) => {
                    toast.success(
                        format!(
                            "Account for {} successfully created! Please verify the new account from the user's email address.",
                            user.email
                        ),
                        success_options(),
                    );
                    form.set(SignUpForm::default());
                }
                Err(e) => toast.error(e.to_string(), error_options()),
            }
        });
    };

    rsx! {
        PageHeading { title: "Create a new user" }
        form {
            class: "signup-form",
            onsubmit: handle_submit,
            FormRow { label: "Full name", html_for: "full_name",
                Input {
                    id: "full_name",
                    value: form().full_name,
                    disabled: submitting(),
                    oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                }
            }
            FormRow { label: "Email address", html_for: "email",
                Input {
                    id: "email",
                    r#type: "email",
                    value: form().email,
                    disabled: submitting(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }
            FormRow { label: "Password (min 8 characters)", html_for: "password",
                Input {
                    id: "password",
                    r#type: "password",
                    value: form().password,
                    disabled: submitting(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
            }
            FormRow { label: "Repeat password", html_for: "password_confirm",
                Input {
                    id: "password_confirm",
                    r#type: "password",
                    value: form().password_confirm,
                    disabled: submitting(),
                    oninput: move |evt: FormEvent| form.write().password_confirm = evt.value(),
                }
            }
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    r#type: "reset",
                    disabled: submitting(),
                    onclick: move |_| form.set(SignUpForm::default()),
                    "Cancel"
                }
                Button { r#type: "submit", disabled: submitting(), "Create new user" }
            }
        }
    }
}
