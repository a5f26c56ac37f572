use dioxus::prelude::*;

use crate::components::{PageHeading, Spinner};
use crate::use_auth;

/// The signed-in staff member's details.
#[component]
pub fn AccountView() -> Element {
    let auth = use_auth();
    let Some(user) = auth().user else {
        return rsx! { Spinner {} };
    };

    rsx! {
        PageHeading { title: "Your account" }
        dl {
            class: "account-details",
            dt { "Full name" }
            dd { "{user.display_name()}" }
            dt { "Email address" }
            dd { "{user.email}" }
            if let Some(avatar) = user.avatar.clone() {
                dt { "Avatar" }
                dd { img { class: "avatar", src: "{avatar}", alt: "Avatar" } }
            }
        }
    }
}
