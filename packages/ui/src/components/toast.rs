//! Notifications, from `dioxus_primitives::toast`.
//!
//! Mount [`ToastProvider`] once near the root and raise toasts with
//! [`use_toast`]. Successes and errors stay on screen for the durations in
//! [`store::config::ToastConfig`]; pass [`success_options`] or
//! [`error_options`] to get them.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, ToastProviderProps};
use store::config::ToastConfig;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

use crate::backend::app_config;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[component]
pub fn ToastProvider(props: ToastProviderProps) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        toast::ToastProvider {
            default_duration: props.default_duration,
            max_toasts: props.max_toasts,
            render_toast: props.render_toast,
            {props.children}
        }
    }
}

pub fn success_options() -> ToastOptions {
    ToastOptions::new().duration(lifetimes(&app_config().toasts).0)
}

pub fn error_options() -> ToastOptions {
    ToastOptions::new().duration(lifetimes(&app_config().toasts).1)
}

/// On-screen time of success and error toasts.
fn lifetimes(config: &ToastConfig) -> (Duration, Duration) {
    (
        Duration::from_millis(config.success_ms),
        Duration::from_millis(config.error_ms),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_longer_than_successes() {
        let (success, error) = lifetimes(&ToastConfig::default());
        assert_eq!(success, Duration::from_secs(3));
        assert_eq!(error, Duration::from_secs(5));
    }

    fn app_with_toasts() -> Element {
        rsx! {
            ToastProvider {
                Notifier {}
            }
        }
    }

    #[component]
    fn Notifier() -> Element {
        let _toasts = use_toast();
        rsx! { p { "bookings page" } }
    }

    #[test]
    fn provider_makes_toasts_reachable() {
        let mut dom = VirtualDom::new(app_with_toasts);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("bookings page"));
    }
}
