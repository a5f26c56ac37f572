//! Routed pages inside the app layout.

use dioxus::prelude::*;
use ui::views::{
    AccountView, BookingView, BookingsView, CabinsView, DashboardView, SettingsView, UsersView,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn Bookings() -> Element {
    let nav = use_navigator();
    rsx! {
        BookingsView {
            on_select: move |booking_id| {
                nav.push(Route::Booking { booking_id });
            },
        }
    }
}

#[component]
pub fn Booking(booking_id: i64) -> Element {
    let nav = use_navigator();
    rsx! {
        BookingView {
            booking_id,
            on_back: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn Cabins() -> Element {
    rsx! { CabinsView {} }
}

#[component]
pub fn Users() -> Element {
    rsx! { UsersView {} }
}

#[component]
pub fn Settings() -> Element {
    rsx! { SettingsView {} }
}

#[component]
pub fn Account() -> Element {
    rsx! { AccountView {} }
}
