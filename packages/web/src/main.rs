use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{AuthProvider, PortalHost};
use views::{
    Account, AppLayout, Booking, Bookings, Cabins, Dashboard, Login, PageNotFound, Settings, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/bookings")]
        Bookings {},
        #[route("/bookings/:booking_id")]
        Booking { booking_id: i64 },
        #[route("/cabins")]
        Cabins {},
        #[route("/users")]
        Users {},
        #[route("/settings")]
        Settings {},
        #[route("/account")]
        Account {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let portal = ui::use_portal_target();

    rsx! {
        document::Stylesheet { href: ui::MAIN_CSS }
        document::Stylesheet { href: ui::COMPONENTS_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
                PortalHost { target: portal }
            }
        }
    }
}
