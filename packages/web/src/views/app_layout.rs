use dioxus::prelude::*;
use ui::components::Spinner;
use ui::use_auth;
use ui::views::{NavItem, SidebarLayoutView};

use crate::Route;

fn route_for(item: NavItem) -> Route {
    match item {
        NavItem::Dashboard => Route::Dashboard {},
        NavItem::Bookings => Route::Bookings {},
        NavItem::Cabins => Route::Cabins {},
        NavItem::Users => Route::Users {},
        NavItem::Settings => Route::Settings {},
        NavItem::Account => Route::Account {},
    }
}

fn nav_item(route: &Route) -> Option<NavItem> {
    match route {
        Route::Dashboard {} => Some(NavItem::Dashboard),
        Route::Bookings {} | Route::Booking { .. } => Some(NavItem::Bookings),
        Route::Cabins {} => Some(NavItem::Cabins),
        Route::Users {} => Some(NavItem::Users),
        Route::Settings {} => Some(NavItem::Settings),
        Route::Account {} => Some(NavItem::Account),
        Route::Login {} | Route::PageNotFound { .. } => None,
    }
}

/// Shell of every signed-in page. Sends visitors without a session to the
/// login page once the session lookup has finished.
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_authenticated() {
            tracing::info!("No session; redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    if !auth().is_authenticated() {
        return rsx! { Spinner {} };
    }

    rsx! {
        SidebarLayoutView {
            active: nav_item(&route),
            on_navigate: move |item| {
                nav.push(route_for(item));
            },
            Outlet::<Route> {}
        }
    }
}
