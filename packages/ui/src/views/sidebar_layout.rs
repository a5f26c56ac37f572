use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaGear, FaHouse, FaHouseChimney, FaUser, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::{use_auth, LogoutButton};

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

/// Destinations reachable from the sidebar and header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Bookings,
    Cabins,
    Users,
    Settings,
    Account,
}

impl NavItem {
    /// Entries of the sidebar, top to bottom.
    pub const SIDEBAR: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Bookings,
        NavItem::Cabins,
        NavItem::Users,
        NavItem::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Home",
            NavItem::Bookings => "Bookings",
            NavItem::Cabins => "Cabins",
            NavItem::Users => "Users",
            NavItem::Settings => "Settings",
            NavItem::Account => "Account",
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => rsx! { Icon { width: 18, height: 18, icon: FaHouse } },
        NavItem::Bookings => rsx! { Icon { width: 18, height: 18, icon: FaCalendarDays } },
        NavItem::Cabins => rsx! { Icon { width: 18, height: 18, icon: FaHouseChimney } },
        NavItem::Users => rsx! { Icon { width: 18, height: 18, icon: FaUsers } },
        NavItem::Settings => rsx! { Icon { width: 18, height: 18, icon: FaGear } },
        NavItem::Account => rsx! { Icon { width: 18, height: 18, icon: FaUser } },
    }
}

/// Shared app shell: header, sidebar navigation and the routed page.
///
/// Platform packages map [`NavItem`]s to their routes and pass the router
/// outlet as children.
#[component]
pub fn SidebarLayoutView(
    /// The page currently shown, highlighted in the sidebar.
    active: Option<NavItem>,
    on_navigate: EventHandler<NavItem>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        document::Stylesheet { href: LAYOUT_CSS }

        div {
            class: "app-layout",

            header {
                class: "app-header",
                if let Some(user) = user {
                    if let Some(avatar) = user.avatar.clone() {
                        img { class: "avatar", src: "{avatar}", alt: "Avatar of {user.display_name()}" }
                    }
                    span { class: "user-name", "{user.display_name()}" }
                }
                button {
                    class: "icon-button",
                    "aria-label": "Account",
                    onclick: move |_| on_navigate.call(NavItem::Account),
                    NavIcon { item: NavItem::Account }
                }
                LogoutButton { class: "button secondary" }
            }

            aside {
                class: "app-sidebar",
                div { class: "logo", "The Wild Oasis" }
                nav {
                    ul {
                        for item in NavItem::SIDEBAR {
                            li {
                                key: "{item.label()}",
                                a {
                                    class: if active == Some(item) { "nav-link active" } else { "nav-link" },
                                    href: "#",
                                    onclick: move |evt: Event<MouseData>| {
                                        evt.prevent_default();
                                        on_navigate.call(item);
                                    },
                                    NavIcon { item }
                                    span { "{item.label()}" }
                                }
                            }
                        }
                    }
                }
            }

            main {
                class: "app-main",
                div { class: "app-container", {children} }
            }
        }
    }
}
