mod account;
pub use account::AccountView;

mod booking;
pub use booking::BookingView;

mod bookings;
pub use bookings::BookingsView;

mod cabins;
pub use cabins::CabinsView;

mod dashboard;
pub use dashboard::{DashboardView, Summary};

mod login;
pub use login::LoginView;

mod page_not_found;
pub use page_not_found::PageNotFoundView;

mod settings;
pub use settings::{SettingField, SettingsView};

mod sidebar_layout;
pub use sidebar_layout::{NavItem, SidebarLayoutView};

mod users;
pub use users::UsersView;
