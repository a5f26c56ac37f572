mod app_layout;
pub use app_layout::AppLayout;

mod pages;
pub use pages::{Account, Booking, Bookings, Cabins, Dashboard, Settings, Users};

mod login;
pub use login::Login;

mod page_not_found;
pub use page_not_found::PageNotFound;
