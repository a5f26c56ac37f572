//! Small building blocks shared by the screens.

use dioxus::prelude::*;

mod button;
mod feedback;
mod input;
mod label;
mod toast;

pub use button::{Button, ButtonVariant};
pub use feedback::{ErrorMessage, FormRow, PageHeading, Spinner};
pub use input::Input;
pub use label::Label;
pub use toast::{error_options, success_options, use_toast, ToastOptions, ToastProvider};

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");
