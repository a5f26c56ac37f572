//! Cabin management: the table, its per-row actions and the cabin form.

mod add;
mod confirm;
mod form;
mod table;

pub use add::AddCabin;
pub use confirm::ConfirmDelete;
pub use form::{use_cabin_saver, CabinSaver, CreateCabinForm};
pub use table::{CabinRow, CabinTable};
