pub mod backend;
pub mod config;
pub mod error;
pub mod models;

mod memory;
pub use memory::MemoryBackend;

pub use backend::{Backend, StoreResult};
pub use config::AppConfig;
pub use error::StoreError;
pub use models::{
    Booking, BookingId, BookingStatus, Cabin, CabinId, CabinImage, CabinRow, Credentials,
    HotelSettings, NewUser, SettingsUpdate, UserInfo,
};
