//! # API crate: services behind the back-office screens
//!
//! Each module turns a screen action into calls on a [`store::Backend`] and
//! maps failures to the [`ApiError`] messages shown to staff.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login, sign-up validation, session lookup and logout |
//! | [`bookings`] | Booking list (with status filter) and single booking lookup |
//! | [`cabins`] | Cabin list, create/edit with photo upload and rollback, delete |
//! | [`settings`] | Hotel settings read and partial update |
//! | [`supabase`] | [`SupabaseBackend`], the REST client for the hosted service |
//!
//! All service functions are generic over the backend so the same code runs
//! against the hosted project in the browser and [`store::MemoryBackend`] in
//! tests.

pub mod auth;
pub mod bookings;
pub mod cabins;
pub mod error;
pub mod settings;
pub mod supabase;

pub use error::ApiError;
pub use supabase::SupabaseBackend;

pub use store::{Booking, BookingStatus, Cabin, HotelSettings, UserInfo};
