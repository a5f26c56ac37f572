//! # Backend: the hosted database, storage and auth service
//!
//! Every screen talks to the hosted service through the [`Backend`] trait so
//! the same service code runs against the REST client (`api::SupabaseBackend`)
//! in the browser and against [`crate::MemoryBackend`] in tests.
//!
//! Methods return `impl Future` without a `Send` bound: the browser build is
//! single-threaded and the REST futures are not `Send` on WASM.

use std::future::Future;

use crate::error::StoreError;
use crate::models::*;

pub type StoreResult<T> = Result<T, StoreError>;

/// Async access to the tables, the image bucket and the auth endpoints.
pub trait Backend {
    /// Base URL of the service; public storage URLs start with it.
    fn storage_url(&self) -> String;

    fn list_cabins(&self) -> impl Future<Output = StoreResult<Vec<Cabin>>>;
    fn insert_cabin(&self, row: CabinRow) -> impl Future<Output = StoreResult<Cabin>>;
    fn update_cabin(
        &self,
        id: CabinId,
        row: CabinRow,
    ) -> impl Future<Output = StoreResult<Cabin>>;
    fn delete_cabin(&self, id: CabinId) -> impl Future<Output = StoreResult<()>>;

    /// Store `bytes` as `name` inside `bucket`.
    fn upload_image(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = StoreResult<()>>;

    fn list_bookings(
        &self,
        status: Option<BookingStatus>,
    ) -> impl Future<Output = StoreResult<Vec<Booking>>>;
    fn get_booking(&self, id: BookingId) -> impl Future<Output = StoreResult<Booking>>;
    fn delete_booking(&self, id: BookingId) -> impl Future<Output = StoreResult<()>>;

    fn get_settings(&self) -> impl Future<Output = StoreResult<HotelSettings>>;
    fn update_settings(
        &self,
        update: SettingsUpdate,
    ) -> impl Future<Output = StoreResult<HotelSettings>>;

    fn sign_in(&self, credentials: Credentials) -> impl Future<Output = StoreResult<UserInfo>>;
    fn sign_up(&self, user: NewUser) -> impl Future<Output = StoreResult<UserInfo>>;
    fn current_user(&self) -> impl Future<Output = StoreResult<Option<UserInfo>>>;
    fn sign_out(&self) -> impl Future<Output = StoreResult<()>>;
}
