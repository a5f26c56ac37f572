//! Booking queries.

use store::{Backend, Booking, BookingId, BookingStatus};

use crate::error::ApiError;

/// All bookings, optionally only those in `status`, newest stay first.
pub async fn get_bookings<B: Backend>(
    backend: &B,
    status: Option<BookingStatus>,
) -> Result<Vec<Booking>, ApiError> {
    let mut bookings = backend.list_bookings(status).await.map_err(|e| {
        tracing::error!("Failed to load bookings: {}", e);
        ApiError::BookingsNotLoaded
    })?;
    bookings.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    Ok(bookings)
}

/// A single booking. A missing booking is reported as
/// [`ApiError::BookingNotFound`], which callers do not retry.
pub async fn get_booking<B: Backend>(backend: &B, id: BookingId) -> Result<Booking, ApiError> {
    backend.get_booking(id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::BookingNotFound
        } else {
            tracing::error!("Failed to load booking {}: {}", id, e);
            ApiError::BookingsNotLoaded
        }
    })
}

pub async fn delete_booking<B: Backend>(backend: &B, id: BookingId) -> Result<(), ApiError> {
    backend.delete_booking(id).await.map_err(|e| {
        tracing::error!("Failed to delete booking {}: {}", id, e);
        ApiError::BookingNotDeleted
    })
}
