//! User-facing service errors.
//!
//! Every variant renders to the message shown in the error toast. The
//! underlying [`store::StoreError`] is logged where the mapping happens and is
//! not carried along.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Cabins could not be loaded")]
    CabinsNotLoaded,
    #[error("Cabin could not be created")]
    CabinNotCreated,
    #[error("Cabin could not be edited")]
    CabinNotEdited,
    #[error("Cabin image could not be uploaded and the cabin was not created")]
    ImageUploadRolledBack,
    #[error("Cabin image could not be uploaded")]
    ImageUploadFailed,
    #[error("Cabin could not be deleted")]
    CabinNotDeleted,

    #[error("Bookings could not be loaded")]
    BookingsNotLoaded,
    #[error("Booking not found")]
    BookingNotFound,
    #[error("Booking could not be deleted")]
    BookingNotDeleted,

    #[error("Settings could not be loaded")]
    SettingsNotLoaded,
    #[error("Settings could not be updated")]
    SettingsNotUpdated,

    #[error("Provided email or password are incorrect")]
    InvalidCredentials,
    #[error("Account could not be created: {0}")]
    SignUpFailed(String),
    #[error("Session could not be loaded")]
    SessionUnavailable,
    #[error("Could not log out")]
    LogoutFailed,

    /// Input rejected before anything was sent.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            ApiError::BookingNotFound | ApiError::InvalidCredentials | ApiError::Invalid(_)
        )
    }
}
