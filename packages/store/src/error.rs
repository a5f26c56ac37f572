//! Errors reported by [`crate::Backend`] implementations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The addressed row does not exist.
    #[error("{table} row {id} not found")]
    NotFound { table: &'static str, id: i64 },
    /// The service understood the request and refused it.
    #[error("request rejected: {0}")]
    Rejected(String),
    /// No valid session for an operation that needs one.
    #[error("not authenticated")]
    Unauthorized,
    /// The service could not be reached or answered with garbage.
    #[error("transport error: {0}")]
    Transport(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
