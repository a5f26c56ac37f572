//! Data hooks for the screens.
//!
//! Each hook wraps an `api` service call in a [`Resource`]. List queries
//! retry failed fetches according to [`QueryConfig`]; a missing booking is
//! reported at once. After a mutation, call `.restart()` on the resource to
//! refetch.

use std::future::Future;
use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;
use store::config::QueryConfig;
use store::{Booking, BookingId, BookingStatus, Cabin, HotelSettings};

use crate::backend::{app_config, make_backend};
use crate::timer::sleep;

pub type Query<T> = Resource<Result<T, ApiError>>;

/// Run `fetch`, retrying retryable failures up to `retries` more times.
pub async fn with_retries<T, F, Fut>(
    retries: u32,
    delay: Duration,
    mut fetch: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < retries => {
                attempt += 1;
                tracing::warn!("{} (retry {}/{})", e, attempt, retries);
                sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

fn retry_policy() -> (u32, Duration) {
    let QueryConfig {
        retries,
        retry_delay_ms,
    } = app_config().queries;
    (retries, Duration::from_millis(retry_delay_ms))
}

pub fn use_cabins() -> Query<Vec<Cabin>> {
    use_resource(|| async move {
        let backend = make_backend();
        let (retries, delay) = retry_policy();
        with_retries(retries, delay, || api::cabins::get_cabins(&backend)).await
    })
}

/// Bookings, newest first, narrowed to `filter` when it holds a status.
pub fn use_bookings(filter: Signal<Option<BookingStatus>>) -> Query<Vec<Booking>> {
    use_resource(move || {
        let status = filter();
        async move {
            let backend = make_backend();
            let (retries, delay) = retry_policy();
            with_retries(retries, delay, || api::bookings::get_bookings(&backend, status)).await
        }
    })
}

/// A single booking. Not retried: a missing booking stays missing.
pub fn use_booking(id: BookingId) -> Query<Booking> {
    // Track the id in a signal so the resource re-runs on route changes.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    use_resource(move || {
        let id = id_signal();
        async move { api::bookings::get_booking(&make_backend(), id).await }
    })
}

pub fn use_settings() -> Query<HotelSettings> {
    use_resource(|| async move {
        let backend = make_backend();
        let (retries, delay) = retry_policy();
        with_retries(retries, delay, || api::settings::get_settings(&backend)).await
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[tokio::test]
    async fn retries_until_success() {
        let calls = Cell::new(0);
        let result = with_retries(3, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err(ApiError::CabinsNotLoaded)
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_the_configured_retries() {
        let calls = Cell::new(0);
        let result: Result<(), _> = with_retries(2, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { Err(ApiError::SettingsNotLoaded) }
        })
        .await;
        assert_eq!(result, Err(ApiError::SettingsNotLoaded));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn missing_booking_is_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), _> = with_retries(3, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { Err(ApiError::BookingNotFound) }
        })
        .await;
        assert_eq!(result, Err(ApiError::BookingNotFound));
        assert_eq!(calls.get(), 1);
    }
}
