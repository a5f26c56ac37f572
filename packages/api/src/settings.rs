//! Hotel-wide settings.

use store::{Backend, HotelSettings, SettingsUpdate};

use crate::error::ApiError;

pub async fn get_settings<B: Backend>(backend: &B) -> Result<HotelSettings, ApiError> {
    backend.get_settings().await.map_err(|e| {
        tracing::error!("Failed to load settings: {}", e);
        ApiError::SettingsNotLoaded
    })
}

/// Save the fields present in `update`. Zero values are refused: every
/// setting is a count or a price that must stay positive.
pub async fn update_setting<B: Backend>(
    backend: &B,
    update: SettingsUpdate,
) -> Result<HotelSettings, ApiError> {
    if update.is_empty() {
        return Err(ApiError::Invalid("Nothing to update".to_string()));
    }
    let values = [
        update.min_booking_length,
        update.max_booking_length,
        update.max_guests_per_booking,
        update.breakfast_price,
    ];
    if values.iter().flatten().any(|v| *v == 0) {
        return Err(ApiError::Invalid("Settings must be greater than 0".to_string()));
    }
    backend.update_settings(update).await.map_err(|e| {
        tracing::error!("Failed to update settings: {}", e);
        ApiError::SettingsNotUpdated
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryBackend;

    #[tokio::test]
    async fn test_update_single_setting() {
        let backend = MemoryBackend::new();
        let settings = update_setting(
            &backend,
            SettingsUpdate {
                min_booking_length: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(settings.min_booking_length, 2);
        assert_eq!(get_settings(&backend).await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_rejects_empty_and_zero_updates() {
        let backend = MemoryBackend::new();
        assert!(matches!(
            update_setting(&backend, SettingsUpdate::default()).await,
            Err(ApiError::Invalid(_))
        ));
        let zero = SettingsUpdate {
            breakfast_price: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            update_setting(&backend, zero).await,
            Err(ApiError::Invalid(_))
        ));
        assert_eq!(get_settings(&backend).await.unwrap(), HotelSettings::default());
    }
}
