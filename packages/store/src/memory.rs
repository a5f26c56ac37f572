use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};

use crate::backend::{Backend, StoreResult};
use crate::error::StoreError;
use crate::models::*;

/// In-memory Backend for testing and the native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    cabins: BTreeMap<CabinId, Cabin>,
    next_cabin_id: CabinId,
    images: BTreeMap<String, Vec<u8>>,
    bookings: BTreeMap<BookingId, Booking>,
    settings: HotelSettings,
    users: Vec<(UserInfo, String)>,
    session: Option<UserInfo>,
    fail_uploads: bool,
}

impl MemoryBackend {
    pub const STORAGE_URL: &'static str = "memory://wildoasis";

    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-filled with a few cabins, bookings and a demo account
    /// (`demo@wildoasis.test` / `wildoasis`).
    pub fn seeded() -> Self {
        let backend = Self::new();
        {
            let mut tables = backend.tables.lock().unwrap();
            for (name, capacity, price, discount) in
                [("001", 2, 250, 0), ("002", 2, 350, 25), ("003", 4, 300, 0)]
            {
                tables.next_cabin_id += 1;
                let id = tables.next_cabin_id;
                tables.cabins.insert(
                    id,
                    Cabin {
                        id,
                        created_at: Utc::now(),
                        name: name.to_string(),
                        max_capacity: capacity,
                        regular_price: price,
                        discount,
                        description: format!("Cosy wooden cabin {name} in the forest."),
                        image: format!(
                            "{}/storage/v1/object/public/cabin-images/cabin-{name}.jpg",
                            Self::STORAGE_URL
                        ),
                    },
                );
            }
            let guests = [
                ("Jonas Schmedtmann", "hello@jonas.io"),
                ("Maria Gomez", "maria@example.com"),
            ];
            for (i, status) in BookingStatus::ALL.into_iter().enumerate() {
                let id = i as BookingId + 1;
                let (full_name, email) = guests[i % guests.len()];
                let start = NaiveDate::from_ymd_opt(2024, 5, 1 + i as u32 * 7).unwrap_or_default();
                tables.bookings.insert(
                    id,
                    Booking {
                        id,
                        created_at: Utc::now(),
                        start_date: start,
                        end_date: start + chrono::Days::new(3),
                        num_nights: 3,
                        num_guests: 2,
                        cabin_price: 750,
                        extras_price: 0,
                        total_price: 750,
                        status,
                        has_breakfast: false,
                        is_paid: status != BookingStatus::Unconfirmed,
                        observations: None,
                        cabins: Some(CabinSummary {
                            name: format!("00{}", i + 1),
                        }),
                        guests: Some(Guest {
                            full_name: full_name.to_string(),
                            email: email.to_string(),
                            nationality: None,
                            country_flag: None,
                        }),
                    },
                );
            }
            tables.users.push((
                UserInfo {
                    id: "demo".to_string(),
                    email: "demo@wildoasis.test".to_string(),
                    full_name: Some("Demo Manager".to_string()),
                    avatar: None,
                },
                "wildoasis".to_string(),
            ));
        }
        backend
    }

    /// Make every following [`Backend::upload_image`] call fail.
    pub fn fail_uploads(&self, fail: bool) {
        self.tables.lock().unwrap().fail_uploads = fail;
    }

    /// Stored image bytes, keyed by `"{bucket}/{name}"`.
    pub fn image(&self, bucket: &str, name: &str) -> Option<Vec<u8>> {
        self.tables
            .lock()
            .unwrap()
            .images
            .get(&format!("{bucket}/{name}"))
            .cloned()
    }

    pub fn image_count(&self) -> usize {
        self.tables.lock().unwrap().images.len()
    }

    pub fn insert_booking(&self, booking: Booking) {
        self.tables
            .lock()
            .unwrap()
            .bookings
            .insert(booking.id, booking);
    }
}

impl Backend for MemoryBackend {
    fn storage_url(&self) -> String {
        Self::STORAGE_URL.to_string()
    }

    async fn list_cabins(&self) -> StoreResult<Vec<Cabin>> {
        Ok(self.tables.lock().unwrap().cabins.values().cloned().collect())
    }

    async fn insert_cabin(&self, row: CabinRow) -> StoreResult<Cabin> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_cabin_id += 1;
        let cabin = Cabin {
            id: tables.next_cabin_id,
            created_at: Utc::now(),
            name: row.name,
            max_capacity: row.max_capacity,
            regular_price: row.regular_price,
            discount: row.discount,
            description: row.description,
            image: row.image,
        };
        tables.cabins.insert(cabin.id, cabin.clone());
        Ok(cabin)
    }

    async fn update_cabin(&self, id: CabinId, row: CabinRow) -> StoreResult<Cabin> {
        let mut tables = self.tables.lock().unwrap();
        let cabin = tables
            .cabins
            .get_mut(&id)
            .ok_or(StoreError::NotFound { table: "cabins", id })?;
        cabin.name = row.name;
        cabin.max_capacity = row.max_capacity;
        cabin.regular_price = row.regular_price;
        cabin.discount = row.discount;
        cabin.description = row.description;
        cabin.image = row.image;
        Ok(cabin.clone())
    }

    async fn delete_cabin(&self, id: CabinId) -> StoreResult<()> {
        self.tables
            .lock()
            .unwrap()
            .cabins
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { table: "cabins", id })
    }

    async fn upload_image(&self, bucket: &str, name: &str, bytes: Vec<u8>) -> StoreResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if tables.fail_uploads {
            return Err(StoreError::Rejected("storage unavailable".to_string()));
        }
        tables.images.insert(format!("{bucket}/{name}"), bytes);
        Ok(())
    }

    async fn list_bookings(&self, status: Option<BookingStatus>) -> StoreResult<Vec<Booking>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .bookings
            .values()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .cloned()
            .collect())
    }

    async fn get_booking(&self, id: BookingId) -> StoreResult<Booking> {
        self.tables
            .lock()
            .unwrap()
            .bookings
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { table: "bookings", id })
    }

    async fn delete_booking(&self, id: BookingId) -> StoreResult<()> {
        self.tables
            .lock()
            .unwrap()
            .bookings
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { table: "bookings", id })
    }

    async fn get_settings(&self) -> StoreResult<HotelSettings> {
        Ok(self.tables.lock().unwrap().settings.clone())
    }

    async fn update_settings(&self, update: SettingsUpdate) -> StoreResult<HotelSettings> {
        let mut tables = self.tables.lock().unwrap();
        update.apply(&mut tables.settings);
        Ok(tables.settings.clone())
    }

    async fn sign_in(&self, credentials: Credentials) -> StoreResult<UserInfo> {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .iter()
            .find(|(user, password)| {
                user.email == credentials.email && *password == credentials.password
            })
            .map(|(user, _)| user.clone())
            .ok_or_else(|| StoreError::Rejected("Invalid login credentials".to_string()))?;
        tables.session = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(&self, new_user: NewUser) -> StoreResult<UserInfo> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|(u, _)| u.email == new_user.email) {
            return Err(StoreError::Rejected("User already registered".to_string()));
        }
        let user = UserInfo {
            id: format!("user-{}", tables.users.len() + 1),
            email: new_user.email,
            full_name: Some(new_user.full_name),
            avatar: None,
        };
        tables.users.push((user.clone(), new_user.password));
        Ok(user)
    }

    async fn current_user(&self) -> StoreResult<Option<UserInfo>> {
        Ok(self.tables.lock().unwrap().session.clone())
    }

    async fn sign_out(&self) -> StoreResult<()> {
        self.tables.lock().unwrap().session = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> CabinRow {
        CabinRow {
            name: name.to_string(),
            max_capacity: 2,
            regular_price: 200,
            discount: 0,
            description: "Small".to_string(),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_update_delete_cabin() {
        let backend = MemoryBackend::new();

        // Initially empty
        assert!(backend.list_cabins().await.unwrap().is_empty());

        let first = backend.insert_cabin(row("001")).await.unwrap();
        let second = backend.insert_cabin(row("002")).await.unwrap();
        assert_ne!(first.id, second.id);

        let mut edited = row("001b");
        edited.discount = 20;
        let updated = backend.update_cabin(first.id, edited).await.unwrap();
        assert_eq!(updated.name, "001b");
        assert_eq!(updated.created_at, first.created_at);

        backend.delete_cabin(second.id).await.unwrap();
        let cabins = backend.list_cabins().await.unwrap();
        assert_eq!(cabins.len(), 1);
        assert_eq!(cabins[0].discount, 20);
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let backend = MemoryBackend::new();
        let err = backend.update_cabin(42, row("x")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { table: "cabins", id: 42 });
        assert!(backend.delete_cabin(42).await.unwrap_err().is_not_found());
        assert!(backend.get_booking(9).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_upload_failure_switch() {
        let backend = MemoryBackend::new();
        backend
            .upload_image("cabin-images", "a.jpg", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(backend.image("cabin-images", "a.jpg"), Some(vec![1, 2, 3]));

        backend.fail_uploads(true);
        assert!(backend
            .upload_image("cabin-images", "b.jpg", vec![4])
            .await
            .is_err());
        assert_eq!(backend.image_count(), 1);
    }

    #[tokio::test]
    async fn test_bookings_filter_by_status() {
        let backend = MemoryBackend::seeded();
        assert_eq!(backend.list_bookings(None).await.unwrap().len(), 3);
        let checked_in = backend
            .list_bookings(Some(BookingStatus::CheckedIn))
            .await
            .unwrap();
        assert_eq!(checked_in.len(), 1);
        assert_eq!(checked_in[0].status, BookingStatus::CheckedIn);
    }

    #[tokio::test]
    async fn test_sign_in_sign_out() {
        let backend = MemoryBackend::seeded();
        assert!(backend.current_user().await.unwrap().is_none());

        let wrong = Credentials {
            email: "demo@wildoasis.test".to_string(),
            password: "nope".to_string(),
        };
        assert!(backend.sign_in(wrong).await.is_err());

        let user = backend
            .sign_in(Credentials {
                email: "demo@wildoasis.test".to_string(),
                password: "wildoasis".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.display_name(), "Demo Manager");
        assert_eq!(backend.current_user().await.unwrap(), Some(user));

        backend.sign_out().await.unwrap();
        assert!(backend.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let backend = MemoryBackend::seeded();
        let user = NewUser {
            full_name: "Demo".to_string(),
            email: "demo@wildoasis.test".to_string(),
            password: "password1".to_string(),
        };
        assert!(matches!(
            backend.sign_up(user).await,
            Err(StoreError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_settings_update() {
        let backend = MemoryBackend::new();
        let settings = backend
            .update_settings(SettingsUpdate {
                max_guests_per_booking: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(settings.max_guests_per_booking, 10);
        assert_eq!(backend.get_settings().await.unwrap(), settings);
    }
}
