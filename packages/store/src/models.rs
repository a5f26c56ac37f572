//! # Domain models for the back-office
//!
//! Rows exchanged with the hosted database. Field names follow the table
//! columns (`snake_case`) so the same types deserialize straight from the REST
//! responses of [`crate::Backend`] implementations and from the in-memory
//! fixtures used in tests.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Cabin`] | A row of the `cabins` table. |
//! | [`CabinRow`] | The writable columns of a cabin, used for inserts and updates. |
//! | [`CabinImage`] | Either an image already in storage or a file waiting to be uploaded. |
//! | [`Booking`] | A row of `bookings`, joined with its cabin name and guest. |
//! | [`HotelSettings`] / [`SettingsUpdate`] | The single `settings` row and a partial update of it. |
//! | [`UserInfo`] | The signed-in staff member. |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type CabinId = i64;
pub type BookingId = i64;

/// A cabin as stored in the `cabins` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cabin {
    pub id: CabinId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub max_capacity: u32,
    pub regular_price: u32,
    #[serde(default)]
    pub discount: u32,
    #[serde(default)]
    pub description: String,
    /// Public URL of the cabin photo in storage.
    #[serde(default)]
    pub image: String,
}

impl Cabin {
    /// The writable columns of this cabin.
    pub fn to_row(&self) -> CabinRow {
        CabinRow {
            name: self.name.clone(),
            max_capacity: self.max_capacity,
            regular_price: self.regular_price,
            discount: self.discount,
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }
}

/// Columns written when a cabin is created or edited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CabinRow {
    pub name: String,
    pub max_capacity: u32,
    pub regular_price: u32,
    pub discount: u32,
    pub description: String,
    pub image: String,
}

/// The image attached to a cabin form.
#[derive(Clone, Debug, PartialEq)]
pub enum CabinImage {
    /// Already uploaded: the public URL.
    Stored(String),
    /// A file picked in the form that still has to be uploaded.
    Upload { file_name: String, bytes: Vec<u8> },
}

/// Booking lifecycle as stored in the `status` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Unconfirmed,
    CheckedIn,
    CheckedOut,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Unconfirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
    ];

    /// Column value, e.g. `"checked-in"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Unconfirmed => "unconfirmed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Unconfirmed => "Unconfirmed",
            BookingStatus::CheckedIn => "Checked in",
            BookingStatus::CheckedOut => "Checked out",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Cabin columns embedded in a booking row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CabinSummary {
    pub name: String,
}

/// Guest columns embedded in a booking row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default, rename = "countryFlag")]
    pub country_flag: Option<String>,
}

/// A booking joined with its cabin and guest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub created_at: DateTime<Utc>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: u32,
    pub num_guests: u32,
    pub cabin_price: u32,
    #[serde(default)]
    pub extras_price: u32,
    pub total_price: u32,
    pub status: BookingStatus,
    #[serde(default)]
    pub has_breakfast: bool,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub cabins: Option<CabinSummary>,
    #[serde(default)]
    pub guests: Option<Guest>,
}

impl Booking {
    pub fn cabin_name(&self) -> &str {
        self.cabins.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }

    pub fn guest_name(&self) -> &str {
        self.guests.as_ref().map(|g| g.full_name.as_str()).unwrap_or("-")
    }
}

/// The hotel-wide settings row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HotelSettings {
    pub min_booking_length: u32,
    pub max_booking_length: u32,
    pub max_guests_per_booking: u32,
    pub breakfast_price: u32,
}

impl Default for HotelSettings {
    fn default() -> Self {
        Self {
            min_booking_length: 3,
            max_booking_length: 90,
            max_guests_per_booking: 8,
            breakfast_price: 15,
        }
    }
}

/// A partial update of [`HotelSettings`]; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_booking_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_booking_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guests_per_booking: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast_price: Option<u32>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self == &SettingsUpdate::default()
    }

    /// Apply the present fields onto `settings`.
    pub fn apply(&self, settings: &mut HotelSettings) {
        if let Some(v) = self.min_booking_length {
            settings.min_booking_length = v;
        }
        if let Some(v) = self.max_booking_length {
            settings.max_booking_length = v;
        }
        if let Some(v) = self.max_guests_per_booking {
            settings.max_guests_per_booking = v;
        }
        if let Some(v) = self.breakfast_price {
            settings.breakfast_price = v;
        }
    }
}

/// The signed-in staff member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

/// Email + password pair used to sign in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A staff account to create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_status_uses_column_values() {
        let json = serde_json::to_string(&BookingStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked-in\"");
        assert_eq!(BookingStatus::parse("checked-out"), Some(BookingStatus::CheckedOut));
        assert_eq!(BookingStatus::parse("cancelled"), None);
    }

    #[test]
    fn settings_update_only_touches_present_fields() {
        let mut settings = HotelSettings::default();
        let update = SettingsUpdate {
            breakfast_price: Some(20),
            ..Default::default()
        };
        update.apply(&mut settings);
        assert_eq!(settings.breakfast_price, 20);
        assert_eq!(settings.max_booking_length, 90);

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"breakfast_price":20}"#);
        assert!(SettingsUpdate::default().is_empty());
    }

    #[test]
    fn booking_deserializes_joined_row() {
        let raw = r#"{
            "id": 7,
            "created_at": "2024-03-01T10:00:00Z",
            "start_date": "2024-04-02",
            "end_date": "2024-04-05",
            "num_nights": 3,
            "num_guests": 2,
            "cabin_price": 750,
            "total_price": 750,
            "status": "unconfirmed",
            "cabins": { "name": "001" },
            "guests": { "full_name": "Jonas Schmedtmann", "email": "hello@jonas.io" }
        }"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.cabin_name(), "001");
        assert_eq!(booking.guest_name(), "Jonas Schmedtmann");
        assert_eq!(booking.extras_price, 0);
        assert!(!booking.is_paid);
    }
}
