use dioxus::prelude::*;
use store::{Booking, BookingStatus};

use crate::components::{ErrorMessage, PageHeading, Spinner};
use crate::queries::{use_bookings, use_cabins};

/// Headline numbers for the front desk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub bookings: usize,
    pub checked_in: usize,
    pub sales: u64,
    pub nights: u64,
}

impl Summary {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        Self {
            bookings: bookings.len(),
            checked_in: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::CheckedIn)
                .count(),
            sales: bookings
                .iter()
                .filter(|b| b.is_paid)
                .map(|b| u64::from(b.total_price))
                .sum(),
            nights: bookings.iter().map(|b| u64::from(b.num_nights)).sum(),
        }
    }

    /// Share of all cabin nights that are booked, in percent.
    pub fn occupancy(&self, cabins: usize, days: u64) -> u64 {
        let capacity = cabins as u64 * days;
        if capacity == 0 {
            return 0;
        }
        (self.nights * 100 / capacity).min(100)
    }
}

const OCCUPANCY_DAYS: u64 = 30;

#[component]
pub fn DashboardView() -> Element {
    let filter = use_signal(|| None);
    let bookings = use_bookings(filter);
    let cabins = use_cabins();

    let (bookings, cabins) = (bookings.read(), cabins.read());
    let (Some(bookings), Some(cabins)) = (&*bookings, &*cabins) else {
        return rsx! {
            PageHeading { title: "Dashboard" }
            Spinner {}
        };
    };
    let (bookings, cabins) = match (bookings, cabins) {
        (Ok(b), Ok(c)) => (b, c),
        (Err(e), _) | (_, Err(e)) => {
            return rsx! {
                PageHeading { title: "Dashboard" }
                ErrorMessage { message: e.to_string() }
            };
        }
    };
    let summary = Summary::from_bookings(bookings);
    let occupancy = summary.occupancy(cabins.len(), OCCUPANCY_DAYS);

    rsx! {
        PageHeading { title: "Dashboard" }
        div {
            class: "stats",
            Stat { title: "Bookings", value: "{summary.bookings}" }
            Stat { title: "Sales", value: "${summary.sales}" }
            Stat { title: "Checked in", value: "{summary.checked_in}" }
            Stat { title: "Occupancy rate", value: "{occupancy}%" }
        }
    }
}

#[component]
fn Stat(title: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat",
            h5 { "{title}" }
            p { "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn booking(status: BookingStatus, nights: u32, total: u32, paid: bool) -> Booking {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        Booking {
            id: 1,
            created_at: Utc::now(),
            start_date: start,
            end_date: start + chrono::Days::new(u64::from(nights)),
            num_nights: nights,
            num_guests: 2,
            cabin_price: total,
            extras_price: 0,
            total_price: total,
            status,
            has_breakfast: false,
            is_paid: paid,
            observations: None,
            cabins: None,
            guests: None,
        }
    }

    #[test]
    fn summary_counts_only_paid_sales() {
        let summary = Summary::from_bookings(&[
            booking(BookingStatus::CheckedIn, 3, 750, true),
            booking(BookingStatus::Unconfirmed, 2, 500, false),
        ]);
        assert_eq!(summary.bookings, 2);
        assert_eq!(summary.checked_in, 1);
        assert_eq!(summary.sales, 750);
        assert_eq!(summary.nights, 5);
    }

    #[test]
    fn occupancy_is_capped_and_handles_no_cabins() {
        let summary = Summary {
            nights: 45,
            ..Summary::default()
        };
        assert_eq!(summary.occupancy(3, 30), 50);
        assert_eq!(summary.occupancy(0, 30), 0);
        assert_eq!(summary.occupancy(1, 30), 100);
    }
}
