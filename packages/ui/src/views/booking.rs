use dioxus::prelude::*;
use store::BookingId;

use crate::components::{Button, ButtonVariant, ErrorMessage, PageHeading, Spinner};
use crate::queries::use_booking;

const BOOKINGS_CSS: Asset = asset!("/assets/styling/bookings.css");

/// Details of one booking.
#[component]
pub fn BookingView(booking_id: BookingId, on_back: EventHandler<()>) -> Element {
    let booking = use_booking(booking_id);

    let body = match &*booking.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
        Some(Ok(booking)) => {
            let guest = booking.guests.clone();
            rsx! {
                div {
                    class: "booking-detail",
                    header {
                        span { class: "tag {booking.status.as_str()}", "{booking.status.label()}" }
                        p { "{booking.num_nights} nights in Cabin {booking.cabin_name()}" }
                        p { class: "muted", "{booking.start_date} → {booking.end_date}" }
                    }
                    if let Some(guest) = guest {
                        p {
                            if let Some(flag) = guest.country_flag.clone() {
                                img { class: "flag", src: "{flag}", alt: "Flag of {guest.nationality.clone().unwrap_or_default()}" }
                            }
                            "{guest.full_name} + {booking.num_guests.saturating_sub(1)} guests · {guest.email}"
                        }
                    }
                    if let Some(observations) = booking.observations.clone() {
                        p { class: "observations", "Observations: {observations}" }
                    }
                    p { if booking.has_breakfast { "Breakfast included" } else { "No breakfast" } }
                    p {
                        class: if booking.is_paid { "price paid" } else { "price unpaid" },
                        "Total price ${booking.total_price} (${booking.cabin_price} cabin + ${booking.extras_price} extras) "
                        if booking.is_paid { "Paid" } else { "Will pay at property" }
                    }
                }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: BOOKINGS_CSS }

        PageHeading { title: "Booking #{booking_id}",
            Button { variant: ButtonVariant::Secondary, onclick: move |_| on_back.call(()), "← Back" }
        }
        {body}
    }
}
