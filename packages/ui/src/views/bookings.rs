use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaTrash};
use dioxus_free_icons::Icon;
use store::{Booking, BookingId, BookingStatus};

use crate::backend::make_backend;
use crate::cabins::ConfirmDelete;
use crate::components::{
    error_options, success_options, use_toast, ErrorMessage, PageHeading, Spinner,
};
use crate::modal::{use_modal_scope, ModalOpen, ModalWindow};
use crate::queries::use_bookings;

const BOOKINGS_CSS: Asset = asset!("/assets/styling/bookings.css");

/// Bookings, newest first, with a status filter.
#[component]
pub fn BookingsView(on_select: EventHandler<BookingId>) -> Element {
    let mut filter = use_signal(|| Option::<BookingStatus>::None);
    let mut bookings = use_bookings(filter);
    let refetch = move |_: ()| bookings.restart();

    rsx! {
        document::Stylesheet { href: BOOKINGS_CSS }

        PageHeading { title: "All bookings",
            div {
                class: "filter",
                button {
                    class: if filter().is_none() { "filter-button active" } else { "filter-button" },
                    onclick: move |_| filter.set(None),
                    "All"
                }
                for status in BookingStatus::ALL {
                    button {
                        key: "{status.as_str()}",
                        class: if filter() == Some(status) { "filter-button active" } else { "filter-button" },
                        onclick: move |_| filter.set(Some(status)),
                        "{status.label()}"
                    }
                }
            }
        }

        {
            match &*bookings.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
                Some(Ok(list)) if list.is_empty() => rsx! { p { class: "table-empty", "No bookings could be found." } },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "booking-table",
                        role: "table",
                        for booking in list.iter().cloned() {
                            BookingRow { key: "{booking.id}", booking, on_select, on_change: refetch }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn BookingRow(
    booking: Booking,
    on_select: EventHandler<BookingId>,
    on_change: EventHandler<()>,
) -> Element {
    let modal = use_modal_scope();
    let toast = use_toast();
    let mut deleting = use_signal(|| false);
    let id = booking.id;

    // Owned by the row so a dismissed confirm window does not cancel it.
    let delete = use_callback(move |_: ()| {
        spawn(async move {
            deleting.set(true);
            let result = api::bookings::delete_booking(&make_backend(), id).await;
            deleting.set(false);
            match result {
                Ok(()) => {
                    toast.success(
                        format!("Booking #{id} successfully deleted"),
                        success_options(),
                    );
                    if let Err(err) = modal.try_close() {
                        tracing::debug!("booking deleted after its window closed: {err}");
                    }
                    on_change.call(());
                }
                Err(e) => toast.error(e.to_string(), error_options()),
            }
        });
    });

    rsx! {
        div {
            class: "booking-row",
            role: "row",
            div { class: "booking-cabin", "{booking.cabin_name()}" }
            div {
                class: "booking-guest",
                span { "{booking.guest_name()}" }
                if let Some(guest) = &booking.guests {
                    span { class: "muted", "{guest.email}" }
                }
            }
            div {
                class: "booking-dates",
                span { "{booking.num_nights} night stay" }
                span { class: "muted", "{booking.start_date} → {booking.end_date}" }
            }
            span { class: "tag {booking.status.as_str()}", "{booking.status.label()}" }
            div { class: "booking-amount", "${booking.total_price}" }
            div {
                class: "booking-actions",
                button {
                    class: "icon-button",
                    "aria-label": "See details",
                    onclick: move |_| on_select.call(id),
                    Icon { width: 14, height: 14, icon: FaEye }
                }
                ModalOpen {
                    modal,
                    opens: "delete",
                    render: move |open: EventHandler<MouseEvent>| rsx! {
                        button {
                            class: "icon-button",
                            "aria-label": "Delete booking",
                            onclick: move |evt| open.call(evt),
                            Icon { width: 14, height: 14, icon: FaTrash }
                        }
                    },
                }
                ModalWindow {
                    modal,
                    name: "delete",
                    render: move |close: EventHandler<()>| rsx! {
                        ConfirmDelete {
                            resource_name: "booking",
                            disabled: deleting(),
                            on_confirm: move |_| delete.call(()),
                            on_close: close,
                        }
                    },
                }
            }
        }
    }
}
