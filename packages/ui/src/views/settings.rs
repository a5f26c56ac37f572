use dioxus::prelude::*;
use store::{HotelSettings, SettingsUpdate};

use crate::backend::make_backend;
use crate::components::{
    error_options, success_options, use_toast, ErrorMessage, FormRow, Input, PageHeading, Spinner,
};
use crate::queries::use_settings;

/// Which setting a form field edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingField {
    MinBookingLength,
    MaxBookingLength,
    MaxGuestsPerBooking,
    BreakfastPrice,
}

impl SettingField {
    pub const ALL: [SettingField; 4] = [
        SettingField::MinBookingLength,
        SettingField::MaxBookingLength,
        SettingField::MaxGuestsPerBooking,
        SettingField::BreakfastPrice,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SettingField::MinBookingLength => "min-nights",
            SettingField::MaxBookingLength => "max-nights",
            SettingField::MaxGuestsPerBooking => "max-guests",
            SettingField::BreakfastPrice => "breakfast-price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingField::MinBookingLength => "Minimum nights/booking",
            SettingField::MaxBookingLength => "Maximum nights/booking",
            SettingField::MaxGuestsPerBooking => "Maximum guests/booking",
            SettingField::BreakfastPrice => "Breakfast price",
        }
    }

    pub fn value(&self, settings: &HotelSettings) -> u32 {
        match self {
            SettingField::MinBookingLength => settings.min_booking_length,
            SettingField::MaxBookingLength => settings.max_booking_length,
            SettingField::MaxGuestsPerBooking => settings.max_guests_per_booking,
            SettingField::BreakfastPrice => settings.breakfast_price,
        }
    }

    /// The update that sets only this field to `value`.
    pub fn update(&self, value: u32) -> SettingsUpdate {
        let mut update = SettingsUpdate::default();
        match self {
            SettingField::MinBookingLength => update.min_booking_length = Some(value),
            SettingField::MaxBookingLength => update.max_booking_length = Some(value),
            SettingField::MaxGuestsPerBooking => update.max_guests_per_booking = Some(value),
            SettingField::BreakfastPrice => update.breakfast_price = Some(value),
        }
        update
    }
}

/// Hotel settings; each field is saved when it loses focus.
#[component]
pub fn SettingsView() -> Element {
    let mut settings = use_settings();
    let toast = use_toast();
    let mut saving = use_signal(|| false);

    let save = move |field: SettingField, text: String| {
        let current = match &*settings.peek() {
            Some(Ok(current)) => field.value(current),
            _ => return,
        };
        let Ok(value) = text.trim().parse::<u32>() else {
            toast.error(
                format!("{} must be a whole number", field.label()),
                error_options(),
            );
            return;
        };
        if value == current {
            return;
        }
        spawn(async move {
            saving.set(true);
            let result = api::settings::update_setting(&make_backend(), field.update(value)).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    toast.success("Setting successfully edited".to_string(), success_options());
                    settings.restart();
                }
                Err(e) => toast.error(e.to_string(), error_options()),
            }
        });
    };

    let body = match &*settings.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
        Some(Ok(current)) => {
            let values: Vec<(SettingField, u32)> = SettingField::ALL
                .iter()
                .map(|f| (*f, f.value(current)))
                .collect();
            rsx! {
                form {
                    class: "settings-form",
                    onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    for (field, value) in values {
                        SettingInput {
                            key: "{field.id()}",
                            field,
                            value,
                            disabled: saving(),
                            on_save: move |(field, text)| save(field, text),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        PageHeading { title: "Update hotel settings" }
        {body}
    }
}

/// One settings field. Keeps what is typed and hands it over on blur.
#[component]
fn SettingInput(
    field: SettingField,
    value: u32,
    disabled: bool,
    on_save: EventHandler<(SettingField, String)>,
) -> Element {
    let mut text = use_signal(|| value.to_string());

    rsx! {
        FormRow { label: field.label(), html_for: field.id(),
            Input {
                id: field.id(),
                r#type: "number",
                value: text(),
                disabled,
                oninput: move |evt: FormEvent| text.set(evt.value()),
                onblur: move |_| on_save.call((field, text())),
            }
        }
    }
}
