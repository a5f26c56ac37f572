use api::cabins::{create_edit_cabin, CabinDraft, FieldError};
use dioxus::prelude::*;
use store::{Cabin, CabinId, CabinImage};

use crate::backend::{app_config, make_backend};
use crate::components::{
    error_options, success_options, use_toast, Button, ButtonVariant, FormRow, Input,
};
use crate::modal::ModalHandle;

/// Saves cabins on behalf of a form shown in `modal`.
///
/// The save runs in the scope that called [`use_cabin_saver`], not in the
/// form, so dismissing the window mid-request does not cancel it. On
/// success the window is closed and `on_saved` runs.
#[derive(Clone, Copy, PartialEq)]
pub struct CabinSaver {
    saving: Signal<bool>,
    save: Callback<(CabinDraft, Option<CabinId>)>,
}

impl CabinSaver {
    pub fn is_saving(&self) -> bool {
        (self.saving)()
    }

    pub fn save(&self, draft: CabinDraft, edit_id: Option<CabinId>) {
        self.save.call((draft, edit_id));
    }
}

pub fn use_cabin_saver(modal: ModalHandle, on_saved: EventHandler<()>) -> CabinSaver {
    let toast = use_toast();
    let mut saving = use_signal(|| false);
    let save = use_callback(move |(draft, edit_id): (CabinDraft, Option<CabinId>)| {
        spawn(async move {
            saving.set(true);
            let bucket = app_config().backend.image_bucket;
            let result = create_edit_cabin(&make_backend(), &bucket, draft, edit_id).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    let message = if edit_id.is_some() {
                        "Cabin successfully edited"
                    } else {
                        "New cabin successfully created"
                    };
                    toast.success(message.to_string(), success_options());
                    on_saved.call(());
                    if let Err(err) = modal.try_close() {
                        tracing::debug!("cabin saved after its window closed: {err}");
                    }
                }
                Err(e) => toast.error(e.to_string(), error_options()),
            }
        });
    });
    CabinSaver { saving, save }
}

/// Create a cabin, or edit `cabin` when one is given.
///
/// The form validates its fields and hands the draft to `on_submit`;
/// `saving` disables it while the owner is saving. `on_close` is the
/// window's close handler and runs on cancel.
#[component]
pub fn CreateCabinForm(
    cabin: Option<Cabin>,
    #[props(default)] saving: bool,
    on_submit: EventHandler<CabinDraft>,
    on_close: Option<EventHandler<()>>,
) -> Element {
    let editing = cabin.is_some();
    let draft = cabin.as_ref().map(CabinDraft::from_cabin);

    let mut name = use_signal(|| draft.as_ref().map(|d| d.name.clone()).unwrap_or_default());
    let mut max_capacity = use_signal(|| number_text(draft.as_ref().map(|d| d.max_capacity)));
    let mut regular_price = use_signal(|| number_text(draft.as_ref().map(|d| d.regular_price)));
    let mut discount = use_signal(|| draft.as_ref().map(|d| d.discount).unwrap_or(0).to_string());
    let mut description = use_signal(|| {
        draft
            .as_ref()
            .map(|d| d.description.clone())
            .unwrap_or_default()
    });
    let mut image = use_signal(|| draft.as_ref().and_then(|d| d.image.clone()));
    let mut errors = use_signal(Vec::<FieldError>::new);
    let toast = use_toast();

    let close = move || {
        if let Some(on_close) = on_close {
            on_close.call(());
        }
    };

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => image.set(Some(CabinImage::Upload {
                file_name: file.name(),
                bytes: bytes.to_vec(),
            })),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", file.name(), e);
                toast.error(
                    "The selected image could not be read".to_string(),
                    error_options(),
                );
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = CabinDraft {
            name: name(),
            max_capacity: parse_number(&max_capacity()),
            regular_price: parse_number(&regular_price()),
            discount: parse_number(&discount()),
            description: description(),
            image: image(),
        };
        let problems = draft.validate();
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());
        on_submit.call(draft);
    };

    let error_for = move |field: &str| {
        errors
            .read()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.to_string())
    };
    let image_label = match image() {
        Some(CabinImage::Upload { file_name, .. }) => file_name,
        Some(CabinImage::Stored(_)) => "Current photo".to_string(),
        None => "No photo selected".to_string(),
    };

    rsx! {
        form {
            class: if on_close.is_some() { "cabin-form modal" } else { "cabin-form" },
            onsubmit: handle_submit,

            FormRow { label: "Cabin name", html_for: "name", error: error_for("name"),
                Input {
                    id: "name",
                    value: name(),
                    disabled: saving,
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            FormRow { label: "Maximum capacity", html_for: "max_capacity", error: error_for("max_capacity"),
                Input {
                    id: "max_capacity",
                    r#type: "number",
                    value: max_capacity(),
                    disabled: saving,
                    oninput: move |evt: FormEvent| max_capacity.set(evt.value()),
                }
            }
            FormRow { label: "Regular price", html_for: "regular_price", error: error_for("regular_price"),
                Input {
                    id: "regular_price",
                    r#type: "number",
                    value: regular_price(),
                    disabled: saving,
                    oninput: move |evt: FormEvent| regular_price.set(evt.value()),
                }
            }
            FormRow { label: "Discount", html_for: "discount", error: error_for("discount"),
                Input {
                    id: "discount",
                    r#type: "number",
                    value: discount(),
                    disabled: saving,
                    oninput: move |evt: FormEvent| discount.set(evt.value()),
                }
            }
            FormRow { label: "Description for website", html_for: "description", error: error_for("description"),
                textarea {
                    class: "textarea",
                    id: "description",
                    value: description(),
                    disabled: saving,
                    oninput: move |evt| description.set(evt.value()),
                }
            }
            FormRow { label: "Cabin photo", html_for: "image", error: error_for("image"),
                input {
                    class: "file-input",
                    id: "image",
                    r#type: "file",
                    accept: "image/*",
                    disabled: saving,
                    onchange: handle_file,
                }
                span { class: "file-name", "{image_label}" }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    r#type: "reset",
                    onclick: move |_| close(),
                    "Cancel"
                }
                Button {
                    r#type: "submit",
                    disabled: saving,
                    if editing { "Edit cabin" } else { "Create new cabin" }
                }
            }
        }
    }
}

fn number_text(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Empty or malformed input counts as 0 and is caught by validation.
fn parse_number(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_numbers_fail_validation() {
        assert_eq!(parse_number(" 4 "), 4);
        assert_eq!(parse_number(""), 0);
        assert_eq!(parse_number("-2"), 0);

        let draft = CabinDraft {
            name: "004".to_string(),
            max_capacity: parse_number("two"),
            regular_price: parse_number("300"),
            discount: parse_number(""),
            description: "Lakeside".to_string(),
            image: Some(CabinImage::Stored("memory://wildoasis/x.jpg".to_string())),
        };
        let fields: Vec<_> = draft.validate().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["max_capacity"]);
    }

    #[test]
    fn edit_form_starts_from_the_cabin_values() {
        assert_eq!(number_text(Some(6)), "6");
        assert_eq!(number_text(None), "");
    }
}
