//! # Cabin service
//!
//! Loads, creates, edits and deletes cabins, including the photo upload that
//! goes with a create or edit.
//!
//! ## Create / edit sequence
//!
//! 1. Resolve the image path. A [`CabinImage::Stored`] URL is kept untouched;
//!    a [`CabinImage::Upload`] gets a unique object name
//!    (`"{uuid}-{file_name}"`, slashes stripped so storage does not create
//!    folders) and the public URL it will be served from.
//! 2. Insert or update the row with that path.
//! 3. Upload the file, if there is one.
//! 4. If the upload fails for a new cabin, delete the row again so no cabin
//!    points at a missing photo. An edited cabin keeps its row.

use store::{Backend, Cabin, CabinId, CabinImage, CabinRow};

use crate::error::ApiError;

/// Values collected by the cabin form.
#[derive(Clone, Debug, PartialEq)]
pub struct CabinDraft {
    pub name: String,
    pub max_capacity: u32,
    pub regular_price: u32,
    pub discount: u32,
    pub description: String,
    pub image: Option<CabinImage>,
}

/// A validation failure tied to one form field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

pub const REQUIRED: &str = "This field is required";

impl CabinDraft {
    /// A draft pre-filled from an existing cabin, keeping its stored photo.
    pub fn from_cabin(cabin: &Cabin) -> Self {
        Self {
            name: cabin.name.clone(),
            max_capacity: cabin.max_capacity,
            regular_price: cabin.regular_price,
            discount: cabin.discount,
            description: cabin.description.clone(),
            image: (!cabin.image.is_empty()).then(|| CabinImage::Stored(cabin.image.clone())),
        }
    }

    /// Check every field; an empty list means the draft can be saved.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError { field: "name", message: REQUIRED });
        }
        if self.max_capacity < 1 {
            errors.push(FieldError {
                field: "max_capacity",
                message: "Capacity should be at least 1",
            });
        }
        if self.regular_price < 1 {
            errors.push(FieldError {
                field: "regular_price",
                message: "Price should be at least 1",
            });
        }
        if self.discount > self.regular_price {
            errors.push(FieldError {
                field: "discount",
                message: "Discount should be less than the regular price",
            });
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError { field: "description", message: REQUIRED });
        }
        if self.image.is_none() {
            errors.push(FieldError { field: "image", message: REQUIRED });
        }
        errors
    }
}

/// Object name for an uploaded photo: unique prefix, no slashes.
pub fn image_object_name(file_name: &str) -> String {
    format!("{}-{}", uuid::Uuid::new_v4(), file_name).replace('/', "")
}

/// Public URL of an object in `bucket`.
pub fn public_image_url(storage_url: &str, bucket: &str, object: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{bucket}/{object}",
        storage_url.trim_end_matches('/')
    )
}

pub async fn get_cabins<B: Backend>(backend: &B) -> Result<Vec<Cabin>, ApiError> {
    backend.list_cabins().await.map_err(|e| {
        tracing::error!("Failed to load cabins: {}", e);
        ApiError::CabinsNotLoaded
    })
}

/// Create a cabin (`id == None`) or edit cabin `id`, uploading its photo if a
/// new file was picked.
pub async fn create_edit_cabin<B: Backend>(
    backend: &B,
    bucket: &str,
    draft: CabinDraft,
    id: Option<CabinId>,
) -> Result<Cabin, ApiError> {
    if let Some(first) = draft.validate().first() {
        return Err(ApiError::Invalid(format!("{}: {}", first.field, first.message)));
    }

    let image = draft
        .image
        .ok_or_else(|| ApiError::Invalid(format!("image: {REQUIRED}")))?;
    let (image_path, upload) = match image {
        CabinImage::Stored(url) => (url, None),
        CabinImage::Upload { file_name, bytes } => {
            let object = image_object_name(&file_name);
            let url = public_image_url(&backend.storage_url(), bucket, &object);
            (url, Some((object, bytes)))
        }
    };

    let row = CabinRow {
        name: draft.name.trim().to_string(),
        max_capacity: draft.max_capacity,
        regular_price: draft.regular_price,
        discount: draft.discount,
        description: draft.description,
        image: image_path,
    };

    let cabin = match id {
        None => backend.insert_cabin(row).await.map_err(|e| {
            tracing::error!("Failed to create cabin: {}", e);
            ApiError::CabinNotCreated
        })?,
        Some(id) => backend.update_cabin(id, row).await.map_err(|e| {
            tracing::error!("Failed to edit cabin {}: {}", id, e);
            ApiError::CabinNotEdited
        })?,
    };

    let Some((object, bytes)) = upload else {
        return Ok(cabin);
    };

    if let Err(e) = backend.upload_image(bucket, &object, bytes).await {
        tracing::error!("Failed to upload cabin image {}: {}", object, e);
        if id.is_some() {
            return Err(ApiError::ImageUploadFailed);
        }
        if let Err(e) = backend.delete_cabin(cabin.id).await {
            tracing::error!("Failed to roll back cabin {}: {}", cabin.id, e);
        }
        return Err(ApiError::ImageUploadRolledBack);
    }

    tracing::info!("Saved cabin {} with image {}", cabin.id, object);
    Ok(cabin)
}

pub async fn delete_cabin<B: Backend>(backend: &B, id: CabinId) -> Result<(), ApiError> {
    backend.delete_cabin(id).await.map_err(|e| {
        tracing::error!("Failed to delete cabin {}: {}", id, e);
        ApiError::CabinNotDeleted
    })
}
