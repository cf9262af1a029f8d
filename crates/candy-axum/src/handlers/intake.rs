//! Multipart form intake for the create and update forms.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use candy_core::{CandyFields, ImageUpload};
use thiserror::Error;
use tracing::debug;

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "imagen";

/// Content type assumed when a file part declares none.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Why a multipart form could not be read.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("More than one file sent in field '{0}'")]
    DuplicateImage(String),
}

/// A submitted candy form.
#[derive(Debug, Default)]
pub struct CandyForm {
    pub fields: CandyFields,
    pub upload: Option<ImageUpload>,
}

/// Drain `multipart` into a [`CandyForm`].
///
/// Text fields are read under their form names (`nombre`, `tipo`,
/// `descripcion`) or the English aliases. A file input left empty by the
/// browser (no filename, no bytes) counts as no upload. A second image part,
/// empty or not, is rejected.
pub async fn read_candy_form(mut multipart: Multipart) -> Result<CandyForm, IntakeError> {
    let mut form = CandyForm::default();
    let mut image_seen = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "nombre" | "name" => form.fields.name = field.text().await?,
            "tipo" | "kind" => form.fields.kind = field.text().await?,
            "descripcion" | "description" => form.fields.description = field.text().await?,
            IMAGE_FIELD | "image" => {
                if image_seen {
                    return Err(IntakeError::DuplicateImage(name));
                }
                image_seen = true;
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await?;

                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }
                debug!(
                    filename = %filename,
                    content_type = %content_type,
                    size = bytes.len(),
                    "Received image upload"
                );
                form.upload = Some(ImageUpload::new(filename, content_type, bytes.to_vec()));
            }
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}
