//! Image references and upload intake types.
//!
//! An image reference is either a generated filename pointing into the
//! image store, or the shared placeholder [`DEFAULT_IMAGE`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Placeholder image shown for candies without an uploaded picture.
///
/// Never stored in, or deleted from, the image store.
pub const DEFAULT_IMAGE: &str = "default.jpg";

/// Image formats accepted for upload. Checked against both the file
/// extension and the declared content type.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Filename of a candy's image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Reference to the shared placeholder image.
    pub fn placeholder() -> Self {
        Self(DEFAULT_IMAGE.to_string())
    }

    /// Wrap an existing filename, e.g. one read back from the store.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Generate a fresh, collision-free filename with the given extension.
    pub fn generate(extension: &str) -> Self {
        Self(format!("{}.{extension}", Uuid::new_v4().simple()))
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == DEFAULT_IMAGE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised while vetting an uploaded file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// Extension or content type is not one of [`ALLOWED_IMAGE_TYPES`].
    #[error("Only images are allowed (jpg, jpeg, png, gif): {filename} ({content_type})")]
    UnsupportedType {
        filename: String,
        content_type: String,
    },
}

/// A single uploaded file, as delivered by the upload intake.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Filename as sent by the client.
    pub original_filename: String,
    /// Content type declared by the client.
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("original_filename", &self.original_filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    pub fn new(
        original_filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            original_filename: original_filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Lower-cased extension of the original filename, without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.original_filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// Check the upload against the image-type filter.
    ///
    /// Both the extension and the declared content type must name an allowed
    /// format. Returns the normalized extension to use for the stored file.
    pub fn validate(&self) -> Result<String, UploadError> {
        let extension = self
            .extension()
            .filter(|ext| ALLOWED_IMAGE_TYPES.contains(&ext.as_str()));

        match extension {
            Some(ext) if content_type_allowed(&self.content_type) => Ok(ext),
            _ => Err(UploadError::UnsupportedType {
                filename: self.original_filename.clone(),
                content_type: self.content_type.clone(),
            }),
        }
    }
}

/// `image/png`, `image/JPEG; charset=binary` etc. Parameters are ignored.
fn content_type_allowed(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence
        .split_once('/')
        .is_some_and(|(top, sub)| top == "image" && ALLOWED_IMAGE_TYPES.contains(&sub))
}
