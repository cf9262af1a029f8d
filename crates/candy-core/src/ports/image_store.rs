//! Image store trait definition.
//!
//! A flat, directory-style blob store addressed by generated filename.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ImageRef;

/// Errors raised by image store implementations.
#[derive(Debug, Error)]
pub enum ImageStoreError {
    /// No file is stored under the given name.
    #[error("Image not found: {0}")]
    NotFound(String),

    /// The name would resolve outside the store's directory.
    #[error("Invalid image name: {0}")]
    InvalidName(String),

    /// Underlying I/O failure.
    #[error("Image storage error: {0}")]
    Io(String),
}

/// Persistent storage for uploaded candy images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write a new file. Overwrites silently if the name is already taken.
    async fn save(&self, name: &ImageRef, bytes: &[u8]) -> Result<(), ImageStoreError>;

    /// Remove a stored file.
    ///
    /// Returns `Err(ImageStoreError::NotFound)` if nothing is stored under `name`.
    async fn delete(&self, name: &ImageRef) -> Result<(), ImageStoreError>;

    /// Whether a file is stored under `name`.
    async fn exists(&self, name: &ImageRef) -> Result<bool, ImageStoreError>;
}
