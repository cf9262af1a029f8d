//! Flat-directory implementation of the `ImageStore` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use candy_core::{ImageRef, ImageStore, ImageStoreError};

/// Stores each image as a single file directly under `base_path`.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    base_path: PathBuf,
}

impl FsImageStore {
    /// Open the store, creating the directory if it does not exist yet.
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, ImageStoreError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).await.map_err(|e| {
            ImageStoreError::Io(format!(
                "Failed to create uploads directory '{}': {e}",
                base_path.display()
            ))
        })?;

        info!(path = %base_path.display(), "Image store initialized");
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve `name` to a file directly inside the store.
    ///
    /// Rejects anything that is not a single plain path component.
    fn resolve(&self, name: &ImageRef) -> Result<PathBuf, ImageStoreError> {
        let raw = name.as_str();
        if raw.is_empty()
            || raw == "."
            || raw.contains("..")
            || raw.contains('/')
            || raw.contains('\\')
        {
            return Err(ImageStoreError::InvalidName(raw.to_string()));
        }
        Ok(self.base_path.join(raw))
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, name: &ImageRef, bytes: &[u8]) -> Result<(), ImageStoreError> {
        let path = self.resolve(name)?;
        fs::write(&path, bytes)
            .await
            .map_err(|e| ImageStoreError::Io(format!("Failed to write image {name}: {e}")))?;

        debug!(image = %name, size = bytes.len(), "Stored image");
        Ok(())
    }

    async fn delete(&self, name: &ImageRef) -> Result<(), ImageStoreError> {
        let path = self.resolve(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(image = %name, "Deleted image");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ImageStoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(ImageStoreError::Io(format!(
                "Failed to delete image {name}: {e}"
            ))),
        }
    }

    async fn exists(&self, name: &ImageRef) -> Result<bool, ImageStoreError> {
        let path = self.resolve(name)?;
        fs::try_exists(&path)
            .await
            .map_err(|e| ImageStoreError::Io(format!("Failed to stat image {name}: {e}")))
    }
}
