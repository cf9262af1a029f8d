//! Uploaded image directory resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// Environment variable overriding the uploads directory.
pub const UPLOADS_DIR_ENV: &str = "CANDY_UPLOADS_DIR";

/// Get the directory holding uploaded candy images.
///
/// Resolution order:
/// 1. `CANDY_UPLOADS_DIR` environment variable
/// 2. `<data_root>/uploads`
pub fn uploads_dir() -> Result<PathBuf, PathError> {
    let dir = match env::var(UPLOADS_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
        _ => data_root()?.join("uploads"),
    };

    ensure_dir(&dir)?;
    Ok(dir)
}
