//! Data root resolution.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "CANDY_DATA_DIR";

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "candy-catalog";

/// Get the root directory for application data (database, uploads).
///
/// Resolution order:
/// 1. `CANDY_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/candy-catalog`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join(APP_DIR_NAME),
    };

    ensure_dir(&root)?;
    Ok(root)
}

/// Create `path` (and parents) if missing; fail if it exists as a non-directory.
pub fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }
    if path.exists() && !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }
    std::fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_rejects_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(
            ensure_dir(&file),
            Err(PathError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_ensure_dir_rejects_empty() {
        assert!(matches!(ensure_dir(Path::new("")), Err(PathError::EmptyPath)));
    }
}
