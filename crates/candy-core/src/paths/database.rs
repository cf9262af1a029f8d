//! Database path resolution.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// Get the path to the catalog database file.
///
/// Returns `<data_root>/data/candy.db`. The `data/` subdirectory is
/// created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join("candy.db"))
}
