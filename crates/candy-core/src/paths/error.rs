//! Errors raised while locating the catalog's data directories.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve or prepare a catalog directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// Neither `CANDY_DATA_DIR` nor a platform data directory is available.
    #[error("No data directory: set CANDY_DATA_DIR")]
    NoDataDir,

    /// The database or uploads location is occupied by a regular file.
    #[error("Expected a directory at {0}, found a file")]
    NotADirectory(PathBuf),

    /// The directory was missing and could not be created.
    #[error("Cannot create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// Asked to prepare an empty path.
    #[error("Empty directory path")]
    EmptyPath,
}
