//! Path utilities for catalog data directories.
//!
//! This module provides the canonical path resolution for all candy components:
//! - Application data root
//! - Database location
//! - Uploaded images directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Environment overrides are read here and nowhere else

mod database;
mod error;
mod platform;
mod uploads;

pub use database::database_path;
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, ensure_dir};
pub use uploads::{UPLOADS_DIR_ENV, uploads_dir};
