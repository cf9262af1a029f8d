//! Core domain types, ports and lifecycle services for the candy catalog.
//!
//! This crate has no knowledge of SQL, HTTP or concrete filesystem layout.
//! Adapters implement the traits in [`ports`] and drive [`CandyService`].
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ALLOWED_IMAGE_TYPES, Candy, CandyFields, CandyFilter, CandyPage, DEFAULT_IMAGE,
    DEFAULT_PAGE_SIZE, ImageRef, ImageUpload, NewCandy, PageRequest, UploadError, total_pages,
};
pub use paths::{PathError, data_root, database_path, uploads_dir};
pub use ports::{CandyRepository, CoreError, ImageStore, ImageStoreError, RepositoryError};
pub use services::CandyService;
