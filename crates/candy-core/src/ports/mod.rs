//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem paths in any signature; images are addressed by name
//! - Traits are minimal and CRUD-focused

pub mod candy_repository;
pub mod image_store;

use thiserror::Error;

use crate::domain::UploadError;

pub use candy_repository::CandyRepository;
pub use image_store::{ImageStore, ImageStoreError};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database unreachable, query failure).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored row could not be mapped back into a domain type.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., NOT NULL).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map it to their own error types (HTTP responses, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Image store operation failed.
    #[error(transparent)]
    ImageStore(#[from] ImageStoreError),

    /// Upload rejected by the image-type filter.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Whether the error means the requested candy does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }

    /// Whether the error was caused by bad input rather than a failing backend.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Upload(_) | Self::Validation(_))
    }
}
