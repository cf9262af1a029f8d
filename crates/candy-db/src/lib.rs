//! `SQLite` and filesystem adapters for the candy catalog.
//!
//! - [`SqliteCandyRepository`] implements `CandyRepository` over a `SqlitePool`
//! - [`FsImageStore`] implements `ImageStore` over a flat uploads directory
//! - [`CoreFactory`] wires both into a `CandyService`
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;
pub mod storage;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export adapter implementations
pub use repositories::SqliteCandyRepository;
pub use storage::FsImageStore;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Only needed to force the bundled SQLite build
use libsqlite3_sys as _;
