//! Composition utilities for building a `CandyService` with `SQLite` and
//! filesystem backends.
//!
//! Construction only; no domain logic lives here.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use candy_core::CandyService;

use crate::repositories::SqliteCandyRepository;
use crate::storage::FsImageStore;

/// Factory for creating adapter instances.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a candy repository from a pool.
    pub fn candy_repository(pool: SqlitePool) -> Arc<SqliteCandyRepository> {
        Arc::new(SqliteCandyRepository::new(pool))
    }

    /// Open the image store rooted at `uploads_dir`.
    pub async fn image_store(uploads_dir: impl Into<PathBuf>) -> anyhow::Result<Arc<FsImageStore>> {
        Ok(Arc::new(FsImageStore::new(uploads_dir).await?))
    }

    /// Build a complete `CandyService` from a pool and an uploads directory.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use candy_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let service = CoreFactory::build_candy_service(pool, uploads_dir, 5).await?;
    /// ```
    pub async fn build_candy_service(
        pool: SqlitePool,
        uploads_dir: impl Into<PathBuf>,
        page_size: u32,
    ) -> anyhow::Result<CandyService> {
        let repo = Self::candy_repository(pool);
        let images = Self::image_store(uploads_dir).await?;
        Ok(CandyService::new(repo, images).with_page_size(page_size))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get a reference to the pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
