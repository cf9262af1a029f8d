//! Candy repository trait definition.
//!
//! This port defines the interface for candy persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Candy, CandyFilter, NewCandy};

/// Repository for candy persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD plus filtered count; pagination arithmetic belongs in `CandyService`
/// - `list` returns candies in the store's natural (insertion) order
#[async_trait]
pub trait CandyRepository: Send + Sync {
    /// List candies matching `filter`, skipping `offset` and returning at most `limit`.
    async fn list(
        &self,
        filter: &CandyFilter,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Candy>, RepositoryError>;

    /// Count candies matching `filter`.
    async fn count(&self, filter: &CandyFilter) -> Result<u64, RepositoryError>;

    /// Get a candy by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the candy doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Candy, RepositoryError>;

    /// Insert a new candy, returning it with its assigned ID.
    async fn insert(&self, candy: &NewCandy) -> Result<Candy, RepositoryError>;

    /// Overwrite an existing candy.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the candy doesn't exist.
    async fn update(&self, candy: &Candy) -> Result<(), RepositoryError>;

    /// Delete a candy by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the candy doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
