//! `SQLite` implementation of the `CandyRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use candy_core::{Candy, CandyFilter, CandyRepository, NewCandy, RepositoryError};

use super::row_mappers::{CANDY_SELECT_COLUMNS, format_datetime, row_to_candy};

/// `SQLite` implementation of the `CandyRepository` trait.
///
/// Natural order is insertion order (`ORDER BY id`).
pub struct SqliteCandyRepository {
    pool: SqlitePool,
}

impl SqliteCandyRepository {
    /// Create a new `SQLite` candy repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// `WHERE` clause for a listing filter. Callers bind `filter.kind` first when set.
fn filter_clause(filter: &CandyFilter) -> &'static str {
    if filter.kind.is_some() {
        "WHERE kind = ?"
    } else {
        ""
    }
}

#[async_trait]
impl CandyRepository for SqliteCandyRepository {
    async fn list(
        &self,
        filter: &CandyFilter,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Candy>, RepositoryError> {
        let offset = i64::try_from(offset)
            .map_err(|_| RepositoryError::Constraint(format!("Offset {offset} out of range")))?;

        let query = format!(
            "SELECT {CANDY_SELECT_COLUMNS} FROM candies {} ORDER BY id LIMIT ? OFFSET ?",
            filter_clause(filter)
        );

        let mut list_query = sqlx::query(&query);
        if let Some(kind) = &filter.kind {
            list_query = list_query.bind(kind);
        }

        let rows = list_query
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_candy).collect()
    }

    async fn count(&self, filter: &CandyFilter) -> Result<u64, RepositoryError> {
        let query = format!("SELECT COUNT(*) FROM candies {}", filter_clause(filter));

        let mut count_query = sqlx::query_scalar::<_, i64>(&query);
        if let Some(kind) = &filter.kind {
            count_query = count_query.bind(kind);
        }

        let count = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        u64::try_from(count).map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    async fn get_by_id(&self, id: i64) -> Result<Candy, RepositoryError> {
        let query = format!("SELECT {CANDY_SELECT_COLUMNS} FROM candies WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Candy with ID {id}")))?;

        row_to_candy(&row)
    }

    async fn insert(&self, candy: &NewCandy) -> Result<Candy, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO candies (name, kind, description, image, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&candy.name)
        .bind(&candy.kind)
        .bind(&candy.description)
        .bind(candy.image.as_str())
        .bind(format_datetime(&candy.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, candy: &Candy) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE candies SET name = ?, kind = ?, description = ?, image = ? WHERE id = ?",
        )
        .bind(&candy.name)
        .bind(&candy.kind)
        .bind(&candy.description)
        .bind(candy.image.as_str())
        .bind(candy.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Candy with ID {}",
                candy.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM candies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Candy with ID {id}")));
        }

        Ok(())
    }
}
