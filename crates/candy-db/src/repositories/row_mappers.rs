//! Row mapping helpers for `SQLite` queries.

use candy_core::{Candy, ImageRef, RepositoryError};
use chrono::{DateTime, Utc};
use sqlx::Row;

/// Shared SELECT column list for candy queries.
pub const CANDY_SELECT_COLUMNS: &str = "id, name, kind, description, image, created_at";

/// Format a timestamp the way it is stored in the `created_at` column.
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339()
}

/// Parse a stored RFC 3339 timestamp.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("created_at '{raw}': {e}")))
}

/// Parse a database row into a Candy.
pub fn row_to_candy(row: &sqlx::sqlite::SqliteRow) -> Result<Candy, RepositoryError> {
    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Candy {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        kind: row
            .try_get("kind")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        description: row
            .try_get("description")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        image: ImageRef::new(
            row.try_get::<String, _>("image")
                .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        ),
        created_at: parse_datetime(&created_at)?,
    })
}
