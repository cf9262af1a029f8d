//! Candy domain types.
//!
//! These types represent catalog items, independent of any
//! infrastructure concerns (database, filesystem, etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::ImageRef;
use crate::ports::CoreError;

// ─────────────────────────────────────────────────────────────────────────────
// Candy Types
// ─────────────────────────────────────────────────────────────────────────────

/// A candy that exists in the catalog with a store-assigned ID.
///
/// Use `NewCandy` for candies that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candy {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Category used for equality filtering (e.g. "chocolate", "gum").
    pub kind: String,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Generated image filename, or the shared placeholder.
    pub image: ImageRef,
    /// UTC timestamp of when the candy was added to the catalog.
    pub created_at: DateTime<Utc>,
}

impl Candy {
    /// Overwrite the editable fields with `fields`, keeping id and timestamps.
    pub fn apply(&mut self, fields: CandyFields, image: ImageRef) {
        self.name = fields.name;
        self.kind = fields.kind;
        self.description = fields.description;
        self.image = image;
    }
}

/// A candy to be inserted into the catalog (no ID yet).
///
/// After insertion, the repository returns a `Candy` with the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandy {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub image: ImageRef,
    pub created_at: DateTime<Utc>,
}

impl NewCandy {
    /// Build a new candy from submitted fields and a resolved image reference.
    pub fn new(fields: CandyFields, image: ImageRef, created_at: DateTime<Utc>) -> Self {
        Self {
            name: fields.name,
            kind: fields.kind,
            description: fields.description,
            image,
            created_at,
        }
    }
}

/// The user-editable fields of a candy, as submitted by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandyFields {
    pub name: String,
    pub kind: String,
    pub description: String,
}

impl CandyFields {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
        }
    }

    /// Trim surrounding whitespace and require a name.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation("Candy name is required".to_string()));
        }
        Ok(Self {
            name,
            kind: self.kind.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter Types
// ─────────────────────────────────────────────────────────────────────────────

/// Listing filter. An absent kind matches every candy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandyFilter {
    pub kind: Option<String>,
}

impl CandyFilter {
    /// Filter matching every candy.
    pub const fn all() -> Self {
        Self { kind: None }
    }

    /// Filter matching candies whose kind equals `kind` exactly.
    pub fn by_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
        }
    }

    /// Build a filter from a raw query value; blank means no filter.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(kind) if !kind.is_empty() => Self::by_kind(kind),
            _ => Self::all(),
        }
    }

    pub fn matches(&self, candy: &Candy) -> bool {
        self.kind.as_deref().is_none_or(|kind| candy.kind == kind)
    }
}
