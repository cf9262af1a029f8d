//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `candy` - Catalog item types (`Candy`, `NewCandy`, `CandyFields`, `CandyFilter`)
//! - `image` - Image references and upload vetting
//! - `pagination` - Skip/limit page arithmetic

mod candy;
mod image;
mod pagination;

pub use candy::{Candy, CandyFields, CandyFilter, NewCandy};
pub use image::{ALLOWED_IMAGE_TYPES, DEFAULT_IMAGE, ImageRef, ImageUpload, UploadError};
pub use pagination::{CandyPage, DEFAULT_PAGE_SIZE, PageRequest, total_pages};
