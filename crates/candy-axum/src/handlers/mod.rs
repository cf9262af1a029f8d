//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `CandyService` and render
//! the result with `Views`.

pub mod candies;
pub mod intake;
pub mod pages;
