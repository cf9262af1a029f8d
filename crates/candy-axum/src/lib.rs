//! Axum web adapter for the candy catalog.
//!
//! Serves the server-rendered catalog pages under `/candies`, the uploaded
//! images under `/uploads`, a landing page at `/` and `/health`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Exercised by the integration tests under tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::{HttpError, HttpResultExt};
pub use routes::create_router;
pub use state::AppState;
pub use views::Views;
