//! Pages outside the catalog itself.

use axum::extract::State;
use axum::response::Html;

use crate::error::{HttpError, HttpResultExt};
use crate::state::AppState;

/// Landing page linking to the catalog.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    Ok(Html(state.views.index().or_http("Error loading the home page")?))
}

/// Health check endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
