//! Route definitions and router construction.
//!
//! # Path Parameter Syntax
//! Axum 0.8 uses brace syntax for path parameters: `{id}`

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Catalog routes, mounted under `/candies`.
///
/// `POST /candies/{id}` is the form-friendly entry point for update and
/// delete, selected by the `_method` query parameter.
pub(crate) fn candy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/candies",
            get(handlers::candies::list).post(handlers::candies::create),
        )
        .route("/candies/admin", get(handlers::candies::admin))
        .route("/candies/new", get(handlers::candies::new_form))
        .route("/candies/{id}/edit", get(handlers::candies::edit_form))
        .route(
            "/candies/{id}",
            put(handlers::candies::update)
                .delete(handlers::candies::remove)
                .post(handlers::candies::method_override),
        )
}

/// Create the main Axum router: pages, catalog, uploaded images and `/health`.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let uploads = ServeDir::new(&ctx.uploads_dir);
    let body_limit = DefaultBodyLimit::max(ctx.max_upload_bytes);
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/health", get(handlers::pages::health_check))
        .merge(candy_routes())
        .nest_service("/uploads", uploads)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
        .with_state(state)
}
