//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use candy_core::{CandyService, DEFAULT_PAGE_SIZE};
use candy_db::{CoreFactory, setup_database};

use crate::views::Views;

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Largest accepted request body (multipart uploads included).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded images.
    pub uploads_dir: PathBuf,
    /// Candies per listing page.
    pub page_size: u32,
    /// Request body limit in bytes.
    pub max_upload_bytes: usize,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Config for the given storage locations, with default port, page size,
    /// body limit and CORS.
    pub fn new(database_path: impl Into<PathBuf>, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: database_path.into(),
            uploads_dir: uploads_dir.into(),
            page_size: DEFAULT_PAGE_SIZE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors: CorsConfig::default(),
        }
    }

    /// Override the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the number of candies per listing page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Restrict CORS to the given origins. An empty list keeps the current setting.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds every initialized service the handlers need.
pub struct AxumContext {
    /// Candy lifecycle service.
    pub candies: Arc<CandyService>,
    /// Compiled page templates.
    pub views: Views,
    /// Directory served under `/uploads`.
    pub uploads_dir: PathBuf,
    /// Request body limit in bytes.
    pub max_upload_bytes: usize,
}

impl AxumContext {
    /// Assemble a context around an already-built service.
    pub fn new(candies: Arc<CandyService>, uploads_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            candies,
            views: Views::new()?,
            uploads_dir: uploads_dir.into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        })
    }

    #[must_use]
    pub const fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "candy.paths",
        database_path = %config.database_path.display(),
        uploads_dir = %config.uploads_dir.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let candies =
        CoreFactory::build_candy_service(pool, &config.uploads_dir, config.page_size).await?;

    Ok(AxumContext::new(Arc::new(candies), &config.uploads_dir)?
        .with_max_upload_bytes(config.max_upload_bytes))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Candy catalog listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
