//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the composed `CandyService`.

use std::path::PathBuf;

use anyhow::Result;
use candy_core::{CandyService, DEFAULT_PAGE_SIZE, database_path, uploads_dir};
use candy_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded images.
    pub uploads_dir: PathBuf,
    /// Candies per listing page.
    pub page_size: u32,
}

impl CliConfig {
    /// Default paths, replaced by whichever overrides are given.
    pub fn with_overrides(database: Option<PathBuf>, uploads: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            database_path: match database {
                Some(path) => path,
                None => database_path()?,
            },
            uploads_dir: match uploads {
                Some(path) => path,
                None => uploads_dir()?,
            },
            page_size: DEFAULT_PAGE_SIZE,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Candy lifecycle service.
    pub candies: CandyService,
}

/// Open the database and image store and compose the candy service.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    tracing::debug!(
        database_path = %config.database_path.display(),
        uploads_dir = %config.uploads_dir.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let candies =
        CoreFactory::build_candy_service(pool, &config.uploads_dir, config.page_size).await?;

    Ok(CliContext { candies })
}
