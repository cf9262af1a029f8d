//! Paths command handler.
//!
//! Displays the resolved paths in `key = value` format for diagnostics.

use anyhow::Result;
use candy_core::data_root;

use crate::bootstrap::CliConfig;

pub fn execute(config: &CliConfig) -> Result<()> {
    println!("data_root = {}", data_root()?.display());
    println!("database = {}", config.database_path.display());
    println!("uploads = {}", config.uploads_dir.display());
    Ok(())
}
