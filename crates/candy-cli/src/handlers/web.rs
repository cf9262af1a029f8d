//! Web command handler.

use anyhow::Result;
use candy_axum::{ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Start the web catalog and serve until interrupted.
pub async fn execute(
    config: &CliConfig,
    port: u16,
    page_size: u32,
    allow_origins: Vec<String>,
) -> Result<()> {
    let server = server_config(config, port, page_size, allow_origins);

    println!();
    println!("  Candy catalog starting...");
    println!();
    println!("  Local:   http://localhost:{port}/candies");
    println!("  Uploads: {}", server.uploads_dir.display());
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(server).await
}

fn server_config(
    config: &CliConfig,
    port: u16,
    page_size: u32,
    allow_origins: Vec<String>,
) -> ServerConfig {
    ServerConfig::new(config.database_path.clone(), config.uploads_dir.clone())
        .with_port(port)
        .with_page_size(page_size)
        .with_allowed_origins(allow_origins)
}
