//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `CandyService`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use candy_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else {
        "info,candy_core=info,candy_db=info,candy_axum=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::with_overrides(cli.database, cli.uploads_dir)?;

    match command {
        Commands::Paths => {
            handlers::paths::execute(&config)?;
        }
        Commands::Web {
            port,
            page_size,
            allow_origins,
        } => {
            handlers::web::execute(&config, port, page_size, allow_origins).await?;
        }
        Commands::List { page, kind } => {
            let ctx = bootstrap(&config).await?;
            handlers::list::execute(&ctx, page, kind.as_deref()).await?;
        }
        Commands::Add {
            name,
            kind,
            description,
            image,
        } => {
            let ctx = bootstrap(&config).await?;
            handlers::add::execute(&ctx, &name, &kind, &description, image.as_deref()).await?;
        }
        Commands::Remove { id } => {
            let ctx = bootstrap(&config).await?;
            handlers::remove::execute(&ctx, id).await?;
        }
    }

    Ok(())
}
