//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the candy catalog.
#[derive(Parser)]
#[command(name = "candy")]
#[command(about = "Manage a candy catalog and serve it on the web")]
#[command(version)]
pub struct Cli {
    /// Override the SQLite database file
    #[arg(long = "database", global = true)]
    pub database: Option<PathBuf>,

    /// Override the uploaded images directory
    #[arg(long = "uploads-dir", global = true)]
    pub uploads_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
