//! Available commands for the CLI tool.

use std::path::PathBuf;

use candy_axum::bootstrap::DEFAULT_PORT;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for the database and uploads directory
    Paths,

    /// Start the web catalog
    Web {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Candies per listing page
        #[arg(long, default_value_t = candy_core::DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// Restrict CORS to these origins (repeatable); all origins otherwise
        #[arg(long = "allow-origin")]
        allow_origins: Vec<String>,
    },

    /// List one page of the catalog
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Only show candies of this kind
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Add a candy to the catalog
    Add {
        /// Display name
        name: String,
        /// Kind used for filtering (e.g. "chocolate")
        #[arg(short, long, default_value = "")]
        kind: String,
        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Image file (jpg, jpeg, png or gif)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Remove a candy and its image file
    Remove {
        /// ID of the candy to remove
        id: i64,
    },
}
