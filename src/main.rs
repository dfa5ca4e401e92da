//! CLI entry point for inkpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version)]
#[command(about = "A content-collection toolkit for Markdown/MDX blogs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the posts collection against the schema
    #[command(alias = "c")]
    Check,

    /// List validated posts, newest first
    #[command(alias = "ls")]
    List,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Filename for the new post, without extension
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show the redirect table, or resolve one path
    Routes {
        /// Request path to resolve
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpress=debug,info"
    } else {
        "inkpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = inkpress::Site::new(&base_dir)?;

    match cli.command {
        Commands::Check => {
            inkpress::commands::check::run(&site)?;
        }

        Commands::List => {
            inkpress::commands::list::run(&site)?;
        }

        Commands::New { title, path } => {
            tracing::info!("Creating new post with title: {}", title);
            inkpress::commands::new::run(&site, &title, path.as_deref())?;
        }

        Commands::Routes { path } => {
            inkpress::commands::routes::run(&site, path.as_deref())?;
        }
    }

    Ok(())
}
