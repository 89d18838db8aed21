//! CLI entry point for mdblog-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdblog-rs")]
#[command(version)]
#[command(about = "A markdown post repository for file-backed blogs", long_about = None)]
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
    /// List posts, newest first
    #[command(alias = "l")]
    List,

    /// Print every post id
    Ids,

    /// Render a single post to HTML
    Show {
        /// Id of the post, the source filename without extension
        id: String,
    },

    /// Parse every post and report failures
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdblog_rs=debug,info"
    } else {
        "mdblog_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let blog = mdblog_rs::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List => {
            mdblog_rs::commands::list::run(&blog)?;
        }

        Commands::Ids => {
            mdblog_rs::commands::ids::run(&blog)?;
        }

        Commands::Show { id } => {
            tracing::debug!("rendering post {}", id);
            mdblog_rs::commands::show::run(&blog, &id)?;
        }

        Commands::Check => {
            mdblog_rs::commands::check::run(&blog)?;
        }
    }

    Ok(())
}
