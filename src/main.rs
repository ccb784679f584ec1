//! CLI entry point for quire

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quire")]
#[command(version)]
#[command(about = "A static site generator for numbered, book-style documentation", long_about = None)]
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
    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Render a single page and print the composed output as JSON
    Render {
        /// Content route to render (e.g. /contents)
        path: String,
    },

    /// Clean the public folder
    Clean,

    /// List all documents in reading order
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "quire=debug,info"
    } else {
        "quire=info"
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

    let app = quire::Quire::new(&base_dir)?;

    match cli.command {
        Commands::Generate => {
            tracing::info!("Generating static files...");
            app.generate()?;
            println!("Generated successfully!");
        }

        Commands::Render { path } => {
            quire::commands::render::run(&app, &path)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            quire::commands::list::run(&app)?;
        }
    }

    Ok(())
}
