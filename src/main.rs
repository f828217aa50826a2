//! CLI entry point for postview-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postview-rs")]
#[command(version)]
#[command(about = "A headless post feed renderer for blogging clients", long_about = None)]
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
    /// Render the post feed page
    Feed {
        /// Name of the logged-in viewer
        #[arg(short, long, default_value = "anonymous")]
        viewer: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Render a single post page
    Post {
        /// Post identifier
        id: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List loaded posts
    List,

    /// Start a local preview server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Name of the logged-in viewer
        #[arg(short, long, default_value = "anonymous")]
        viewer: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postview_rs=debug,info"
    } else {
        "postview_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Feed { viewer, out } => {
            let app = postview_rs::Postview::new(&base_dir)?;
            let page = app.feed(&viewer)?;
            write_output(page, out)?;
        }

        Commands::Post { id, out } => {
            let app = postview_rs::Postview::new(&base_dir)?;
            let page = app.post(&id)?;
            write_output(page, out)?;
        }

        Commands::List => {
            let app = postview_rs::Postview::new(&base_dir)?;
            app.list()?;
        }

        Commands::Serve { port, ip, viewer } => {
            let app = postview_rs::Postview::new(&base_dir)?;
            let store = app.store()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            postview_rs::server::start(store, app.config.clone(), &viewer, &ip, port).await?;
        }

        Commands::Version => {
            println!("postview-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Write a rendered page to a file or stdout
fn write_output(page: String, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(&path, page)?;
            println!("Wrote {:?}", path);
        }
        None => print!("{}", page),
    }
    Ok(())
}
