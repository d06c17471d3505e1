//! CLI entry point for winnow-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "winnow-site")]
#[command(version)]
#[command(about = "The Winnow Management Solutions website", long_about = None)]
struct Cli {
    /// Path to the site configuration file
    #[arg(short, long, global = true, default_value = "_config.yml")]
    config: PathBuf,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List one page of news posts from the content API
    List {
        /// Page to list, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = if cli.debug {
        "winnow_site=debug,info"
    } else {
        "winnow_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, ip } => {
            let site = winnow_site::Site::load(&cli.config)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            site.serve(&ip, port).await?;
        }

        Commands::List { page } => {
            let site = winnow_site::Site::load(&cli.config)?;
            site.list(page).await?;
        }

        Commands::Version => {
            println!("winnow-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
