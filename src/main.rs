//! CLI entry point for orbit-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "orbit-rs")]
#[command(version = "0.1.0")]
#[command(about = "A static blog generator that renders posts from a headless content API", long_about = None)]
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
    /// Fetch posts from the content API and generate static files
    #[command(alias = "g")]
    Generate,

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Skip regenerating the site before serving
        #[arg(long)]
        no_generate: bool,
    },

    /// List posts published in the content API
    List,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "orbit_rs=debug,info"
    } else {
        "orbit_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let orbit = orbit_rs::Orbit::new(&base_dir)?;
            tracing::info!("Generating static files...");
            orbit.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Server {
            port,
            ip,
            no_generate,
        } => {
            let orbit = orbit_rs::Orbit::new(&base_dir)?;

            if !no_generate {
                tracing::info!("Generating static files...");
                orbit.generate().await?;
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            orbit_rs::server::start(&orbit, &ip, port).await?;
        }

        Commands::List => {
            let orbit = orbit_rs::Orbit::new(&base_dir)?;
            orbit_rs::commands::list::run(&orbit).await?;
        }

        Commands::Clean => {
            let orbit = orbit_rs::Orbit::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            orbit.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("orbit-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
