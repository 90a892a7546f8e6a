//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::{commands, server, Folio};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Tag index and page generator for a personal blog", long_about = None)]
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
    /// List the tags of a category, most used first
    Tags {
        /// Category to aggregate (defaults to the configured one)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the items carrying a tag
    Tag {
        /// Tag slug, e.g. `machine-learning`
        slug: String,

        /// Category to search (defaults to the configured one)
        #[arg(short = 'C', long)]
        category: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List the work stack
    Stack,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Tags { category, json } => {
            let folio = Folio::new(&base_dir)?;
            let category = category.unwrap_or_else(|| folio.config.default_category.clone());
            commands::list::tags(&folio.store(), &category, json, &mut io::stdout())?;
        }

        Commands::Tag { slug, category } => {
            let folio = Folio::new(&base_dir)?;
            let category = category.unwrap_or_else(|| folio.config.default_category.clone());
            commands::list::tag(&folio.store(), &category, &slug, &mut io::stdout())?;
        }

        Commands::Generate { watch } => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");

            folio.generate()?;
            println!("Generated successfully!");

            if watch {
                tokio::task::spawn_blocking(move || commands::generate::watch(&folio))
                    .await??;
            }
        }

        Commands::Server { port, ip, r#static } => {
            let folio = Folio::new(&base_dir)?;

            tracing::info!("Generating static files...");
            if let Err(e) = folio.generate() {
                tracing::error!("Generation failed: {:#}", e);
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            server::start(&folio, &ip, port, !r#static).await?;
        }

        Commands::Clean => {
            let folio = Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Stack => {
            commands::list::stack(&mut io::stdout())?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
