//! CLI entry point for cms-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cms-blog")]
#[command(version)]
#[command(about = "An article site served from a headless CMS", long_about = None)]
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
    /// Start the site server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// List articles
    List {
        /// Page of the list to show
        #[arg(short, long, default_value = "1")]
        page: String,
    },

    /// Show a single article
    Show {
        /// Article id
        id: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "cms_blog=debug,info"
    } else {
        "cms_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server { port, ip, open } => {
            let site = cms_blog::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            cms_blog::server::start(&site, &ip, port, open).await?;
        }

        Commands::List { page } => {
            let site = cms_blog::Site::new(&base_dir)?;
            let page = cms_blog::views::parse_page(Some(&page));
            cms_blog::commands::list::run(&site, page, &mut std::io::stdout()).await?;
        }

        Commands::Show { id } => {
            let site = cms_blog::Site::new(&base_dir)?;
            cms_blog::commands::show::run(&site, &id, &mut std::io::stdout()).await?;
        }

        Commands::Version => {
            println!("cms-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
