//! CLI entry point for mdxpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdxpress::content::sort_by_date_desc;
use mdxpress::Site;

#[derive(Parser)]
#[command(name = "mdxpress")]
#[command(version)]
#[command(about = "Content pipeline for an MDX blog", long_about = None)]
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
    /// Resolve and transform one content item, printed as JSON
    Render {
        /// Content category (e.g. blog, snippets)
        category: String,

        /// Slug of the content item; omit for the category-level
        /// singleton document
        slug: Option<String>,
    },

    /// List metadata headers for every file in a category
    List {
        /// Content category to list
        category: String,
    },

    /// Emit sitemap XML for all categories
    Sitemap,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdxpress=debug,info"
    } else {
        "mdxpress=info"
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
        Commands::Render { category, slug } => {
            let site = Site::new(&base_dir)?;
            tracing::debug!("rendering {}/{:?}", category, slug);

            match site.get_content(&category, slug.as_deref()).await {
                Ok(item) => {
                    println!("{}", serde_json::to_string_pretty(&item)?);
                }
                Err(e) if e.is_not_found() => {
                    eprintln!("not found: {}", e);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::List { category } => {
            let site = Site::new(&base_dir)?;

            match site.get_listing(&category).await {
                Ok(mut listing) => {
                    sort_by_date_desc(&mut listing);
                    println!("{}", serde_json::to_string_pretty(&listing)?);
                }
                Err(e) if e.is_not_found() => {
                    eprintln!("not found: {}", e);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Sitemap => {
            let site = Site::new(&base_dir)?;

            match site.sitemap_xml().await {
                Ok(xml) => print!("{}", xml),
                Err(e) if e.is_not_found() => {
                    eprintln!("not found: {}", e);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Version => {
            println!("mdxpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
