//! drawkit CLI - turn a folder of SVG illustrations into a React component registry.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use drawkit_registry::{PackageManager, DEFAULT_RESULT_LIMIT};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use commands::convert::ConvertOptions;

#[derive(Parser)]
#[command(name = "drawkit")]
#[command(about = "Convert SVG illustrations into a React component registry")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to drawkit.toml config file
    #[arg(short, long, default_value = "drawkit.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default drawkit.toml in the current project
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert every SVG in the source directory and write the registry
    Convert {
        /// Source directory (defaults to config or "svgs")
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory for generated components
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Convert files one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Search illustrations in the generated registry
    Search {
        /// Text matched against names and titles
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,

        /// Manifest to search (defaults to config or "registry.json")
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Print the install command for an illustration
    Add {
        /// Registry item name
        name: String,

        /// Package manager used in the command
        #[arg(short, long)]
        package_manager: Option<PackageManager>,

        /// Base URL the registry is served from
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Convert {
            source,
            output,
            sequential,
        } => {
            let config = config::load_config(&cli.config)?;
            commands::convert::run(
                &config,
                ConvertOptions {
                    source,
                    output,
                    sequential,
                },
            )?;
        }
        Commands::Search {
            query,
            limit,
            manifest,
        } => {
            let config = config::load_config(&cli.config)?;
            let manifest =
                manifest.unwrap_or_else(|| PathBuf::from(&config.registry.manifest));
            commands::search::run(&manifest, &query, limit)?;
        }
        Commands::Add {
            name,
            package_manager,
            base_url,
        } => {
            let config = config::load_config(&cli.config)?;
            let base_url = base_url.unwrap_or(config.install.base_url);
            let package_manager = package_manager.unwrap_or(config.install.package_manager);
            commands::add::run(&name, &base_url, package_manager)?;
        }
    }

    Ok(())
}
