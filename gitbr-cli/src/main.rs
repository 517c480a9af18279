//! gitbr CLI - Command line interface for gitbr
//!
//! Lists local git branches, one per line.

mod commands;

use clap::{Parser, Subcommand};
use gitbr_core::{Config, MarkerPolicy};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ListArgs;

/// gitbr: List local git branches
#[derive(Parser, Debug)]
#[command(name = "gitbr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to git executable (overrides config and env)
    #[arg(long, global = true, env = "GITBR_GIT_PATH")]
    git_path: Option<String>,

    /// How to treat branch markers: strip or keep (overrides config and env)
    #[arg(long, global = true, env = "GITBR_MARKER")]
    marker: Option<MarkerPolicy>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List local branches (the default when no command is given)
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show current configuration
    Config,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.git_path.clone(), cli.marker)?;

    if cli.verbose {
        tracing::info!(
            git_path = %config.git.git_path,
            timeout = ?config.git.timeout,
            marker = %config.git.marker,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::List(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Config) => {
            println!("gitbr Configuration");
            println!("===================");
            println!();
            println!("Git Settings:");
            println!("  git_path: {}", config.git.git_path);
            match config.git.timeout {
                Some(timeout) => println!("  timeout: {:?}", timeout),
                None => println!("  timeout: (none)"),
            }
            println!("  marker: {}", config.git.marker);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        Some(Commands::Version) => {
            println!("gitbr {}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            ListArgs::default().execute(cli.verbose, &config).await?;
        }
    }

    Ok(())
}
