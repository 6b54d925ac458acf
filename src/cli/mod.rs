//! Command-line interface for api-env-config
//!
//! Provides `resolve`, `profiles` and `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod completions;
mod profiles;
mod resolve;

/// Resolve environment profiles into API test configuration
#[derive(Parser)]
#[command(name = "api-env-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the configuration for an environment
    Resolve(resolve::ResolveArgs),

    /// List the known environment profiles
    Profiles,

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A set RUST_LOG is used as-is; --verbose only picks the fallback level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
    });
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Resolve(args) => resolve::run(args),
        Commands::Profiles => profiles::run(),
        Commands::Completions(args) => completions::run(args),
    }
}
