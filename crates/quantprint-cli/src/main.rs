//! Quantprint CLI - research blueprints from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Consumer portfolio blueprint
//! quantprint consumer --as-of 2024-06-28
//!
//! # Warehouse documentation blueprint
//! quantprint warehouse --repo-root /path/to/repo
//!
//! # Research pipelines
//! quantprint daily --github-repo owner/name
//! quantprint weekly
//! quantprint --format json monthly --as-of 2024-06-30
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use quantprint_research::Cadence;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON and CSV output stay clean.
    let default_filter = if cli.quiet { "warn" } else { "info,quantprint=debug" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    tracing::debug!(?format, version = env!("CARGO_PKG_VERSION"), "Starting quantprint");

    match cli.command {
        Commands::Consumer(args) => commands::consumer::execute(args, format)?,
        Commands::Warehouse(args) => commands::warehouse::execute(args, format)?,
        Commands::Daily(args) => commands::research::execute_daily(args, format)?,
        Commands::Weekly(args) => commands::research::execute(Cadence::Weekly, args, format)?,
        Commands::Monthly(args) => commands::research::execute(Cadence::Monthly, args, format)?,
    }

    Ok(())
}
