//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ConsumerArgs, DailyArgs, PipelineArgs, WarehouseArgs};

/// Quantprint - multi-asset research blueprints
#[derive(Parser)]
#[command(name = "quantprint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build the consumer portfolio blueprint
    Consumer(ConsumerArgs),

    /// Build the warehouse documentation blueprint
    Warehouse(WarehouseArgs),

    /// Run the daily cross-asset pipeline
    Daily(DailyArgs),

    /// Run the weekly factor deep-dive pipeline
    Weekly(PipelineArgs),

    /// Run the monthly SAA review pipeline
    Monthly(PipelineArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the written path)
    Minimal,
}
