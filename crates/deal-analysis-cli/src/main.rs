mod commands;
mod config;
mod input;
mod output;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::deal::{AnalyzeArgs, ProjectionArgs, PropertyArgs, SnapshotArgs};
use commands::format::FormatArgs;
use commands::mortgage::MortgageArgs;
use config::CliConfig;

/// Rental property deal analysis
#[derive(Parser)]
#[command(
    name = "dealx",
    version,
    about = "Rental property deal analysis",
    long_about = "A CLI for analysing rental property deals with decimal precision. \
                  Computes mortgage payments, investment ratios, a composite deal score, \
                  best/base/worst-case scenarios and multi-year cash-flow projections."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level or filter for stderr diagnostics (overrides DEALX_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis: metrics, scenarios, projections and warnings
    Analyze(AnalyzeArgs),
    /// Calculate every deal metric and the deal score
    Metrics(PropertyArgs),
    /// Best, base and worst case metrics
    Scenarios(PropertyArgs),
    /// Year-by-year cash flow and equity projection
    Projections(ProjectionArgs),
    /// Monthly mortgage payment (and PITI when tax/insurance given)
    Mortgage(MortgageArgs),
    /// Metrics stamped with an address and the current time, ready to store
    Snapshot(SnapshotArgs),
    /// Format a value the way reports display it
    Format(FormatArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".red().bold(), e);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    let config = CliConfig::load().unwrap_or_else(|e| fail(e));
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    if let Err(e) = telemetry::init(log_level) {
        fail(e);
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::deal::run_analyze(&config, args),
        Commands::Metrics(args) => commands::deal::run_metrics(args),
        Commands::Scenarios(args) => commands::deal::run_scenarios(args),
        Commands::Projections(args) => commands::deal::run_projections(&config, args),
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::Snapshot(args) => commands::deal::run_snapshot(args),
        Commands::Format(args) => commands::format::run_format(args),
        Commands::Version => {
            println!("dealx {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => fail(e),
    }
}
