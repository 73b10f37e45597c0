// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `cookdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cookdag",
    version,
    about = "Order recipe steps by dependency and predict when each one starts.",
    long_about = None
)]
pub struct CliArgs {
    /// Recipe file(s) to plan (TOML, or JSON by `.json` extension).
    ///
    /// May be given several times; recipes are planned concurrently and
    /// printed in the order given. Default: `Recipe.toml`.
    #[arg(long = "recipe", value_name = "PATH")]
    pub recipes: Vec<String>,

    /// Number of partial-attention slots (e.g. burners).
    ///
    /// Overrides `[config].partial_slots` from each recipe file.
    #[arg(long, value_name = "N")]
    pub partial_slots: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COOKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate and print the dependency order, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// How planned recipes are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per step in step-number order.
    Table,
    /// Steps sorted by predicted start time.
    Timeline,
    /// The full schedule as JSON.
    Json,
    /// Persistence rows with initial statuses, as JSON.
    Records,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
