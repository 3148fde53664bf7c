// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::Time;

/// Command-line arguments for `simdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "simdag",
    version,
    about = "Simulate dependency-ordered steps on a pool of workers and report the total time.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the dependency list, one
    /// `Step X must be finished before step Y can begin.` per line.
    ///
    /// Use `-` to read from stdin.
    #[arg(long, short = 'i', value_name = "PATH", default_value = "input.txt")]
    pub input: PathBuf,

    /// Optional TOML config file with `[scheduler]` and `[durations]`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of workers (overrides the config file; default 5).
    #[arg(short = 'w', long, value_name = "N")]
    pub workers: Option<usize>,

    /// Fixed overhead added to every step (overrides the config file;
    /// default 60).
    #[arg(short = 'd', long, value_name = "N")]
    pub base_duration: Option<Time>,

    /// Print one line per dispatch before the total time.
    #[arg(long)]
    pub timeline: bool,

    /// Print the single-worker step order instead of the total time.
    #[arg(long, conflicts_with = "timeline")]
    pub order: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SIMDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the graph, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,
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
