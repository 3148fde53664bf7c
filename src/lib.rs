// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod report;
pub mod types;

use std::io::Write;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{SchedulerConfig, load_or_default};
use crate::dag::{Schedule, Scheduler, TaskGraph, sequential_order};
use crate::errors::Result;
use crate::input::load_graph;

/// High-level entry point used by `main.rs`; writes the report to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(&args, &mut out)
}

/// Same as [`run`] but writes the report to `out`.
///
/// This wires together:
/// - config loading (file, then CLI overrides)
/// - input loading and validation
/// - the scheduler loop or the sequential order
/// - report output
pub fn run_with_writer(args: &CliArgs, out: &mut impl Write) -> Result<()> {
    let config = effective_config(args)?;
    let graph = load_graph(&args.input, &config)?;
    info!(
        input = %args.input.display(),
        tasks = graph.len(),
        workers = config.worker_count(),
        base_duration = config.base_duration(),
        "loaded step graph"
    );

    if args.dry_run {
        report::write_dry_run(out, &graph, &config)?;
        debug!("dry-run complete (no scheduling)");
        return Ok(());
    }

    if args.order {
        report::write_order(out, &sequential_order(&graph)?)?;
        return Ok(());
    }

    let schedule = simulate(graph, &config)?;
    if args.timeline {
        report::write_timeline(out, &schedule)?;
    }
    report::write_makespan(out, &schedule)?;
    Ok(())
}

/// Schedule `graph` to completion under `config`.
pub fn simulate(graph: TaskGraph, config: &SchedulerConfig) -> Result<Schedule> {
    Scheduler::new(graph, config)?.run()
}

/// Config file (or defaults) with the CLI's `-w` / `-d` applied on top.
pub fn effective_config(args: &CliArgs) -> Result<SchedulerConfig> {
    load_or_default(args.config.as_deref())?.with_overrides(args.workers, args.base_duration)
}
