// src/report.rs

//! Plain-text output written to stdout by the CLI.

use std::io::{self, Write};

use crate::config::SchedulerConfig;
use crate::dag::{Schedule, TaskGraph};
use crate::errors::Result;
use crate::types::TaskName;

pub fn write_makespan(out: &mut impl Write, schedule: &Schedule) -> io::Result<()> {
    writeln!(out, "{}", schedule.makespan())
}

/// One line per dispatch, in dispatch order.
pub fn write_timeline(out: &mut impl Write, schedule: &Schedule) -> io::Result<()> {
    for d in schedule.dispatches() {
        writeln!(
            out,
            "worker {} runs {} from {} to {}",
            d.worker, d.task, d.start, d.finish
        )?;
    }
    Ok(())
}

/// Single-character steps are concatenated (`CABDFE`); longer identifiers
/// are separated by spaces.
pub fn format_order(order: &[TaskName]) -> String {
    if order.iter().all(|name| name.chars().count() == 1) {
        order.concat()
    } else {
        order.join(" ")
    }
}

pub fn write_order(out: &mut impl Write, order: &[TaskName]) -> io::Result<()> {
    writeln!(out, "{}", format_order(order))
}

/// Dry-run listing: effective config, then every step with its duration
/// and prerequisites. Fails with `TimeOverflow` if a step's duration does not
/// fit on the clock.
pub fn write_dry_run(
    out: &mut impl Write,
    graph: &TaskGraph,
    config: &SchedulerConfig,
) -> Result<()> {
    writeln!(out, "simdag dry-run")?;
    writeln!(out, "  workers = {}", config.worker_count())?;
    writeln!(out, "  base_duration = {}", config.base_duration())?;
    writeln!(out)?;

    let mut names: Vec<&str> = graph.names().collect();
    names.sort_unstable();

    writeln!(out, "steps ({}):", names.len())?;
    for name in names {
        let Some(task) = graph.task_by_name(name) else {
            continue;
        };
        let duration = task.total_duration(config.base_duration())?;
        writeln!(out, "  - {name}")?;
        writeln!(out, "      duration: {duration}")?;
        let prereqs = graph.prerequisites_of(name);
        if !prereqs.is_empty() {
            writeln!(out, "      after: {:?}", prereqs)?;
        }
    }
    Ok(())
}
