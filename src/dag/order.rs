// src/dag/order.rs

//! Sequential step order, ignoring durations.

use crate::dag::frontier::{FrontierEntry, ReadinessFrontier};
use crate::dag::graph::TaskGraph;
use crate::errors::Result;
use crate::types::{TaskId, TaskName};

/// The order in which a single worker would take the steps if every step
/// finished instantly.
///
/// Every ready step is keyed at time zero, so the frontier degenerates to a
/// topological order that always picks the alphabetically first available
/// step. Fails with [`SimdagError::Stalled`](crate::errors::SimdagError::Stalled)
/// if a cycle keeps some steps from ever becoming ready.
pub fn sequential_order(graph: &TaskGraph) -> Result<Vec<TaskName>> {
    let mut graph = graph.clone();
    graph.reset_run_state();

    let mut frontier = ReadinessFrontier::new();
    for id in graph.all_tasks() {
        let task = graph.task(id);
        if task.is_ready() {
            frontier.push(instant_entry(&graph, id));
        }
    }

    let mut order = Vec::with_capacity(graph.len());
    while let Some(entry) = frontier.pop_next() {
        graph.mark_dispatched(entry.id, 0, 0, 0);
        for id in graph.notify_completed(entry.id, 0) {
            frontier.push(instant_entry(&graph, id));
        }
        order.push(entry.name);
    }
    graph.ensure_all_dispatched(order.len())?;
    Ok(order)
}

fn instant_entry(graph: &TaskGraph, id: TaskId) -> FrontierEntry {
    FrontierEntry {
        earliest_start: 0,
        name: graph.task(id).name.clone(),
        id,
    }
}
