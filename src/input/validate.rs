// src/input/validate.rs

use std::collections::{BTreeMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::errors::{Result, SimdagError};
use crate::input::parse::Edge;
use crate::types::{TaskName, Time, intrinsic_duration};

/// Check a parsed edge list before it is turned into a task graph.
///
/// Returns the edges with duplicates removed (first occurrence wins). Fails
/// on self edges, identifiers without a duration, and cycles.
pub fn validate_edges(edges: Vec<Edge>, durations: &BTreeMap<TaskName, Time>) -> Result<Vec<Edge>> {
    let edges = dedup_edges(edges);
    validate_no_self_edges(&edges)?;
    validate_durations(&edges, durations)?;
    validate_dag(&edges)?;
    Ok(edges)
}

fn dedup_edges(edges: Vec<Edge>) -> Vec<Edge> {
    let mut seen: HashSet<(TaskName, TaskName)> = HashSet::new();
    edges
        .into_iter()
        .filter(|edge| {
            let fresh = seen.insert((edge.before.clone(), edge.after.clone()));
            if !fresh {
                warn!(
                    before = %edge.before,
                    after = %edge.after,
                    line = edge.line,
                    "duplicate dependency; ignoring"
                );
            }
            fresh
        })
        .collect()
}

fn validate_no_self_edges(edges: &[Edge]) -> Result<()> {
    if let Some(edge) = edges.iter().find(|e| e.before == e.after) {
        return Err(SimdagError::ConfigError(format!(
            "step '{}' cannot depend on itself (line {})",
            edge.before, edge.line
        )));
    }
    Ok(())
}

fn validate_durations(edges: &[Edge], durations: &BTreeMap<TaskName, Time>) -> Result<()> {
    let missing = edges
        .iter()
        .flat_map(|e| [&e.before, &e.after])
        .find(|name| !durations.contains_key(name.as_str()) && intrinsic_duration(name).is_none());

    if let Some(name) = missing {
        return Err(SimdagError::ConfigError(format!(
            "cannot derive a duration for step '{}'; set it under [durations]",
            name
        )));
    }
    Ok(())
}

fn validate_dag(edges: &[Edge]) -> Result<()> {
    // Edge direction: before -> after.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for edge in edges {
        graph.add_edge(edge.before.as_str(), edge.after.as_str(), ());
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(SimdagError::DagCycle(format!(
            "cycle detected in step graph involving step '{}'",
            cycle.node_id()
        ))),
    }
}
