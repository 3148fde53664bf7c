// src/input/mod.rs

//! Reading the dependency list and turning it into a [`TaskGraph`].
//!
//! - [`parse`] turns text lines into [`Edge`]s.
//! - [`validate`] rejects self edges, unknown durations and cycles, and drops
//!   duplicate edges.

pub mod parse;
pub mod validate;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::SchedulerConfig;
use crate::dag::TaskGraph;
use crate::errors::Result;

pub use parse::{Edge, EdgeParser, parse_edges};
pub use validate::validate_edges;

/// Read the raw input text. A path of `-` reads from stdin.
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Parse and validate `text`, then build the task graph.
pub fn graph_from_str(text: &str, config: &SchedulerConfig) -> Result<TaskGraph> {
    let edges = parse_edges(text)?;
    let edges = validate_edges(edges, config.durations())?;

    let mut graph = TaskGraph::with_durations(config.durations().clone());
    for edge in &edges {
        graph.add_dependency(&edge.before, &edge.after);
    }

    debug!(edges = edges.len(), tasks = graph.len(), "built task graph");
    Ok(graph)
}

/// Read `path` and build its task graph.
pub fn load_graph(path: impl AsRef<Path>, config: &SchedulerConfig) -> Result<TaskGraph> {
    let text = read_input(path)?;
    graph_from_str(&text, config)
}
