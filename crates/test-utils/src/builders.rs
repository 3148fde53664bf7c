#![allow(dead_code)]

use std::collections::BTreeMap;

use simdag::config::SchedulerConfig;
use simdag::dag::TaskGraph;
use simdag::types::Time;

/// Builder for dependency lists, usable both as a [`TaskGraph`] and as
/// input text for the loader.
#[derive(Debug, Clone, Default)]
pub struct EdgeListBuilder {
    edges: Vec<(String, String)>,
    durations: BTreeMap<String, Time>,
}

impl EdgeListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `before` must finish before `after` can begin.
    pub fn edge(mut self, before: &str, after: &str) -> Self {
        self.edges.push((before.to_string(), after.to_string()));
        self
    }

    pub fn duration(mut self, task: &str, duration: Time) -> Self {
        self.durations.insert(task.to_string(), duration);
        self
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Input text in the `Step X must be finished before step Y can begin.`
    /// format, one edge per line.
    pub fn to_input(&self) -> String {
        self.edges
            .iter()
            .map(|(before, after)| {
                format!("Step {before} must be finished before step {after} can begin.\n")
            })
            .collect()
    }

    pub fn build_graph(&self) -> TaskGraph {
        let mut graph = TaskGraph::with_durations(self.durations.clone());
        for (before, after) in &self.edges {
            graph.add_dependency(before, after);
        }
        graph
    }
}

/// The worked example: C -> A, C -> F, A -> B, A -> D, B -> E, D -> E, F -> E.
pub fn reference_edges() -> EdgeListBuilder {
    EdgeListBuilder::new()
        .edge("C", "A")
        .edge("C", "F")
        .edge("A", "B")
        .edge("A", "D")
        .edge("B", "E")
        .edge("D", "E")
        .edge("F", "E")
}

/// Validated config; panics on an invalid worker count.
pub fn config(workers: usize, base_duration: Time) -> SchedulerConfig {
    SchedulerConfig::new(workers, base_duration).expect("valid scheduler config")
}
