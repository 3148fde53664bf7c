// src/dag/frontier.rs

//! Readiness frontier: ready tasks waiting for a worker.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::dag::task_info::TaskInfo;
use crate::types::{TaskId, TaskName, Time};

/// A ready task as seen by the frontier.
///
/// Field order is the dispatch order: the task that became available first
/// wins, and equal availability falls back to ascending identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry {
    pub earliest_start: Time,
    pub name: TaskName,
    pub id: TaskId,
}

impl FrontierEntry {
    /// Entry for a ready task; `None` if the task is still blocked.
    pub fn for_task(task: &TaskInfo) -> Option<Self> {
        if !task.is_ready() {
            return None;
        }
        let earliest_start = task.earliest_start()?;
        Some(Self {
            earliest_start,
            name: task.name.clone(),
            id: task.id,
        })
    }
}

/// Min-heap of ready, undispatched tasks.
#[derive(Debug, Clone, Default)]
pub struct ReadinessFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl ReadinessFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(Reverse(entry));
    }

    /// Remove the next task to dispatch, or `None` once the frontier is empty.
    pub fn pop_next(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Names in dispatch order, for diagnostics.
    pub fn peek_names(&self) -> Vec<TaskName> {
        let mut entries: Vec<&FrontierEntry> = self.heap.iter().map(|Reverse(e)| e).collect();
        entries.sort();
        entries.into_iter().map(|e| e.name.clone()).collect()
    }
}
