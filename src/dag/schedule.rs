// src/dag/schedule.rs

//! Result types produced by the scheduler loop.

use crate::types::{TaskName, Time};

/// Record of a single dispatch decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub task: TaskName,
    pub worker: usize,
    pub start: Time,
    pub finish: Time,
}

/// Completed schedule: every dispatch in the order it was made, plus the
/// makespan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub(crate) dispatches: Vec<Dispatch>,
    pub(crate) makespan: Time,
    pub(crate) worker_count: usize,
}

impl Schedule {
    /// Total simulated time until the last worker finishes.
    pub fn makespan(&self) -> Time {
        self.makespan
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn dispatches(&self) -> &[Dispatch] {
        &self.dispatches
    }

    pub fn dispatch_of(&self, task: &str) -> Option<&Dispatch> {
        self.dispatches.iter().find(|d| d.task == task)
    }

    pub fn start_time_of(&self, task: &str) -> Option<Time> {
        self.dispatch_of(task).map(|d| d.start)
    }

    pub fn finish_time_of(&self, task: &str) -> Option<Time> {
        self.dispatch_of(task).map(|d| d.finish)
    }

    /// Task names in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.dispatches.iter().map(|d| d.task.as_str()).collect()
    }
}
