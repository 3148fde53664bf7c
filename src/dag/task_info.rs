// src/dag/task_info.rs

//! Task metadata and per-run lifecycle state.

use crate::errors::{Result, SimdagError};
use crate::types::{TaskId, TaskName, Time};

/// Lifecycle of a task within a single scheduling run (internal).
///
/// Transitions are strictly `Blocked -> Ready -> Dispatched`; tasks without
/// prerequisites start out `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting on `pending` prerequisites.
    Blocked { pending: usize },
    /// All prerequisites finished; may not start before `earliest_start`.
    Ready { earliest_start: Time },
    /// Assigned to a worker with a fixed start and finish time.
    Dispatched {
        worker: usize,
        earliest_start: Time,
        start: Time,
        finish: Time,
    },
}

/// Public, read-only view of a task's lifecycle state.
///
/// Exposed for tests and diagnostics without leaking the internal
/// `RunState` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRunState {
    Blocked,
    Ready,
    Dispatched,
}

impl From<RunState> for TaskRunState {
    fn from(state: RunState) -> Self {
        match state {
            RunState::Blocked { .. } => TaskRunState::Blocked,
            RunState::Ready { .. } => TaskRunState::Ready,
            RunState::Dispatched { .. } => TaskRunState::Dispatched,
        }
    }
}

/// Static task information plus its lifecycle state for the current run.
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub id: TaskId,
    pub name: TaskName,
    /// Cost intrinsic to the task, excluding the configured base duration.
    pub duration_base: Time,
    /// Tasks that must finish before this one can start.
    pub prerequisites: Vec<TaskId>,
    /// Tasks that list this one as a prerequisite.
    pub dependents: Vec<TaskId>,

    pub(crate) state: RunState,
}

impl TaskInfo {
    pub(crate) fn new(id: TaskId, name: TaskName, duration_base: Time) -> Self {
        Self {
            id,
            name,
            duration_base,
            prerequisites: Vec::new(),
            dependents: Vec::new(),
            state: RunState::Ready { earliest_start: 0 },
        }
    }

    /// Time this task occupies a worker: `base_duration + duration_base`.
    pub fn total_duration(&self, base_duration: Time) -> Result<Time> {
        base_duration
            .checked_add(self.duration_base)
            .ok_or_else(|| SimdagError::TimeOverflow {
                task: self.name.clone(),
            })
    }

    pub fn run_state(&self) -> TaskRunState {
        self.state.into()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, RunState::Ready { .. })
    }

    /// Number of prerequisites that have not finished yet.
    pub fn pending_prerequisite_count(&self) -> usize {
        match self.state {
            RunState::Blocked { pending } => pending,
            RunState::Ready { .. } | RunState::Dispatched { .. } => 0,
        }
    }

    /// Earliest time this task may start.
    ///
    /// `None` while prerequisites are still pending.
    pub fn earliest_start(&self) -> Option<Time> {
        match self.state {
            RunState::Blocked { .. } => None,
            RunState::Ready { earliest_start } => Some(earliest_start),
            RunState::Dispatched { earliest_start, .. } => Some(earliest_start),
        }
    }

    pub fn start_time(&self) -> Option<Time> {
        match self.state {
            RunState::Dispatched { start, .. } => Some(start),
            _ => None,
        }
    }

    pub fn finish_time(&self) -> Option<Time> {
        match self.state {
            RunState::Dispatched { finish, .. } => Some(finish),
            _ => None,
        }
    }

    pub fn worker(&self) -> Option<usize> {
        match self.state {
            RunState::Dispatched { worker, .. } => Some(worker),
            _ => None,
        }
    }
}
