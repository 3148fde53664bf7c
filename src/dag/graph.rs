// src/dag/graph.rs

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::dag::task_info::{RunState, TaskInfo, TaskRunState};
use crate::errors::{Result, SimdagError};
use crate::types::{TaskId, TaskName, Time, intrinsic_duration};

/// In-memory task graph with "must finish before" edges.
///
/// Tasks live in an arena (`Vec<TaskInfo>`) and refer to each other by
/// [`TaskId`], so prerequisites and dependents can point both ways without
/// shared ownership. The graph also owns each task's lifecycle state for the
/// current run.
///
/// Acyclicity is assumed here; the input loader checks it before building.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<TaskInfo>,
    index: HashMap<TaskName, TaskId>,
    /// Explicit per-task durations that take precedence over the intrinsic
    /// duration derived from the identifier.
    durations: BTreeMap<TaskName, Time>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph whose tasks take their `duration_base` from `durations` when an
    /// entry exists.
    pub fn with_durations(durations: BTreeMap<TaskName, Time>) -> Self {
        Self {
            durations,
            ..Self::default()
        }
    }

    /// Build a graph from an ordered list of `(before, after)` edges.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (before, after) in edges {
            graph.add_dependency(before.as_ref(), after.as_ref());
        }
        graph
    }

    /// Register an isolated task (or return the existing one).
    pub fn add_task(&mut self, name: &str) -> TaskId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = TaskId(self.tasks.len());
        // Provisional until `resolve_durations`, which rejects unresolved tasks.
        let duration = self.lookup_duration(name).unwrap_or_default();

        self.tasks.push(TaskInfo::new(id, name.to_string(), duration));
        self.index.insert(name.to_string(), id);
        debug!(task = %name, %id, duration, "registered task");
        id
    }

    /// Record that `before` must finish before `after` may start.
    ///
    /// Both tasks are created on first reference. Duplicate edges are not
    /// filtered here; callers must not issue them.
    pub fn add_dependency(&mut self, before: &str, after: &str) {
        let before_id = self.add_task(before);
        let after_id = self.add_task(after);

        self.tasks[before_id.0].dependents.push(after_id);

        let task = &mut self.tasks[after_id.0];
        task.prerequisites.push(before_id);
        task.state = match task.state {
            RunState::Ready { .. } => RunState::Blocked { pending: 1 },
            RunState::Blocked { pending } => RunState::Blocked {
                pending: pending + 1,
            },
            dispatched @ RunState::Dispatched { .. } => {
                warn!(task = %after, "edge added after dispatch; state left unchanged");
                dispatched
            }
        };
    }

    /// Apply `overrides` on top of the graph's own durations and recompute
    /// every task's `duration_base`.
    ///
    /// Fails with [`SimdagError::ConfigError`] if a task has neither an
    /// explicit duration nor one derived from its identifier.
    pub fn resolve_durations(&mut self, overrides: &BTreeMap<TaskName, Time>) -> Result<()> {
        self.durations
            .extend(overrides.iter().map(|(name, &d)| (name.clone(), d)));

        for i in 0..self.tasks.len() {
            let name = &self.tasks[i].name;
            let duration = self.lookup_duration(name).ok_or_else(|| {
                SimdagError::ConfigError(format!(
                    "cannot derive a duration for step '{name}'; set it under [durations]"
                ))
            })?;
            self.tasks[i].duration_base = duration;
        }
        Ok(())
    }

    /// All task ids, in order of first reference.
    pub fn all_tasks(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.iter().map(|t| t.id)
    }

    /// Task names, in order of first reference.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn id_of(&self, name: &str) -> Option<TaskId> {
        self.index.get(name).copied()
    }

    /// Task by id.
    ///
    /// Panics if `id` did not come from this graph.
    pub fn task(&self, id: TaskId) -> &TaskInfo {
        &self.tasks[id.0]
    }

    pub fn task_by_name(&self, name: &str) -> Option<&TaskInfo> {
        self.id_of(name).map(|id| self.task(id))
    }

    /// Names of the immediate prerequisites of `name`.
    pub fn prerequisites_of(&self, name: &str) -> Vec<&str> {
        self.task_by_name(name)
            .map(|t| self.names_for(&t.prerequisites))
            .unwrap_or_default()
    }

    /// Names of the immediate dependents of `name`.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.task_by_name(name)
            .map(|t| self.names_for(&t.dependents))
            .unwrap_or_default()
    }

    pub fn run_state_of(&self, name: &str) -> Option<TaskRunState> {
        self.task_by_name(name).map(TaskInfo::run_state)
    }

    /// Fix the worker, start and finish time of a ready task.
    pub fn mark_dispatched(&mut self, id: TaskId, worker: usize, start: Time, finish: Time) {
        let task = &mut self.tasks[id.0];
        let earliest_start = match task.state {
            RunState::Ready { earliest_start } => earliest_start,
            other => {
                warn!(task = %task.name, state = ?other, "dispatching a task that is not ready");
                start
            }
        };
        task.state = RunState::Dispatched {
            worker,
            earliest_start,
            start,
            finish,
        };
    }

    /// Propagate the completion of `id` (at `finish_time`) to its dependents.
    ///
    /// Each dependent's pending count is decremented; when it reaches zero the
    /// dependent's earliest start is computed by scanning the finish times of
    /// all of its prerequisites. Returns the tasks that became ready.
    pub fn notify_completed(&mut self, id: TaskId, finish_time: Time) -> Vec<TaskId> {
        let mut newly_ready = Vec::new();
        let dependents = self.tasks[id.0].dependents.clone();

        for dep_id in dependents {
            let pending = match self.tasks[dep_id.0].state {
                RunState::Blocked { pending } => pending.saturating_sub(1),
                _ => continue,
            };

            if pending > 0 {
                self.tasks[dep_id.0].state = RunState::Blocked { pending };
                continue;
            }

            let earliest_start = self.latest_prerequisite_finish(dep_id);
            self.tasks[dep_id.0].state = RunState::Ready { earliest_start };
            debug!(
                task = %self.tasks[dep_id.0].name,
                completed = %self.tasks[id.0].name,
                finish_time,
                earliest_start,
                "prerequisites satisfied; task ready"
            );
            newly_ready.push(dep_id);
        }

        newly_ready
    }

    /// Restore every task to its initial lifecycle state so the graph can be
    /// scheduled again.
    pub fn reset_run_state(&mut self) {
        for task in &mut self.tasks {
            task.state = if task.prerequisites.is_empty() {
                RunState::Ready { earliest_start: 0 }
            } else {
                RunState::Blocked {
                    pending: task.prerequisites.len(),
                }
            };
        }
    }

    /// Fail with [`SimdagError::Stalled`] unless all tasks were dispatched.
    ///
    /// Only a cycle can leave tasks undispatched once the frontier is empty.
    pub(crate) fn ensure_all_dispatched(&self, dispatched: usize) -> Result<()> {
        let total = self.len();
        if dispatched >= total {
            return Ok(());
        }
        let blocked = self
            .tasks
            .iter()
            .filter(|t| t.run_state() != TaskRunState::Dispatched)
            .map(|t| t.name.clone())
            .collect();
        Err(SimdagError::Stalled {
            dispatched,
            total,
            blocked,
        })
    }

    fn lookup_duration(&self, name: &str) -> Option<Time> {
        self.durations
            .get(name)
            .copied()
            .or_else(|| intrinsic_duration(name))
    }

    fn latest_prerequisite_finish(&self, id: TaskId) -> Time {
        self.tasks[id.0]
            .prerequisites
            .iter()
            .filter_map(|p| self.tasks[p.0].finish_time())
            .max()
            .unwrap_or(0)
    }

    fn names_for(&self, ids: &[TaskId]) -> Vec<&str> {
        ids.iter().map(|id| self.tasks[id.0].name.as_str()).collect()
    }
}
