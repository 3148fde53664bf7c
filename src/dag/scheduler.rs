// src/dag/scheduler.rs

use tracing::{debug, info, trace};

use crate::config::SchedulerConfig;
use crate::dag::frontier::{FrontierEntry, ReadinessFrontier};
use crate::dag::graph::TaskGraph;
use crate::dag::schedule::{Dispatch, Schedule};
use crate::dag::task_info::TaskRunState;
use crate::dag::workers::WorkerPool;
use crate::errors::{Result, SimdagError};
use crate::types::{TaskName, Time};

/// Scheduler holds the task graph plus the frontier and worker pool for a
/// single simulated run.
///
/// It is responsible for:
/// - seeding the frontier with tasks that have no prerequisites
/// - pairing the next ready task with the soonest-available worker
/// - fixing each task's start and finish time
/// - propagating completions so dependents become ready
///
/// The scheduler is *running* while the frontier is non-empty and *done*
/// afterwards.
#[derive(Debug)]
pub struct Scheduler {
    graph: TaskGraph,
    frontier: ReadinessFrontier,
    pool: WorkerPool,
    base_duration: Time,
    dispatches: Vec<Dispatch>,
}

impl Scheduler {
    /// Prepare a run over `graph`.
    ///
    /// Durations from `config` are applied on top of the graph's own, and
    /// every task must end up with one. Any lifecycle state left in the graph
    /// from a previous run is reset, so the same graph always schedules
    /// identically.
    pub fn new(mut graph: TaskGraph, config: &SchedulerConfig) -> Result<Self> {
        graph.resolve_durations(config.durations())?;
        for id in graph.all_tasks() {
            graph.task(id).total_duration(config.base_duration())?;
        }
        graph.reset_run_state();
        let pool = WorkerPool::new(config.worker_count())?;

        let mut frontier = ReadinessFrontier::new();
        for id in graph.all_tasks() {
            if let Some(entry) = FrontierEntry::for_task(graph.task(id)) {
                frontier.push(entry);
            }
        }

        debug!(
            tasks = graph.len(),
            initially_ready = frontier.len(),
            workers = pool.len(),
            base_duration = config.base_duration(),
            "scheduler: seeded readiness frontier"
        );

        Ok(Self {
            graph,
            frontier,
            pool,
            base_duration: config.base_duration(),
            dispatches: Vec::new(),
        })
    }

    /// Returns `true` once the frontier is exhausted.
    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn dispatched_count(&self) -> usize {
        self.dispatches.len()
    }

    /// Makespan so far; final once [`is_done`](Self::is_done) holds.
    pub fn makespan(&self) -> Time {
        self.pool.makespan()
    }

    pub fn run_state_of(&self, task: &str) -> Option<TaskRunState> {
        self.graph.run_state_of(task)
    }

    /// Names currently in the frontier, in dispatch order.
    pub fn ready_tasks(&self) -> Vec<TaskName> {
        self.frontier.peek_names()
    }

    /// Dispatch the next ready task to the soonest-available worker.
    ///
    /// Returns `Ok(None)` when there is nothing left to dispatch, and
    /// [`SimdagError::TimeOverflow`] if the task's finish time does not fit
    /// on the clock.
    pub fn step(&mut self) -> Result<Option<Dispatch>> {
        trace!(frontier = ?self.frontier.peek_names(), "scheduler: step");

        let Some(entry) = self.frontier.pop_next() else {
            return Ok(None);
        };
        let (worker, worker_free_at) = self.pool.soonest_available();

        let start = worker_free_at.max(entry.earliest_start);
        let duration = self.graph.task(entry.id).total_duration(self.base_duration)?;
        let finish = start
            .checked_add(duration)
            .ok_or_else(|| SimdagError::TimeOverflow {
                task: entry.name.clone(),
            })?;

        self.graph.mark_dispatched(entry.id, worker, start, finish);
        self.pool.assign(worker, finish);

        debug!(
            task = %entry.name,
            worker,
            start,
            finish,
            "dispatched task"
        );

        for id in self.graph.notify_completed(entry.id, finish) {
            if let Some(ready) = FrontierEntry::for_task(self.graph.task(id)) {
                self.frontier.push(ready);
            }
        }

        let dispatch = Dispatch {
            task: entry.name,
            worker,
            start,
            finish,
        };
        self.dispatches.push(dispatch.clone());
        Ok(Some(dispatch))
    }

    /// Run until the frontier is empty and return the finished schedule.
    ///
    /// Fails with [`SimdagError::Stalled`] if some tasks never became ready,
    /// which only happens when the graph contains a cycle.
    pub fn run(mut self) -> Result<Schedule> {
        info!(tasks = self.graph.len(), "scheduler: starting run");

        while self.step()?.is_some() {}
        self.graph.ensure_all_dispatched(self.dispatches.len())?;

        let makespan = self.pool.makespan();
        info!(makespan, "scheduler: all tasks dispatched");

        Ok(Schedule {
            dispatches: self.dispatches,
            makespan,
            worker_count: self.pool.len(),
        })
    }
}
