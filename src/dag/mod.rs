// src/dag/mod.rs

//! Task graph representation and scheduling.
//!
//! - [`graph`] holds the task arena and its prerequisite/dependent edges.
//! - [`task_info`] provides task metadata and lifecycle states.
//! - [`frontier`] orders ready tasks for dispatch.
//! - [`workers`] tracks when each simulated worker is free.
//! - [`scheduler`] runs the dispatch loop over all of the above.
//! - [`schedule`] defines the dispatch records and the finished schedule.
//! - [`order`] computes the duration-free sequential step order.

pub mod frontier;
pub mod graph;
pub mod order;
pub mod schedule;
pub mod scheduler;
pub mod task_info;
pub mod workers;

pub use frontier::{FrontierEntry, ReadinessFrontier};
pub use graph::TaskGraph;
pub use order::sequential_order;
pub use schedule::{Dispatch, Schedule};
pub use scheduler::Scheduler;
pub use task_info::{TaskInfo, TaskRunState};
pub use workers::WorkerPool;
