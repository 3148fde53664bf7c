// src/dag/workers.rs

use crate::errors::{Result, SimdagError};
use crate::types::Time;

/// Fixed pool of identical simulated workers.
///
/// Each worker is represented only by the earliest time it can pick up a new
/// task.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    free_at: Vec<Time>,
}

impl WorkerPool {
    pub fn new(worker_count: usize) -> Result<Self> {
        if worker_count == 0 {
            return Err(SimdagError::NoWorkers);
        }
        Ok(Self {
            free_at: vec![0; worker_count],
        })
    }

    pub fn len(&self) -> usize {
        self.free_at.len()
    }

    /// Worker with the smallest `free_at`; the lowest index wins ties.
    pub fn soonest_available(&self) -> (usize, Time) {
        let mut best = (0, self.free_at[0]);
        for (index, &free_at) in self.free_at.iter().enumerate().skip(1) {
            if free_at < best.1 {
                best = (index, free_at);
            }
        }
        best
    }

    pub fn assign(&mut self, worker: usize, finish_time: Time) {
        self.free_at[worker] = finish_time;
    }

    pub fn free_at(&self, worker: usize) -> Option<Time> {
        self.free_at.get(worker).copied()
    }

    /// Time at which the last worker becomes free.
    pub fn makespan(&self) -> Time {
        self.free_at.iter().copied().max().unwrap_or(0)
    }
}
