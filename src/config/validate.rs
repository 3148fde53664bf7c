// src/config/validate.rs

use std::collections::BTreeMap;

use crate::config::model::{RawConfigFile, SchedulerConfig};
use crate::errors::{Result, SimdagError};
use crate::types::{TaskName, Time};

impl TryFrom<RawConfigFile> for SchedulerConfig {
    type Error = SimdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        SchedulerConfig::with_durations(
            raw.scheduler.workers,
            raw.scheduler.base_duration,
            raw.durations,
        )
    }
}

impl SchedulerConfig {
    /// Validated config with no explicit task durations.
    pub fn new(worker_count: usize, base_duration: Time) -> Result<Self> {
        Self::with_durations(worker_count, base_duration, BTreeMap::new())
    }

    pub fn with_durations(
        worker_count: usize,
        base_duration: Time,
        durations: BTreeMap<TaskName, Time>,
    ) -> Result<Self> {
        validate_worker_count(worker_count)?;
        validate_durations(&durations)?;
        Ok(Self::new_unchecked(worker_count, base_duration, durations))
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(self, workers: Option<usize>, base_duration: Option<Time>) -> Result<Self> {
        let worker_count = workers.unwrap_or(self.worker_count());
        let base_duration = base_duration.unwrap_or(self.base_duration());
        let durations = self.durations().clone();
        Self::with_durations(worker_count, base_duration, durations)
    }
}

fn validate_worker_count(worker_count: usize) -> Result<()> {
    if worker_count == 0 {
        return Err(SimdagError::ConfigError(
            "[scheduler].workers must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_durations(durations: &BTreeMap<TaskName, Time>) -> Result<()> {
    if durations.keys().any(|name| name.trim().is_empty()) {
        return Err(SimdagError::ConfigError(
            "[durations] keys must be non-empty task names".to_string(),
        ));
    }
    Ok(())
}
