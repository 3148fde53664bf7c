// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::{TaskName, Time};

pub const DEFAULT_WORKER_COUNT: usize = 5;
pub const DEFAULT_BASE_DURATION: Time = 60;

/// Top-level configuration file as read from TOML, before validation.
///
/// ```toml
/// [scheduler]
/// workers = 2
/// base_duration = 0
///
/// [durations]
/// "build-1" = 7
/// ```
///
/// All sections are optional and fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub scheduler: SchedulerSection,

    /// Explicit task durations, overriding the identifier-derived ones.
    #[serde(default)]
    pub durations: BTreeMap<TaskName, Time>,
}

/// `[scheduler]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerSection {
    /// Number of identical workers (must be >= 1).
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Fixed overhead added to every task.
    #[serde(default = "default_base_duration")]
    pub base_duration: Time,
}

fn default_workers() -> usize {
    DEFAULT_WORKER_COUNT
}

fn default_base_duration() -> Time {
    DEFAULT_BASE_DURATION
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            base_duration: default_base_duration(),
        }
    }
}

/// Validated scheduler configuration consumed by the scheduler loop.
///
/// Construct through [`SchedulerConfig::new`] or `TryFrom<RawConfigFile>`;
/// both guarantee `worker_count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    worker_count: usize,
    base_duration: Time,
    durations: BTreeMap<TaskName, Time>,
}

impl SchedulerConfig {
    pub(crate) fn new_unchecked(
        worker_count: usize,
        base_duration: Time,
        durations: BTreeMap<TaskName, Time>,
    ) -> Self {
        Self {
            worker_count,
            base_duration,
            durations,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn base_duration(&self) -> Time {
        self.base_duration
    }

    pub fn durations(&self) -> &BTreeMap<TaskName, Time> {
        &self.durations
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_WORKER_COUNT, DEFAULT_BASE_DURATION, BTreeMap::new())
    }
}
