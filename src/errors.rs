// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Malformed edge on line {line}: {content:?}")]
    Parse { line: usize, content: String },

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("Simulated time overflows for task {task}")]
    TimeOverflow { task: String },

    #[error("Worker pool must contain at least one worker")]
    NoWorkers,

    #[error("Scheduler stalled after dispatching {dispatched} of {total} tasks; blocked: {blocked:?}")]
    Stalled {
        dispatched: usize,
        total: usize,
        blocked: Vec<String>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SimdagError>;
