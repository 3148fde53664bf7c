// src/config/mod.rs

//! Configuration loading and validation for simdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate worker count and explicit durations (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{
    DEFAULT_BASE_DURATION, DEFAULT_WORKER_COUNT, RawConfigFile, SchedulerConfig, SchedulerSection,
};
