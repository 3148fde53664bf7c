// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{RawConfigFile, SchedulerConfig};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks the worker count and `[durations]` keys.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<SchedulerConfig> {
    let raw = load_from_path(&path)?;
    SchedulerConfig::try_from(raw)
}

/// Resolve the effective config: file (if any) or defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<SchedulerConfig> {
    match path {
        Some(path) => load_and_validate(path),
        None => Ok(SchedulerConfig::default()),
    }
}
