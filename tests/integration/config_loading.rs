// tests/integration/config_loading.rs

use std::io::Write;

use simdag::config::{
    DEFAULT_BASE_DURATION, DEFAULT_WORKER_COUNT, SchedulerConfig, load_and_validate,
    load_or_default,
};
use simdag::errors::SimdagError;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = config_file(
        r#"
[scheduler]
workers = 2
base_duration = 0

[durations]
"build-1" = 7
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.worker_count(), 2);
    assert_eq!(cfg.base_duration(), 0);
    assert_eq!(cfg.durations().get("build-1"), Some(&7));
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let file = config_file("[scheduler]\nworkers = 3\n");

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.worker_count(), 3);
    assert_eq!(cfg.base_duration(), DEFAULT_BASE_DURATION);
    assert!(cfg.durations().is_empty());

    let empty = config_file("");
    let cfg = load_and_validate(empty.path()).unwrap();
    assert_eq!(cfg, SchedulerConfig::default());
}

#[test]
fn test_no_config_path_uses_defaults() {
    let cfg = load_or_default(None).unwrap();
    assert_eq!(cfg.worker_count(), DEFAULT_WORKER_COUNT);
    assert_eq!(cfg.base_duration(), DEFAULT_BASE_DURATION);
    assert_eq!(DEFAULT_WORKER_COUNT, 5);
    assert_eq!(DEFAULT_BASE_DURATION, 60);
}

#[test]
fn test_zero_workers_is_rejected() {
    let file = config_file("[scheduler]\nworkers = 0\n");

    match load_and_validate(file.path()) {
        Err(SimdagError::ConfigError(msg)) => assert!(msg.contains("workers must be >= 1")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
    assert!(SchedulerConfig::new(0, 60).is_err());
}

#[test]
fn test_unknown_keys_are_rejected() {
    let file = config_file("[scheduler]\nworkers = 2\nspeed = 3\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(SimdagError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        load_and_validate(&missing),
        Err(SimdagError::IoError(_))
    ));
}

#[test]
fn test_cli_overrides_take_precedence() {
    let cfg = SchedulerConfig::new(5, 60).unwrap();

    let overridden = cfg.clone().with_overrides(Some(2), Some(0)).unwrap();
    assert_eq!(overridden.worker_count(), 2);
    assert_eq!(overridden.base_duration(), 0);

    let untouched = cfg.clone().with_overrides(None, None).unwrap();
    assert_eq!(untouched, cfg);

    assert!(cfg.with_overrides(Some(0), None).is_err());
}
