// tests/integration/error_handling.rs

use simdag::config::SchedulerConfig;
use simdag::dag::TaskGraph;
use simdag::errors::SimdagError;
use simdag::input::{graph_from_str, parse_edges};
use simdag::report::write_dry_run;
use simdag::simulate;
use simdag_test_utils::builders::{EdgeListBuilder, config};

#[test]
fn test_malformed_line_reports_line_number() {
    let input = "Step A must be finished before step B can begin.\n\nStep B must finish before C.\n";

    match parse_edges(input) {
        Err(SimdagError::Parse { line, content }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "Step B must finish before C.");
        }
        other => panic!("Expected Parse error, got: {:?}", other),
    }
}

#[test]
fn test_parser_accepts_multi_character_identifiers_and_whitespace() {
    let input = "  Step fetch must be finished before step build-1 can begin.  \n\n";
    let edges = parse_edges(input).unwrap();

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].before, "fetch");
    assert_eq!(edges[0].after, "build-1");
    assert_eq!(edges[0].line, 1);
}

#[test]
fn test_dag_cycle_returns_structured_error() {
    let input = EdgeListBuilder::new()
        .edge("A", "B")
        .edge("B", "C")
        .edge("C", "A")
        .to_input();

    match graph_from_str(&input, &SchedulerConfig::default()) {
        Err(SimdagError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_self_edge_returns_config_error() {
    let input = EdgeListBuilder::new().edge("A", "A").to_input();

    match graph_from_str(&input, &SchedulerConfig::default()) {
        Err(SimdagError::ConfigError(msg)) => {
            assert!(msg.contains("cannot depend on itself"));
            assert!(msg.contains("'A'"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_identifier_without_duration_needs_override() {
    let input = EdgeListBuilder::new().edge("A", "42").to_input();

    match graph_from_str(&input, &SchedulerConfig::default()) {
        Err(SimdagError::ConfigError(msg)) => assert!(msg.contains("'42'")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let mut durations = std::collections::BTreeMap::new();
    durations.insert("42".to_string(), 9);
    let cfg = SchedulerConfig::with_durations(1, 0, durations).unwrap();
    let graph = graph_from_str(&input, &cfg).unwrap();
    assert_eq!(graph.task_by_name("42").unwrap().duration_base, 9);
}

#[test]
fn test_duplicate_edges_do_not_corrupt_counts() {
    let input = EdgeListBuilder::new()
        .edge("A", "B")
        .edge("A", "B")
        .to_input();

    let graph = graph_from_str(&input, &SchedulerConfig::default()).unwrap();
    assert_eq!(graph.prerequisites_of("B"), vec!["A"]);
    assert_eq!(graph.task_by_name("B").unwrap().pending_prerequisite_count(), 1);

    let schedule = simulate(graph, &config(1, 0)).unwrap();
    assert_eq!(schedule.makespan(), 3);
}

#[test]
fn test_empty_input_schedules_nothing() {
    let graph = graph_from_str("\n\n", &SchedulerConfig::default()).unwrap();
    assert!(graph.is_empty());
    assert_eq!(simulate(graph, &config(5, 60)).unwrap().makespan(), 0);
}

#[test]
fn test_cycle_built_directly_stalls_scheduler() {
    let mut graph = TaskGraph::from_edges([("A", "B"), ("B", "A")]);
    graph.add_task("X");

    match simulate(graph, &config(2, 0)) {
        Err(SimdagError::Stalled {
            dispatched,
            total,
            blocked,
        }) => {
            assert_eq!(dispatched, 1);
            assert_eq!(total, 3);
            assert_eq!(blocked, vec!["A".to_string(), "B".to_string()]);
        }
        other => panic!("Expected Stalled error, got: {:?}", other),
    }
}

#[test]
fn test_base_duration_overflow_returns_error() {
    let graph = TaskGraph::from_edges([("A", "B")]);
    let cfg = SchedulerConfig::new(1, u64::MAX).unwrap();

    match simulate(graph, &cfg) {
        Err(SimdagError::TimeOverflow { task }) => assert_eq!(task, "A"),
        other => panic!("Expected TimeOverflow error, got: {:?}", other),
    }
}

#[test]
fn test_finish_time_overflow_returns_error() {
    let mut durations = std::collections::BTreeMap::new();
    durations.insert("A".to_string(), u64::MAX);
    let cfg = SchedulerConfig::with_durations(1, 0, durations).unwrap();
    let graph = TaskGraph::from_edges([("A", "B")]);

    match simulate(graph, &cfg) {
        Err(SimdagError::TimeOverflow { task }) => assert_eq!(task, "B"),
        other => panic!("Expected TimeOverflow error, got: {:?}", other),
    }
}

#[test]
fn test_dry_run_duration_overflow_returns_error() {
    let graph = TaskGraph::from_edges([("A", "B")]);
    let cfg = SchedulerConfig::new(1, u64::MAX).unwrap();
    let mut out = Vec::new();

    match write_dry_run(&mut out, &graph, &cfg) {
        Err(SimdagError::TimeOverflow { task }) => assert_eq!(task, "A"),
        other => panic!("Expected TimeOverflow error, got: {:?}", other),
    }
}
