use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use simdag::dag::{Scheduler, TaskGraph};
use simdag_test_utils::builders::{EdgeListBuilder, config};

// Strategy to generate a valid DAG.
// We ensure acyclicity by only allowing task N to depend on tasks 0..N-1.
// Names are single letters so durations derive from the identifier.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = EdgeListBuilder> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        );
        let order_strat = Just((0..num_tasks).collect::<Vec<_>>()).prop_shuffle();

        (deps_strat, order_strat).prop_map(move |(raw_deps, letters)| {
            // Shuffle the letters so alphabetical order and topological order
            // are unrelated.
            let name = |i: usize| ((b'A' + letters[i] as u8) as char).to_string();

            let mut builder = EdgeListBuilder::new();
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let valid_deps: HashSet<usize> = if i > 0 {
                    potential_deps.into_iter().map(|d| d % i).collect()
                } else {
                    HashSet::new()
                };
                let mut valid_deps: Vec<usize> = valid_deps.into_iter().collect();
                valid_deps.sort_unstable();
                for dep in valid_deps {
                    builder = builder.edge(&name(dep), &name(i));
                }
            }
            builder
        })
    })
}

fn graph_with_isolated(builder: &EdgeListBuilder, extra: usize) -> TaskGraph {
    let mut graph = builder.build_graph();
    for i in 0..extra {
        graph.add_task(&format!("z{i}"));
    }
    graph
}

proptest! {
    #[test]
    fn every_task_dispatched_once_within_task_count_steps(
        dag in dag_strategy(20),
        workers in 1..6usize,
        base in 0..70u64,
    ) {
        let graph = dag.build_graph();
        let total = graph.len();
        let mut scheduler = Scheduler::new(graph, &config(workers, base)).unwrap();

        let mut seen = HashSet::new();
        let mut steps = 0;
        while let Some(d) = scheduler.step().unwrap() {
            steps += 1;
            prop_assert!(steps <= total, "more steps than tasks");
            prop_assert!(seen.insert(d.task.clone()), "task {} dispatched twice", d.task);
        }
        prop_assert_eq!(seen.len(), total);
        prop_assert!(scheduler.is_done());
    }

    #[test]
    fn starts_respect_prerequisites_and_workers(
        dag in dag_strategy(20),
        workers in 1..6usize,
        base in 0..70u64,
        isolated in 0..3usize,
    ) {
        let graph = graph_with_isolated(&dag, isolated);
        let schedule = Scheduler::new(graph.clone(), &config(workers, base))
            .unwrap()
            .run()
            .unwrap();

        let mut worker_free: HashMap<usize, u64> = HashMap::new();
        for d in schedule.dispatches() {
            for prereq in graph.prerequisites_of(&d.task) {
                let prereq_finish = schedule.finish_time_of(prereq).unwrap();
                prop_assert!(
                    d.start >= prereq_finish,
                    "{} starts at {} before {} finishes at {}",
                    d.task, d.start, prereq, prereq_finish
                );
            }

            let free = worker_free.get(&d.worker).copied().unwrap_or(0);
            prop_assert!(d.start >= free, "worker {} double-booked", d.worker);

            let duration = graph.task_by_name(&d.task).unwrap().duration_base + base;
            prop_assert_eq!(d.finish, d.start + duration);
            worker_free.insert(d.worker, d.finish);
        }

        let last_finish = schedule.dispatches().iter().map(|d| d.finish).max().unwrap_or(0);
        prop_assert_eq!(schedule.makespan(), last_finish);
    }

    #[test]
    fn repeated_runs_agree(
        dag in dag_strategy(15),
        workers in 1..6usize,
        base in 0..70u64,
    ) {
        let graph = dag.build_graph();
        let cfg = config(workers, base);
        let first = Scheduler::new(graph.clone(), &cfg).unwrap().run().unwrap();
        let second = Scheduler::new(graph, &cfg).unwrap().run().unwrap();
        prop_assert_eq!(first, second);
    }
}
