// tests/trace_properties.rs
//! Property tests over every engine

use proptest::prelude::*;
use sort_trace_engine::engines::{self, Algorithm};
use sort_trace_engine::recording::{summarize, StepEvent, StepKind};
use sort_trace_engine::utils::config::LimitsConfig;
use sort_trace_engine::{EngineError, SortService};

fn input_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-500i64..500, 1..40)
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn done_holds_sorted_permutation(input in input_strategy(), algorithm in algorithm_strategy()) {
        let engine = engines::build(algorithm, &LimitsConfig::default());
        let trace = engine.trace(&input).unwrap();

        let mut expected = input.clone();
        expected.sort();

        prop_assert_eq!(trace.final_array(), Some(expected.as_slice()));
        prop_assert_eq!(trace.count(StepKind::Done), 1);
        prop_assert_eq!(trace.steps().last().map(|s| s.kind()), Some(StepKind::Done));
    }

    #[test]
    fn traces_are_deterministic(input in input_strategy(), algorithm in algorithm_strategy()) {
        let service = SortService::default();
        let first = service.sort(&input, algorithm.as_str()).unwrap();
        let second = service.sort(&input, algorithm.as_str()).unwrap();

        prop_assert_eq!(first.steps, second.steps);
    }

    #[test]
    fn totals_match_recorded_kinds(input in input_strategy(), algorithm in algorithm_strategy()) {
        let outcome = SortService::default().sort(&input, algorithm.as_str()).unwrap();

        prop_assert_eq!(outcome.total_comparisons, outcome.steps.count(StepKind::Compare));
        prop_assert_eq!(outcome.total_swaps, outcome.steps.count(StepKind::Swap));

        let done = outcome.steps.done().map(|s| s.event);
        prop_assert_eq!(
            done,
            Some(StepEvent::Done {
                total_comparisons: outcome.total_comparisons,
                total_swaps: outcome.total_swaps,
            })
        );
    }

    #[test]
    fn zero_count_classes(input in input_strategy()) {
        let service = SortService::default();

        for algorithm in [Algorithm::Heap, Algorithm::Counting] {
            let outcome = service.sort(&input, algorithm.as_str()).unwrap();
            prop_assert_eq!(outcome.total_comparisons, 0);
        }

        for algorithm in [Algorithm::Merge, Algorithm::Insertion, Algorithm::Counting] {
            let outcome = service.sort(&input, algorithm.as_str()).unwrap();
            prop_assert_eq!(outcome.total_swaps, 0);
        }

        let counting = service.sort(&input, "counting").unwrap();
        prop_assert_eq!(counting.steps.count(StepKind::PivotChosen), 0);
    }

    #[test]
    fn caller_input_is_untouched(input in input_strategy(), algorithm in algorithm_strategy()) {
        let before = input.clone();
        let engine = engines::build(algorithm, &LimitsConfig::default());
        let _ = engine.trace(&input).unwrap();

        prop_assert_eq!(input, before);
    }

    #[test]
    fn snapshots_match_array_length(input in input_strategy(), algorithm in algorithm_strategy()) {
        let engine = engines::build(algorithm, &LimitsConfig::default());
        let trace = engine.trace(&input).unwrap();

        for step in trace.iter() {
            prop_assert_eq!(step.snapshot.len(), input.len());
            for index in step.positions() {
                prop_assert!(index < input.len());
            }
        }
    }

    #[test]
    fn summarize_is_idempotent(input in input_strategy(), algorithm in algorithm_strategy()) {
        let engine = engines::build(algorithm, &LimitsConfig::default());
        let trace = engine.trace(&input).unwrap();

        prop_assert_eq!(summarize(&trace), summarize(&trace));
    }
}

#[test]
fn bubble_early_exit_on_sorted_input() {
    let input: Vec<i64> = (1..=10).collect();
    let outcome = SortService::default().sort(&input, "bubble").unwrap();

    assert_eq!(outcome.total_comparisons, 9);
    assert_eq!(outcome.total_swaps, 0);
}

#[test]
fn counting_empty_input_has_no_done_record() {
    let engine = engines::build(Algorithm::Counting, &LimitsConfig::default());
    let trace = engine.trace(&[]).unwrap();

    assert!(trace.is_empty());
    assert!(trace.done().is_none());

    let summary = summarize(&trace);
    assert!(summary.sorted.is_empty());
    assert_eq!(summary.total_comparisons, 0);
    assert_eq!(summary.total_swaps, 0);
}

#[test]
fn benchmark_reference_input() {
    let report = SortService::default()
        .benchmark_all(&[5, 3, 8, 1, 9, 2])
        .unwrap();

    assert_eq!(report.results.len(), 7);
    for entry in &report.results {
        let stats = entry.stats().expect("every engine completes");
        assert_eq!(stats.trace.final_array(), Some(&[1, 2, 3, 5, 8, 9][..]));
    }

    let times: Vec<f64> = report
        .results
        .iter()
        .filter_map(|e| e.stats().map(|s| s.execution_time_us))
        .collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(report.fastest, Some(report.results[0].algorithm));
}

#[test]
fn boundary_errors() {
    let service = SortService::default();

    assert!(matches!(service.sort(&[], "bubble"), Err(EngineError::EmptyInput)));
    assert!(matches!(
        service.sort(&[3, 1, 2], "shell"),
        Err(EngineError::UnknownAlgorithm(_))
    ));
}

#[test]
fn quick_sort_all_equal_terminates() {
    let outcome = SortService::default().sort(&[3, 3, 3], "quick").unwrap();

    assert_eq!(outcome.sorted(), &[3, 3, 3]);
    assert_eq!(outcome.steps.count(StepKind::PivotChosen), 2);
    assert_eq!(outcome.steps.count(StepKind::Placed), 2);
    assert_eq!(outcome.total_swaps, 0);
}
