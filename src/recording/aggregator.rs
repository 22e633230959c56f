// src/recording/aggregator.rs
//! Trace aggregation
//!
//! Totals are always derived from recorded kinds, so for every trace
//! `total_comparisons == count(Compare)` and `total_swaps == count(Swap)`.

use crate::recording::recorder::Trace;
use crate::recording::step::{Step, StepKind};
use serde::Serialize;

/// Comparison and swap tallies over a run of steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OperationCounts {
    pub comparisons: usize,
    pub swaps: usize,
}

impl OperationCounts {
    /// One pass over the steps
    pub fn tally(steps: &[Step]) -> Self {
        steps
            .iter()
            .fold(Self::default(), |mut counts, step| {
                match step.kind() {
                    StepKind::Compare => counts.comparisons += 1,
                    StepKind::Swap => counts.swaps += 1,
                    _ => {}
                }
                counts
            })
    }
}

/// Summary statistics of a completed trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub total_comparisons: usize,
    pub total_swaps: usize,
    pub step_count: usize,

    /// Final array from the `Done` record, empty when there is none
    pub sorted: Vec<i64>,
}

/// Summarize a trace. Pure: repeated calls yield identical results.
pub fn summarize(trace: &Trace) -> TraceSummary {
    let counts = OperationCounts::tally(trace.steps());

    TraceSummary {
        total_comparisons: counts.comparisons,
        total_swaps: counts.swaps,
        step_count: trace.len(),
        sorted: trace.final_array().map(<[i64]>::to_vec).unwrap_or_default(),
    }
}
