// src/harness.rs
//! Comparison harness
//!
//! Runs every engine over the same input, times each run independently and
//! ranks the results by execution time. A failing or panicking engine only
//! degrades its own entry.
//!
//! # Ranking
//!
//! ```text
//! [bubble, selection, ..., counting]   (submission order)
//!          ↓ run + time each
//! [Completed | Failed, ...]
//!          ↓ stable sort by time (Failed = +inf)
//! fastest = first entry, if it completed
//! ```

use crate::engines::{self, Algorithm, SortEngine};
use crate::recording::{summarize, Trace};
use crate::utils::config::LimitsConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Per-algorithm statistics from a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub execution_time_us: f64,
    pub comparisons: usize,
    pub swaps: usize,
    pub total_steps: usize,
    pub space_complexity: &'static str,
    pub sorted: Vec<i64>,

    /// Full trace, kept for replay but not serialized
    #[serde(skip)]
    pub trace: Trace,
}

/// An engine fault isolated to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmFailure {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EntryOutcome {
    Completed(RunStats),
    Failed(AlgorithmFailure),
}

/// One ranked row of a benchmark report
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkEntry {
    pub algorithm: Algorithm,

    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

impl BenchmarkEntry {
    /// Statistics of a completed run
    pub fn stats(&self) -> Option<&RunStats> {
        match &self.outcome {
            EntryOutcome::Completed(stats) => Some(stats),
            EntryOutcome::Failed(_) => None,
        }
    }

    /// Failure of a run that errored or panicked
    pub fn failure(&self) -> Option<&AlgorithmFailure> {
        match &self.outcome {
            EntryOutcome::Completed(_) => None,
            EntryOutcome::Failed(failure) => Some(failure),
        }
    }

    /// Ranking key; failed entries sort last
    fn rank_time(&self) -> f64 {
        self.stats()
            .map(|stats| stats.execution_time_us)
            .unwrap_or(f64::INFINITY)
    }
}

/// Ranked results of one harness run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub results: Vec<BenchmarkEntry>,
    pub array_size: usize,
    pub fastest: Option<Algorithm>,
    pub timestamp: DateTime<Utc>,
}

/// Drives a set of engines over one input
pub struct BenchmarkHarness {
    engines: Vec<Box<dyn SortEngine>>,
}

impl BenchmarkHarness {
    /// Harness over the seven engines in canonical order
    pub fn new(limits: &LimitsConfig) -> Self {
        Self::with_engines(engines::build_all(limits))
    }

    /// Harness over an explicit engine list, run in the given order
    pub fn with_engines(engines: Vec<Box<dyn SortEngine>>) -> Self {
        Self { engines }
    }

    /// Number of engines driven per run
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether the harness has no engines
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Run every engine sequentially and rank the outcomes
    pub fn run(&self, input: &[i64]) -> BenchmarkReport {
        info!(
            "Benchmarking {} engines on {} elements",
            self.engines.len(),
            input.len()
        );

        let mut results: Vec<BenchmarkEntry> = self
            .engines
            .iter()
            .map(|engine| run_engine(engine.as_ref(), input))
            .collect();

        // sort_by is stable: equal times keep submission order
        results.sort_by(|a, b| a.rank_time().total_cmp(&b.rank_time()));

        let fastest = results
            .first()
            .filter(|entry| entry.stats().is_some())
            .map(|entry| entry.algorithm);

        info!("Fastest algorithm: {:?}", fastest);

        BenchmarkReport {
            results,
            array_size: input.len(),
            fastest,
            timestamp: Utc::now(),
        }
    }
}

fn run_engine(engine: &dyn SortEngine, input: &[i64]) -> BenchmarkEntry {
    let algorithm = engine.algorithm();

    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| engine.trace(input)));
    let elapsed = start.elapsed();

    let outcome = match result {
        Ok(Ok(trace)) => {
            let summary = summarize(&trace);
            let execution_time_us = round_micros(elapsed.as_secs_f64() * 1_000_000.0);

            debug!(
                "{} finished in {}us ({} steps)",
                algorithm, execution_time_us, summary.step_count
            );

            EntryOutcome::Completed(RunStats {
                execution_time_us,
                comparisons: summary.total_comparisons,
                swaps: summary.total_swaps,
                total_steps: summary.step_count,
                space_complexity: algorithm.space_complexity(),
                sorted: summary.sorted,
                trace,
            })
        }
        Ok(Err(e)) => {
            warn!("{} failed: {}", algorithm, e);
            EntryOutcome::Failed(AlgorithmFailure {
                error: e.to_string(),
            })
        }
        Err(payload) => {
            let error = panic_message(payload.as_ref());
            warn!("{} panicked: {}", algorithm, error);
            EntryOutcome::Failed(AlgorithmFailure { error })
        }
    };

    BenchmarkEntry { algorithm, outcome }
}

/// Round to two decimal places
pub(crate) fn round_micros(micros: f64) -> f64 {
    (micros * 100.0).round() / 100.0
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "engine panicked".to_string()
    }
}
