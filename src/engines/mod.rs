// src/engines/mod.rs
//! Instrumented sorting engines
//!
//! Seven engines, each sorting a private copy of its input and recording a
//! step for every comparison, exchange and final placement:
//!
//! - **Bubble**: Adjacent exchanges, early exit on a swap-free pass
//! - **Selection**: Minimum scan, one swap per pass at most
//! - **Insertion**: Leftward shifts; movement is visible only in snapshots
//! - **Merge**: Top-down split, merge writes tagged with recursion depth
//! - **Quick**: Last-element pivot partitioning
//! - **Heap**: Bottom-up max-heap, no comparison records
//! - **Counting**: Cumulative counts, stable right-to-left placement
//!
//! Every trace except counting-sort on empty input ends in exactly one
//! `Done` record holding the sorted array.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::recording::Trace;
use crate::utils::config::LimitsConfig;
use crate::utils::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// Supported algorithm identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
}

impl Algorithm {
    /// Canonical order, also the benchmark submission order
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
    ];

    /// Identifier accepted by `sort`
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble sort",
            Algorithm::Selection => "Selection sort",
            Algorithm::Insertion => "Insertion sort",
            Algorithm::Merge => "Merge sort",
            Algorithm::Quick => "Quick sort",
            Algorithm::Heap => "Heap sort",
            Algorithm::Counting => "Counting sort",
        }
    }

    /// Auxiliary space in Big-O notation
    pub fn space_complexity(&self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion | Algorithm::Heap => {
                "O(1)"
            }
            Algorithm::Merge => "O(n)",
            Algorithm::Quick => "O(log n)",
            Algorithm::Counting => "O(k)",
        }
    }

    /// Narrative of the terminating `Done` record
    pub(crate) fn completion_message(&self) -> String {
        format!("{} completed!", self.display_name())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| EngineError::UnknownAlgorithm(s.to_string()))
    }
}

/// An instrumented sorting algorithm
pub trait SortEngine: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Sort a private copy of `input` and return the recorded trace.
    /// `input` is never mutated.
    fn trace(&self, input: &[i64]) -> Result<Trace>;
}

/// Construct the engine for an algorithm
pub fn build(algorithm: Algorithm, limits: &LimitsConfig) -> Box<dyn SortEngine> {
    match algorithm {
        Algorithm::Bubble => Box::new(BubbleSort),
        Algorithm::Selection => Box::new(SelectionSort),
        Algorithm::Insertion => Box::new(InsertionSort),
        Algorithm::Merge => Box::new(MergeSort),
        Algorithm::Quick => Box::new(QuickSort),
        Algorithm::Heap => Box::new(HeapSort),
        Algorithm::Counting => Box::new(CountingSort::new(limits.max_counting_range)),
    }
}

/// All seven engines in canonical order
pub fn build_all(limits: &LimitsConfig) -> Vec<Box<dyn SortEngine>> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| build(algorithm, limits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::StepKind;

    #[test]
    fn test_parse_identifiers() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_unknown_identifier() {
        let result = "shell".parse::<Algorithm>();
        assert!(matches!(result, Err(EngineError::UnknownAlgorithm(ref s)) if s == "shell"));
    }

    #[test]
    fn test_serde_identifier() {
        assert_eq!(serde_json::to_string(&Algorithm::Quick).unwrap(), "\"quick\"");
        let parsed: Algorithm = serde_json::from_str("\"counting\"").unwrap();
        assert_eq!(parsed, Algorithm::Counting);
    }

    #[test]
    fn test_build_all_order() {
        let engines = build_all(&LimitsConfig::default());
        let order: Vec<_> = engines.iter().map(|e| e.algorithm()).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_every_engine_sorts() {
        let input = vec![5, 3, 8, 1, 9, 2];
        for engine in build_all(&LimitsConfig::default()) {
            let trace = engine.trace(&input).unwrap();
            assert_eq!(
                trace.final_array(),
                Some(&[1, 2, 3, 5, 8, 9][..]),
                "{} produced the wrong array",
                engine.algorithm()
            );
            assert_eq!(trace.count(StepKind::Done), 1);
        }
        assert_eq!(input, vec![5, 3, 8, 1, 9, 2]);
    }

    #[test]
    fn test_space_complexity() {
        assert_eq!(Algorithm::Merge.space_complexity(), "O(n)");
        assert_eq!(Algorithm::Quick.space_complexity(), "O(log n)");
        assert_eq!(Algorithm::Counting.space_complexity(), "O(k)");
    }
}
