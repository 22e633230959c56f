// src/recording/recorder.rs
//! Append-only trace recorder
//!
//! Engines write every observable event through [`TraceRecorder::record`].
//! Snapshots are copied on append, so later mutation of the engine's working
//! array never reaches an earlier record.

use crate::recording::aggregator::OperationCounts;
use crate::recording::step::{Step, StepContext, StepEvent, StepKind};
use crate::utils::errors::{EngineError, Result};
use serde::Serialize;
use tracing::{trace, warn};

/// Completed, immutable sequence of steps for one sort invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// All records in emission order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of records, `Done` included
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True only for counting-sort on empty input
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate records in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The terminating `Done` record, absent only for empty counting-sort input
    pub fn done(&self) -> Option<&Step> {
        self.steps.last().filter(|step| step.kind() == StepKind::Done)
    }

    /// Sorted array carried by the `Done` record
    pub fn final_array(&self) -> Option<&[i64]> {
        self.done().map(|step| step.snapshot.as_slice())
    }

    /// Number of records of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Collects steps while an engine runs
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
}

impl TraceRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder with room for `capacity` steps
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Append one step, copying `snapshot` by value.
    ///
    /// `Done` is reserved for [`TraceRecorder::finish`] and is rejected here
    /// with [`EngineError::InvalidStep`], leaving the trace unchanged.
    pub fn record(
        &mut self,
        event: StepEvent,
        snapshot: &[i64],
        narrative: impl Into<String>,
        context: Option<StepContext>,
    ) -> Result<()> {
        if event.kind() == StepKind::Done {
            warn!("Rejected Done record at step {}", self.steps.len());
            return Err(EngineError::InvalidStep("Done is appended by finish()".to_string()));
        }

        let narrative = narrative.into();
        trace!("step {}: {} {}", self.steps.len(), event.kind(), narrative);

        self.steps.push(Step {
            event,
            snapshot: snapshot.to_vec(),
            narrative,
            context,
        });

        Ok(())
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Terminate the trace with a `Done` record carrying the sorted array.
    /// Totals are derived by scanning the recorded steps.
    pub fn finish(mut self, sorted: Vec<i64>, narrative: impl Into<String>) -> Trace {
        let counts = OperationCounts::tally(&self.steps);

        self.steps.push(Step {
            event: StepEvent::Done {
                total_comparisons: counts.comparisons,
                total_swaps: counts.swaps,
            },
            snapshot: sorted,
            narrative: narrative.into(),
            context: None,
        });

        Trace { steps: self.steps }
    }

    /// Close the trace without a `Done` record
    pub fn into_trace(self) -> Trace {
        Trace { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::step::Comparison;

    #[test]
    fn test_snapshot_is_copied() {
        let mut recorder = TraceRecorder::new();
        let mut work = vec![3, 1, 2];

        recorder
            .record(
                StepEvent::Compare(Comparison::Pair(0, 1)),
                &work,
                "Comparing 3 and 1",
                None,
            )
            .unwrap();
        work.swap(0, 1);
        recorder.record(StepEvent::Swap { first: 0, second: 1 }, &work, "Swapped", None).unwrap();

        let trace = recorder.finish(work, "done");
        assert_eq!(trace.steps()[0].snapshot, vec![3, 1, 2]);
        assert_eq!(trace.steps()[1].snapshot, vec![1, 3, 2]);
    }

    #[test]
    fn test_finish_appends_done_with_totals() {
        let mut recorder = TraceRecorder::new();
        recorder.record(StepEvent::Compare(Comparison::Pair(0, 1)), &[2, 1], "c", None).unwrap();
        recorder.record(StepEvent::Swap { first: 0, second: 1 }, &[1, 2], "s", None).unwrap();
        recorder.record(StepEvent::Compare(Comparison::ScanStart(1)), &[1, 2], "c", None).unwrap();
        recorder.record(StepEvent::Placed { index: 1 }, &[1, 2], "p", None).unwrap();

        let trace = recorder.finish(vec![1, 2], "Finished");
        assert_eq!(trace.len(), 5);

        let done = trace.done().unwrap();
        assert_eq!(
            done.event,
            StepEvent::Done {
                total_comparisons: 2,
                total_swaps: 1
            }
        );
        assert_eq!(trace.final_array(), Some(&[1, 2][..]));
    }

    #[test]
    fn test_into_trace_has_no_done() {
        let trace = TraceRecorder::new().into_trace();
        assert!(trace.is_empty());
        assert!(trace.done().is_none());
        assert!(trace.final_array().is_none());
    }

    #[test]
    fn test_count_by_kind() {
        let mut recorder = TraceRecorder::with_capacity(4);
        recorder.record(StepEvent::PivotChosen { index: 1 }, &[2, 1], "p", None).unwrap();
        recorder.record(StepEvent::Compare(Comparison::Pair(0, 1)), &[2, 1], "c", None).unwrap();
        recorder.record(StepEvent::Placed { index: 0 }, &[1, 2], "p", None).unwrap();
        let trace = recorder.finish(vec![1, 2], "done");

        assert_eq!(trace.count(StepKind::PivotChosen), 1);
        assert_eq!(trace.count(StepKind::Compare), 1);
        assert_eq!(trace.count(StepKind::Swap), 0);
        assert_eq!(trace.count(StepKind::Done), 1);
    }

    #[test]
    fn test_done_rejected_by_record() {
        let mut recorder = TraceRecorder::new();
        recorder
            .record(StepEvent::Compare(Comparison::Pair(0, 1)), &[2, 1], "c", None)
            .unwrap();

        let result = recorder.record(
            StepEvent::Done {
                total_comparisons: 99,
                total_swaps: 7,
            },
            &[1, 2],
            "early",
            None,
        );
        assert!(matches!(result, Err(EngineError::InvalidStep(_))));
        assert_eq!(recorder.len(), 1);

        let trace = recorder.finish(vec![1, 2], "done");
        assert_eq!(trace.count(StepKind::Done), 1);
        assert_eq!(
            trace.done().unwrap().event,
            StepEvent::Done {
                total_comparisons: 1,
                total_swaps: 0
            }
        );
    }
}
