// src/engines/selection.rs
//! Selection sort

use crate::engines::{Algorithm, SortEngine};
use crate::recording::{Comparison, StepContext, StepEvent, Trace, TraceRecorder};
use crate::utils::errors::Result;

pub struct SelectionSort;

impl SortEngine for SelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn trace(&self, input: &[i64]) -> Result<Trace> {
        let mut work = input.to_vec();
        let mut recorder = TraceRecorder::new();
        let n = work.len();

        for i in 0..n {
            let pass = Some(StepContext::PassNumber(i + 1));
            let mut min_idx = i;

            recorder.record(
                StepEvent::Compare(Comparison::ScanStart(i)),
                &work,
                format!("Finding minimum from position {} onwards", i),
                pass,
            )?;

            for j in i + 1..n {
                recorder.record(
                    StepEvent::Compare(Comparison::Pair(min_idx, j)),
                    &work,
                    format!("Current min {} vs {}", work[min_idx], work[j]),
                    pass,
                )?;

                if work[j] < work[min_idx] {
                    min_idx = j;
                }
            }

            if min_idx != i {
                work.swap(i, min_idx);
                recorder.record(
                    StepEvent::Swap {
                        first: i,
                        second: min_idx,
                    },
                    &work,
                    format!("Swapped minimum {} to position {}", work[i], i),
                    pass,
                )?;
            }

            recorder.record(
                StepEvent::Placed { index: i },
                &work,
                format!("Position {} now has {} in final place", i, work[i]),
                pass,
            )?;
        }

        Ok(recorder.finish(work, self.algorithm().completion_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::StepKind;

    #[test]
    fn test_sorts() {
        let trace = SelectionSort.trace(&[64, 25, 12, 22, 11]).unwrap();
        assert_eq!(trace.final_array(), Some(&[11, 12, 22, 25, 64][..]));
    }

    #[test]
    fn test_comparison_count() {
        // n scan announcements plus n(n-1)/2 candidate checks
        let trace = SelectionSort.trace(&[4, 3, 2, 1]).unwrap();
        assert_eq!(trace.count(StepKind::Compare), 4 + 6);
        assert_eq!(trace.count(StepKind::Placed), 4);
    }

    #[test]
    fn test_no_swap_when_minimum_in_place() {
        let trace = SelectionSort.trace(&[1, 2, 3]).unwrap();
        assert_eq!(trace.count(StepKind::Swap), 0);
    }

    #[test]
    fn test_pass_layout() {
        let trace = SelectionSort.trace(&[2, 1]).unwrap();
        let events: Vec<_> = trace.iter().map(|s| s.event).collect();
        assert_eq!(
            events[..5],
            [
                StepEvent::Compare(Comparison::ScanStart(0)),
                StepEvent::Compare(Comparison::Pair(0, 1)),
                StepEvent::Swap { first: 0, second: 1 },
                StepEvent::Placed { index: 0 },
                StepEvent::Compare(Comparison::ScanStart(1)),
            ]
        );
        assert_eq!(trace.steps()[2].narrative, "Swapped minimum 1 to position 0");
    }
}
