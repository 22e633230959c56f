// src/engines/merge.rs
//! Top-down merge sort
//!
//! Ranges are split to singletons. Each merge records its boundary as a
//! compare-kind step, then one placement per element written back, all
//! tagged with the recursion depth of the merging call.

use crate::engines::{Algorithm, SortEngine};
use crate::recording::{Comparison, StepContext, StepEvent, Trace, TraceRecorder};
use crate::utils::errors::Result;

pub struct MergeSort;

impl SortEngine for MergeSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }

    fn trace(&self, input: &[i64]) -> Result<Trace> {
        let mut work = input.to_vec();
        let mut recorder = TraceRecorder::new();

        if work.len() > 1 {
            let right = work.len() - 1;
            sort_range(&mut work, 0, right, 0, &mut recorder)?;
        }

        Ok(recorder.finish(work, self.algorithm().completion_message()))
    }
}

/// Sort the inclusive range `[left..=right]`
fn sort_range(
    work: &mut [i64],
    left: usize,
    right: usize,
    depth: usize,
    recorder: &mut TraceRecorder,
) -> Result<()> {
    if left >= right {
        return Ok(());
    }

    let mid = left + (right - left) / 2;
    sort_range(work, left, mid, depth + 1, recorder)?;
    sort_range(work, mid + 1, right, depth + 1, recorder)?;
    merge(work, left, mid, right, depth, recorder)
}

fn merge(
    work: &mut [i64],
    left: usize,
    mid: usize,
    right: usize,
    depth: usize,
    recorder: &mut TraceRecorder,
) -> Result<()> {
    let context = Some(StepContext::Depth(depth));
    let left_run = work[left..=mid].to_vec();
    let right_run = work[mid + 1..=right].to_vec();

    recorder.record(
        StepEvent::Compare(Comparison::MergeRange { left, mid, right }),
        work,
        format!(
            "Merging subarrays [{}..{}] and [{}..{}]",
            left,
            mid,
            mid + 1,
            right
        ),
        context,
    )?;

    let (mut i, mut j) = (0, 0);
    for k in left..=right {
        // Ties take from the left run, keeping the sort stable
        let take_left =
            j >= right_run.len() || (i < left_run.len() && left_run[i] <= right_run[j]);

        if take_left {
            work[k] = left_run[i];
            i += 1;
        } else {
            work[k] = right_run[j];
            j += 1;
        }

        recorder.record(
            StepEvent::Placed { index: k },
            work,
            format!("Placed {} at position {}", work[k], k),
            context,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::StepKind;

    #[test]
    fn test_sorts() {
        let trace = MergeSort.trace(&[38, 27, 43, 3, 9, 82, 10]).unwrap();
        assert_eq!(trace.final_array(), Some(&[3, 9, 10, 27, 38, 43, 82][..]));
        assert_eq!(trace.count(StepKind::Swap), 0);
    }

    #[test]
    fn test_merge_boundary_and_depth() {
        let trace = MergeSort.trace(&[2, 1]).unwrap();
        let steps = trace.steps();

        assert_eq!(
            steps[0].event,
            StepEvent::Compare(Comparison::MergeRange { left: 0, mid: 0, right: 1 })
        );
        assert_eq!(steps[0].positions(), vec![0, 1]);
        assert_eq!(steps[0].narrative, "Merging subarrays [0..0] and [1..1]");
        assert_eq!(steps[0].context, Some(StepContext::Depth(0)));

        assert_eq!(steps[1].event, StepEvent::Placed { index: 0 });
        assert_eq!(steps[1].snapshot, vec![1, 1]);
        assert_eq!(steps[2].event, StepEvent::Placed { index: 1 });
        assert_eq!(steps[2].snapshot, vec![1, 2]);
    }

    #[test]
    fn test_one_placement_per_write() {
        // n = 4: merges of sizes 2, 2, 4
        let trace = MergeSort.trace(&[4, 3, 2, 1]).unwrap();
        assert_eq!(trace.count(StepKind::Compare), 3);
        assert_eq!(trace.count(StepKind::Placed), 8);

        let depths: Vec<_> = trace
            .iter()
            .filter(|s| s.kind() == StepKind::Compare)
            .map(|s| s.context)
            .collect();
        assert_eq!(
            depths,
            vec![
                Some(StepContext::Depth(1)),
                Some(StepContext::Depth(1)),
                Some(StepContext::Depth(0)),
            ]
        );
    }

    #[test]
    fn test_single_element() {
        let trace = MergeSort.trace(&[5]).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.final_array(), Some(&[5][..]));
    }
}
