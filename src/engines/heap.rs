// src/engines/heap.rs
//! Heap sort
//!
//! Builds a max-heap bottom-up, then moves the root behind the shrinking
//! heap one element at a time. Only sift-down exchanges are recorded as
//! swaps; child comparisons are not recorded, so the comparison total is
//! always zero.

use crate::engines::{Algorithm, SortEngine};
use crate::recording::{StepEvent, Trace, TraceRecorder};
use crate::utils::errors::Result;

pub struct HeapSort;

impl SortEngine for HeapSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Heap
    }

    fn trace(&self, input: &[i64]) -> Result<Trace> {
        let mut work = input.to_vec();
        let mut recorder = TraceRecorder::new();
        let n = work.len();

        for i in (0..n / 2).rev() {
            sift_down(&mut work, n, i, &mut recorder)?;
        }

        for end in (1..n).rev() {
            work.swap(0, end);
            recorder.record(
                StepEvent::Placed { index: end },
                &work,
                format!("Extracted {} to position {}", work[end], end),
                None,
            )?;
            sift_down(&mut work, end, 0, &mut recorder)?;
        }

        Ok(recorder.finish(work, self.algorithm().completion_message()))
    }
}

/// Restore the max-heap property below `root` within `work[..heap_len]`
fn sift_down(
    work: &mut [i64],
    heap_len: usize,
    root: usize,
    recorder: &mut TraceRecorder,
) -> Result<()> {
    let mut root = root;

    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_len && work[left] > work[largest] {
            largest = left;
        }
        if right < heap_len && work[right] > work[largest] {
            largest = right;
        }

        if largest == root {
            return Ok(());
        }

        work.swap(root, largest);
        recorder.record(
            StepEvent::Swap {
                first: root,
                second: largest,
            },
            work,
            format!("Heapifying: swapped {} and {}", work[root], work[largest]),
            None,
        )?;
        root = largest;
    }
}
