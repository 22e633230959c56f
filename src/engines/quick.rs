// src/engines/quick.rs
//! Quick sort with last-element pivot (Lomuto partition)

use crate::engines::{Algorithm, SortEngine};
use crate::recording::{Comparison, StepContext, StepEvent, Trace, TraceRecorder};
use crate::utils::errors::Result;

pub struct QuickSort;

impl SortEngine for QuickSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn trace(&self, input: &[i64]) -> Result<Trace> {
        let mut work = input.to_vec();
        let mut recorder = TraceRecorder::new();

        if work.len() > 1 {
            let high = work.len() - 1;
            sort_range(&mut work, 0, high, 0, &mut recorder)?;
        }

        Ok(recorder.finish(work, self.algorithm().completion_message()))
    }
}

/// Sort the inclusive range `[low..=high]`, left side first
fn sort_range(
    work: &mut [i64],
    low: usize,
    high: usize,
    depth: usize,
    recorder: &mut TraceRecorder,
) -> Result<()> {
    if low >= high {
        return Ok(());
    }

    let pivot_index = partition(work, low, high, depth, recorder)?;
    if pivot_index > low {
        sort_range(work, low, pivot_index - 1, depth + 1, recorder)?;
    }
    sort_range(work, pivot_index + 1, high, depth + 1, recorder)
}

/// Partition around `work[high]` and return the pivot's final index
fn partition(
    work: &mut [i64],
    low: usize,
    high: usize,
    depth: usize,
    recorder: &mut TraceRecorder,
) -> Result<usize> {
    let context = Some(StepContext::Depth(depth));
    let pivot = work[high];

    recorder.record(
        StepEvent::PivotChosen { index: high },
        work,
        format!("Pivot selected: {}", pivot),
        context,
    )?;

    // Next slot for an element smaller than the pivot
    let mut store = low;
    for j in low..high {
        recorder.record(
            StepEvent::Compare(Comparison::Pair(j, high)),
            work,
            format!("Comparing {} with pivot {}", work[j], pivot),
            context,
        )?;

        if work[j] < pivot {
            work.swap(store, j);
            recorder.record(
                StepEvent::Swap {
                    first: store,
                    second: j,
                },
                work,
                format!("Swapped {} and {}", work[store], work[j]),
                context,
            )?;
            store += 1;
        }
    }

    work.swap(store, high);
    recorder.record(
        StepEvent::Placed { index: store },
        work,
        format!("Pivot {} in final position {}", pivot, store),
        context,
    )?;

    Ok(store)
}
