// src/engines/bubble.rs
//! Exchange sort (bubble sort)
//!
//! Pass `i` compares adjacent pairs up to `n - i - 2`, then records the
//! element fixed at `n - i - 1`. A pass without swaps ends the sort.

use crate::engines::{Algorithm, SortEngine};
use crate::recording::{Comparison, StepContext, StepEvent, Trace, TraceRecorder};
use crate::utils::errors::Result;

pub struct BubbleSort;

impl SortEngine for BubbleSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn trace(&self, input: &[i64]) -> Result<Trace> {
        let mut work = input.to_vec();
        let mut recorder = TraceRecorder::new();
        let n = work.len();

        for i in 0..n {
            let pass = Some(StepContext::PassNumber(i + 1));
            let mut swapped = false;

            for j in 0..n - i - 1 {
                recorder.record(
                    StepEvent::Compare(Comparison::Pair(j, j + 1)),
                    &work,
                    format!(
                        "Comparing {} and {} at positions {} and {}",
                        work[j],
                        work[j + 1],
                        j,
                        j + 1
                    ),
                    pass,
                )?;

                if work[j] > work[j + 1] {
                    work.swap(j, j + 1);
                    swapped = true;
                    recorder.record(
                        StepEvent::Swap {
                            first: j,
                            second: j + 1,
                        },
                        &work,
                        format!("Swapped {} and {}", work[j + 1], work[j]),
                        pass,
                    )?;
                }
            }

            let fixed = n - i - 1;
            recorder.record(
                StepEvent::Placed { index: fixed },
                &work,
                format!("Element {} is now in final position {}", work[fixed], fixed),
                pass,
            )?;

            if !swapped {
                break;
            }
        }

        Ok(recorder.finish(work, self.algorithm().completion_message()))
    }
}
