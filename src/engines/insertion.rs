// src/engines/insertion.rs
//! Insertion sort
//!
//! Shifts are plain writes into the working array. They produce no swap
//! records; the movement shows up in the next snapshot.

use crate::engines::{Algorithm, SortEngine};
use crate::recording::{Comparison, StepContext, StepEvent, Trace, TraceRecorder};
use crate::utils::errors::Result;

pub struct InsertionSort;

impl SortEngine for InsertionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn trace(&self, input: &[i64]) -> Result<Trace> {
        let mut work = input.to_vec();
        let mut recorder = TraceRecorder::new();

        for i in 1..work.len() {
            let pass = Some(StepContext::PassNumber(i));
            let key = work[i];

            recorder.record(
                StepEvent::Compare(Comparison::ScanStart(i)),
                &work,
                format!("Inserting {} into sorted portion", key),
                pass,
            )?;

            // `hole` is the slot the key will land in
            let mut hole = i;
            while hole > 0 && work[hole - 1] > key {
                recorder.record(
                    StepEvent::Compare(Comparison::Pair(hole - 1, hole)),
                    &work,
                    format!("{} > {}, shifting right", work[hole - 1], key),
                    pass,
                )?;
                work[hole] = work[hole - 1];
                hole -= 1;
            }

            work[hole] = key;
            recorder.record(
                StepEvent::Placed { index: hole },
                &work,
                format!("Inserted {} at position {}", key, hole),
                pass,
            )?;
        }

        Ok(recorder.finish(work, self.algorithm().completion_message()))
    }
}
