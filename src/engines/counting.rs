// src/engines/counting.rs
//! Counting sort
//!
//! Never compares elements. Snapshots show the output array as it fills,
//! and empty input yields an empty trace with no `Done` record.

use crate::engines::{Algorithm, SortEngine};
use crate::recording::{StepEvent, Trace, TraceRecorder};
use crate::utils::errors::{EngineError, Result};
use tracing::warn;

pub struct CountingSort {
    /// Largest counting table the engine will allocate
    max_range: u64,
}

impl CountingSort {
    /// Create an engine allowing at most `max_range` counting slots
    pub fn new(max_range: u64) -> Self {
        Self { max_range }
    }
}

impl SortEngine for CountingSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Counting
    }

    fn trace(&self, input: &[i64]) -> Result<Trace> {
        // One placement per element plus the Done record
        let mut recorder = TraceRecorder::with_capacity(input.len() + 1);

        let (min, max) = match (input.iter().min(), input.iter().max()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => return Ok(recorder.into_trace()),
        };

        let range = (i128::from(max) - i128::from(min) + 1) as u128;
        if range > u128::from(self.max_range) {
            warn!("Counting table of {} slots exceeds limit {}", range, self.max_range);
            return Err(EngineError::ValueRangeTooLarge {
                range,
                max: self.max_range,
            });
        }

        // Bounded by max_range above
        let slot = |value: i64| (i128::from(value) - i128::from(min)) as usize;

        let mut count = vec![0usize; range as usize];
        for &value in input {
            count[slot(value)] += 1;
        }
        for i in 1..count.len() {
            count[i] += count[i - 1];
        }

        let mut output = vec![0i64; input.len()];
        for &value in input.iter().rev() {
            let position = count[slot(value)] - 1;
            output[position] = value;
            recorder.record(
                StepEvent::Placed { index: position },
                &output,
                format!("Placed {} at position {}", value, position),
                None,
            )?;
            count[slot(value)] -= 1;
        }

        Ok(recorder.finish(output, self.algorithm().completion_message()))
    }
}
