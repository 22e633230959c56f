// src/utils/generator.rs
//! Sample input generation
//!
//! Produces the arrays a visualizer typically starts from: uniformly random
//! values in `1..=100`, optionally pre-sorted, reversed, or nearly sorted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::errors::EngineError;

const MIN_VALUE: i64 = 1;
const MAX_VALUE: i64 = 100;

/// Shape of a generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayShape {
    Random,
    Sorted,
    Reversed,
    /// Sorted, then `size / 10` random pairs exchanged
    NearlySorted,
}

impl FromStr for ArrayShape {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(ArrayShape::Random),
            "sorted" => Ok(ArrayShape::Sorted),
            "reversed" => Ok(ArrayShape::Reversed),
            "nearly" | "nearly_sorted" => Ok(ArrayShape::NearlySorted),
            other => Err(EngineError::ConfigError(format!(
                "Unknown array shape: {}",
                other
            ))),
        }
    }
}

/// Generate an array of `size` values. A seed makes the output reproducible.
pub fn generate(shape: ArrayShape, size: usize, seed: Option<u64>) -> Vec<i64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut values: Vec<i64> = (0..size)
        .map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE))
        .collect();

    match shape {
        ArrayShape::Random => {}
        ArrayShape::Sorted => values.sort_unstable(),
        ArrayShape::Reversed => values.sort_unstable_by(|a, b| b.cmp(a)),
        ArrayShape::NearlySorted => {
            values.sort_unstable();
            if size > 0 {
                for _ in 0..size / 10 {
                    let a = rng.gen_range(0..size);
                    let b = rng.gen_range(0..size);
                    values.swap(a, b);
                }
            }
        }
    }

    values
}
