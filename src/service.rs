// src/service.rs
//! Caller-facing boundary
//!
//! Validates requests and drives the engines. This is where `EmptyInput`,
//! `InputTooLarge` and `UnknownAlgorithm` are raised; engines themselves
//! never see an invalid request.

use crate::engines::{self, Algorithm};
use crate::harness::{round_micros, BenchmarkHarness, BenchmarkReport};
use crate::recording::{summarize, Trace};
use crate::utils::config::EngineConfig;
use crate::utils::errors::{EngineError, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Result of a single traced sort
#[derive(Debug, Clone, Serialize)]
pub struct SortOutcome {
    pub algorithm: Algorithm,
    pub array_size: usize,
    pub steps: Trace,
    pub execution_time_us: f64,
    pub total_comparisons: usize,
    pub total_swaps: usize,
}

impl SortOutcome {
    /// Sorted array from the trace's `Done` record
    pub fn sorted(&self) -> &[i64] {
        self.steps.final_array().unwrap_or_default()
    }
}

/// Entry point for sort and benchmark requests
#[derive(Debug, Clone, Default)]
pub struct SortService {
    config: EngineConfig,
}

impl SortService {
    /// Create a service with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Trace one algorithm over `array`
    pub fn sort(&self, array: &[i64], algorithm: &str) -> Result<SortOutcome> {
        self.validate_input(array)?;
        let algorithm: Algorithm = algorithm.parse()?;

        debug!("Sorting {} elements with {}", array.len(), algorithm);

        let engine = engines::build(algorithm, &self.config.limits);

        let start = Instant::now();
        let trace = engine.trace(array)?;
        let elapsed = start.elapsed();

        let summary = summarize(&trace);
        let execution_time_us = round_micros(elapsed.as_secs_f64() * 1_000_000.0);

        info!(
            "{} sorted {} elements in {}us: {} comparisons, {} swaps, {} steps",
            algorithm,
            array.len(),
            execution_time_us,
            summary.total_comparisons,
            summary.total_swaps,
            summary.step_count
        );

        Ok(SortOutcome {
            algorithm,
            array_size: array.len(),
            steps: trace,
            execution_time_us,
            total_comparisons: summary.total_comparisons,
            total_swaps: summary.total_swaps,
        })
    }

    /// Run all seven engines over `array` and rank them by time
    pub fn benchmark_all(&self, array: &[i64]) -> Result<BenchmarkReport> {
        self.validate_input(array)?;

        let harness = BenchmarkHarness::new(&self.config.limits);
        Ok(harness.run(array))
    }

    fn validate_input(&self, array: &[i64]) -> Result<()> {
        if array.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let max = self.config.limits.max_elements;
        if array.len() > max {
            return Err(EngineError::InputTooLarge {
                len: array.len(),
                max,
            });
        }

        Ok(())
    }
}
