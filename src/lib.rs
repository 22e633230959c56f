// src/lib.rs
//! Sort Trace Engine Library
//!
//! Instrumented sorting algorithms that record every comparison, exchange
//! and placement as an ordered trace, so a renderer can replay a sort step
//! by step.
//!
//! # Architecture
//!
//! The engine is structured into several key modules:
//!
//! - **recording**: Step schema, append-only trace recorder, aggregation
//! - **engines**: The seven instrumented sorting algorithms
//! - **harness**: Runs all engines on one input and ranks them by time
//! - **service**: Caller boundary (`sort`, `benchmark_all`) and validation
//! - **export**: JSON/CSV rendering of traces and reports
//! - **observability**: Logging setup
//! - **utils**: Errors, configuration, sample input generation
//!
//! ```text
//! array + "quick" → SortService::sort → QuickSort::trace → TraceRecorder
//!                                                              ↓
//!                     SortOutcome ← summarize() ←           Trace
//! ```

pub mod engines;
pub mod export;
pub mod harness;
pub mod observability;
pub mod recording;
pub mod service;
pub mod utils;

// Re-export commonly used types
pub use engines::{Algorithm, SortEngine};
pub use export::{ExportFormat, Exporter};
pub use harness::{BenchmarkEntry, BenchmarkHarness, BenchmarkReport};
pub use recording::{Step, StepEvent, StepKind, Trace, TraceRecorder, TraceSummary};
pub use service::{SortOutcome, SortService};
pub use utils::config::EngineConfig;
pub use utils::errors::{EngineError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Engine build information
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
}

impl BuildInfo {
    /// Build information stamped by build.rs
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_hash: GIT_HASH,
            build_timestamp: env!("BUILD_TIMESTAMP"),
            rustc_version: env!("RUSTC_VERSION"),
        }
    }
}
