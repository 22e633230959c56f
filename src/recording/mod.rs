// src/recording/mod.rs
//! Step recording and trace aggregation
//!
//! This module provides the trace schema every engine writes into:
//!
//! - **Step**: Tagged record of one event (compare, swap, placement, pivot, done)
//! - **Recorder**: Append-only trace recorder, the sole write path into a trace
//! - **Aggregator**: Derives comparison/swap totals and the final array
//!
//! # Architecture
//!
//! ```text
//! Engine → record(event, &work, narrative) → [Step, Step, ...]
//!             (snapshot copied)                      ↓
//!                                        finish(sorted) → Done{totals}
//!                                                    ↓
//!                                                  Trace
//!                                                    ↓
//!                                      summarize() → TraceSummary
//! ```

pub mod aggregator;
pub mod recorder;
pub mod step;

// Re-export commonly used types
pub use aggregator::{summarize, OperationCounts, TraceSummary};
pub use recorder::{Trace, TraceRecorder};
pub use step::{Comparison, Step, StepContext, StepEvent, StepKind};
