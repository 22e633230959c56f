// src/utils/mod.rs
//! Common utilities and helpers
//!
//! - **Errors**: Crate-wide error type and `Result` alias
//! - **Config**: Layered engine configuration (defaults, file, environment)
//! - **Generator**: Sample input arrays for demos and benchmarks

pub mod config;
pub mod errors;
pub mod generator;

// Re-export commonly used types
pub use config::{EngineConfig, ExportConfig, LimitsConfig, LoggingConfig};
pub use errors::{EngineError, Result};
pub use generator::{generate, ArrayShape};
