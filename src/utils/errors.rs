// src/utils/errors.rs
//! Error types for the sort trace engine

use thiserror::Error;

/// Errors surfaced by the engine and its caller boundary
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller supplied a zero-length array
    #[error("Array cannot be empty")]
    EmptyInput,

    /// Algorithm identifier is not one of the seven supported engines
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Input is longer than `limits.max_elements`
    #[error("Array has {len} elements, the configured maximum is {max}")]
    InputTooLarge { len: usize, max: usize },

    /// Counting table would exceed the configured size
    #[error("Value range {range} exceeds the counting table limit of {max}")]
    ValueRangeTooLarge { range: u128, max: u64 },

    /// Event not accepted through the recorder's write path
    #[error("Invalid step: {0}")]
    InvalidStep(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Whether the error stems from the caller's request rather than the engine
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::EmptyInput
                | EngineError::UnknownAlgorithm(_)
                | EngineError::InputTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
