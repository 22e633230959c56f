// src/utils/config.rs
//! Engine configuration
//!
//! Configuration is layered with the `config` crate:
//!
//! 1. Built-in defaults
//! 2. `config/sort-trace.{toml,yaml,json}` (optional) or an explicit file
//! 3. Environment variables, e.g. `SORT_TRACE__LIMITS__MAX_ELEMENTS=200`

use crate::export::ExportFormat;
use crate::utils::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "config/sort-trace";
const ENV_PREFIX: &str = "SORT_TRACE";

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub logging: LoggingConfig,
    pub limits: LimitsConfig,
    pub export: ExportConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Input limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum array length accepted at the caller boundary.
    /// Every step stores a full snapshot, so trace memory grows with n².
    pub max_elements: usize,

    /// Maximum counting table size (`max - min + 1`) for counting-sort
    pub max_counting_range: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_elements: 100,
            max_counting_range: 1_000_000,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            pretty: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false));

        Self::finish(builder)
    }

    /// Load configuration from an explicit file, then the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = config::Config::builder().add_source(config::File::from(path));

        Self::finish(builder)
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: EngineConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Reject limits that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_elements == 0 {
            return Err(EngineError::ConfigError(
                "limits.max_elements must be greater than 0".to_string(),
            ));
        }

        if self.limits.max_counting_range == 0 {
            return Err(EngineError::ConfigError(
                "limits.max_counting_range must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.limits.max_elements, 100);
        assert_eq!(config.limits.max_counting_range, 1_000_000);
        assert_eq!(config.export.format, ExportFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[limits]
max_elements = 64

[export]
format = "csv"
pretty = false
"#
        )
        .unwrap();

        let config = EngineConfig::load_from(file.path()).unwrap();
        assert_eq!(config.limits.max_elements, 64);
        // Unset keys keep their defaults
        assert_eq!(config.limits.max_counting_range, 1_000_000);
        assert_eq!(config.export.format, ExportFormat::Csv);
        assert!(!config.export.pretty);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file() {
        let result = EngineConfig::load_from("/nonexistent/sort-trace.toml");
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[limits]\nmax_elements = 0").unwrap();

        let result = EngineConfig::load_from(file.path());
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }
}
