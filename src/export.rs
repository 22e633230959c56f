// src/export.rs
//! Export traces and results to various formats
//!
//! Supports:
//! - JSON (for renderers and analysis)
//! - CSV (for spreadsheets)

use crate::harness::{BenchmarkReport, EntryOutcome};
use crate::recording::Trace;
use crate::service::SortOutcome;
use crate::utils::errors::{EngineError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(EngineError::ExportFailed(format!(
                "Unsupported format: {}",
                other
            ))),
        }
    }
}

/// Exporter for traces, sort outcomes and benchmark reports
pub struct Exporter {
    format: ExportFormat,
    pretty: bool,
}

impl Exporter {
    /// Create a new exporter, pretty-printing JSON by default
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    /// Toggle pretty-printed JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Export a bare trace
    pub fn export_trace(&self, trace: &Trace) -> Result<String> {
        debug!("Exporting {} steps to {:?}", trace.len(), self.format);

        match self.format {
            ExportFormat::Json => self.to_json(trace),
            ExportFormat::Csv => Ok(trace_csv(trace)),
        }
    }

    /// Export a sort outcome; CSV carries the summary row only
    pub fn export_outcome(&self, outcome: &SortOutcome) -> Result<String> {
        match self.format {
            ExportFormat::Json => self.to_json(outcome),
            ExportFormat::Csv => Ok(format!(
                "algorithm,array_size,comparisons,swaps\n{},{},{},{}\n",
                outcome.algorithm,
                outcome.array_size,
                outcome.total_comparisons,
                outcome.total_swaps
            )),
        }
    }

    /// Export a ranked benchmark report
    pub fn export_report(&self, report: &BenchmarkReport) -> Result<String> {
        debug!(
            "Exporting {} benchmark results to {:?}",
            report.results.len(),
            self.format
        );

        match self.format {
            ExportFormat::Json => self.to_json(report),
            ExportFormat::Csv => Ok(report_csv(report)),
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };

        encoded.map_err(|e| EngineError::ExportFailed(format!("JSON serialization error: {}", e)))
    }
}

/// `<prefix>-YYYY-MM-DDTHH-MM-SS.<ext>`
pub fn suggested_filename(prefix: &str, format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "{}-{}.{}",
        prefix,
        at.format("%Y-%m-%dT%H-%M-%S"),
        format.extension()
    )
}

/// Write exported `contents` to a timestamped file in `dir`
pub fn write_to_dir(
    dir: &Path,
    prefix: &str,
    format: ExportFormat,
    contents: &str,
) -> Result<PathBuf> {
    let path = dir.join(suggested_filename(prefix, format, Utc::now()));
    fs::write(&path, contents)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}

fn trace_csv(trace: &Trace) -> String {
    let mut csv = String::from("step,type,indices,description,array\n");

    for (i, step) in trace.iter().enumerate() {
        let _ = writeln!(
            csv,
            "{},{},{},{},{}",
            i,
            step.kind(),
            join(&step.positions()),
            escape(&step.narrative),
            join(&step.snapshot)
        );
    }

    csv
}

fn report_csv(report: &BenchmarkReport) -> String {
    let mut csv = String::from("Algorithm,Time (ms),Space Complexity,Comparisons,Swaps,Steps\n");

    for entry in &report.results {
        let _ = match &entry.outcome {
            EntryOutcome::Completed(stats) => writeln!(
                csv,
                "{},{:.3},{},{},{},{}",
                entry.algorithm,
                stats.execution_time_us / 1000.0,
                stats.space_complexity,
                stats.comparisons,
                stats.swaps,
                stats.total_steps
            ),
            EntryOutcome::Failed(failure) => writeln!(
                csv,
                "{},{},,,,",
                entry.algorithm,
                escape(&format!("error: {}", failure.error))
            ),
        };
    }

    let fastest = report
        .fastest
        .map(|algorithm| algorithm.to_string())
        .unwrap_or_else(|| "none".to_string());

    let _ = write!(
        csv,
        "\nArray Size: {}\nFastest Algorithm: {}\nTimestamp: {}\n",
        report.array_size,
        fastest,
        report.timestamp.to_rfc3339()
    );

    csv
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn escape(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
