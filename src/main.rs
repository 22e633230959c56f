// src/main.rs
//! Sort Trace CLI
//!
//! Records step-by-step sorting traces and benchmarks the seven engines,
//! printing JSON or CSV to stdout.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sort_trace_engine::export::{write_to_dir, ExportFormat, Exporter};
use sort_trace_engine::observability::init_tracing;
use sort_trace_engine::utils::generator::{generate, ArrayShape};
use sort_trace_engine::{EngineConfig, EngineError, SortService};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Record and compare sorting algorithm traces.
#[derive(Parser)]
#[command(name = "sort-trace", version, about = "Record and compare sorting algorithm traces")]
struct Cli {
    /// Configuration file (default: config/sort-trace.toml if present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format: json or csv (default: from configuration).
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Write output to a timestamped file in this directory instead of stdout.
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace one algorithm over the input.
    Sort {
        /// bubble, selection, insertion, merge, quick, heap or counting.
        #[arg(short, long, default_value = "bubble")]
        algorithm: String,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Run all seven algorithms and rank them by execution time.
    Bench {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print a generated array.
    Generate {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Values to sort; generated when omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Generated array shape: random, sorted, reversed or nearly.
    #[arg(long, default_value = "random")]
    shape: String,

    /// Generated array size.
    #[arg(long, default_value_t = 20)]
    size: usize,

    /// Seed for reproducible generation.
    #[arg(long)]
    seed: Option<u64>,
}

impl Commands {
    /// Prefix of the exported file name
    fn file_prefix(&self) -> &'static str {
        match self {
            Commands::Sort { .. } => "sort-trace",
            Commands::Bench { .. } => "sorting-trial",
            Commands::Generate { .. } => "array",
        }
    }
}

impl InputArgs {
    fn resolve(&self) -> sort_trace_engine::Result<Vec<i64>> {
        if !self.values.is_empty() {
            return Ok(self.values.clone());
        }

        let shape: ArrayShape = self.shape.parse()?;
        Ok(generate(shape, self.size, self.seed))
    }
}

fn run(
    command: &Commands,
    service: &SortService,
    exporter: &Exporter,
) -> sort_trace_engine::Result<String> {
    match command {
        Commands::Sort { algorithm, input } => {
            let array = input.resolve()?;
            let outcome = service.sort(&array, algorithm)?;
            exporter.export_outcome(&outcome)
        }
        Commands::Bench { input } => {
            let array = input.resolve()?;
            let report = service.benchmark_all(&array)?;
            exporter.export_report(&report)
        }
        Commands::Generate { input } => {
            let array = input.resolve()?;
            Ok(serde_json::to_string(&array)?)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::load()?,
    };

    init_tracing(&config.logging)?;
    info!("Starting sort-trace v{}", env!("CARGO_PKG_VERSION"));

    let format = match &cli.format {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => config.export.format,
    };
    let exporter = Exporter::new(format).with_pretty(config.export.pretty);
    let service = SortService::new(config);

    let output = match run(&cli.command, &service, &exporter) {
        Ok(output) => output,
        Err(e) if e.is_client_error() => return Ok(reject(&e)),
        Err(e) => return Err(e.into()),
    };

    // Generated arrays are always JSON
    let file_format = match cli.command {
        Commands::Generate { .. } => ExportFormat::Json,
        _ => format,
    };

    match &cli.output_dir {
        Some(dir) => {
            let path = write_to_dir(dir, cli.command.file_prefix(), file_format, &output)
                .with_context(|| format!("writing to {}", dir.display()))?;
            println!("{}", path.display());
        }
        None => println!("{}", output.trim_end()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Report a request the caller can fix; exits with the usage status
fn reject(e: &EngineError) -> ExitCode {
    error!("Request rejected: {}", e);
    eprintln!("error: {}", e);
    ExitCode::from(2)
}
