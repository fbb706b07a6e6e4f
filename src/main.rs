//! CLI entry point for the crop yield statistics tool.
//!
//! Provides subcommands for producing the regional yield reports and for
//! checking how a dataset's columns are recognized.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crop_yield_stats::analyzers::DEFAULT_THRESHOLD;
use crop_yield_stats::config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, RunConfig};
use crop_yield_stats::normalize::NumericFields;
use crop_yield_stats::output::{print_json, print_pretty};
use crop_yield_stats::pipeline::{self, inspect_columns, load_dataset};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "crop_yield_stats")]
#[command(about = "Regional yield statistics from agricultural CSV records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute regional yield statistics and write both reports
    Report {
        /// CSV file with Region, Crop and Yield columns
        #[arg(short, long, env = "CROP_YIELD_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Directory the reports are written to (created if absent)
        #[arg(short, long, env = "CROP_YIELD_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Maize yield that must be strictly exceeded to count as high
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Log the run summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show how the Region, Crop and Yield columns resolve for a dataset
    Columns {
        /// CSV file to inspect
        #[arg(short, long, env = "CROP_YIELD_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/crop_yield_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("crop_yield_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            output_dir,
            threshold,
            json,
        } => {
            let config = RunConfig::new(input, output_dir).with_threshold(threshold);
            let summary = pipeline::run(&config)?;

            for row in &summary.average_yield {
                info!(
                    region = %row.region,
                    average_yield = row.average_yield,
                    records = row.record_count,
                    "Average yield"
                );
            }
            for row in &summary.high_yield_maize {
                info!(
                    region = %row.region,
                    percent_high = row.percent_high,
                    high = row.high_count,
                    total = row.total_count,
                    "High-yield maize"
                );
            }

            if json {
                print_json(&summary)?;
            } else {
                print_pretty(&summary);
            }

            info!(
                average_yield = %summary.average_yield_path.display(),
                high_yield_maize = %summary.high_yield_maize_path.display(),
                "Reports saved"
            );
        }
        Commands::Columns { input } => {
            let dataset = load_dataset(&input, &NumericFields::default())?;
            let report = inspect_columns(&dataset.records);

            for (logical, resolution) in [
                ("region", &report.region_column),
                ("crop", &report.crop_column),
                ("yield", &report.yield_column),
            ] {
                if resolution.matched {
                    info!(logical, column = %resolution.key, "Column resolved");
                } else {
                    warn!(logical, fallback = %resolution.key, "Column not found");
                }
            }

            info!(
                rows = dataset.records.len(),
                numeric_fields = dataset.coercion.numeric_fields,
                parsed = dataset.coercion.parsed,
                empty = dataset.coercion.empty,
                failed = dataset.coercion.failed,
                "Numeric coercion summary"
            );
        }
    }

    Ok(())
}
