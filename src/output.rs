//! Report persistence for aggregation results.
//!
//! Writes the average-yield CSV and the high-yield maize text report, and
//! supports pretty-printing or JSON logging of run summaries.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::{RegionHighYield, RegionYield};

pub const AVERAGE_YIELD_FILE: &str = "average_yield_by_region.csv";
pub const HIGH_YIELD_MAIZE_FILE: &str = "percentage_high_yield_maize_by_region.txt";

const HIGH_YIELD_MAIZE_TITLE: &str =
    "Percentage High-Yield Maize Harvests by Region in Tons/Hectare";

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl std::fmt::Debug) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Creates `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// Writes `average_yield_by_region.csv` into `dir`, returning its path.
///
/// One row per region after a `Region,Average Yield` header, averages
/// rounded to four decimals.
pub fn write_average_yield_by_region(dir: &Path, results: &[RegionYield]) -> Result<PathBuf> {
    let path = dir.join(AVERAGE_YIELD_FILE);
    debug!(path = %path.display(), rows = results.len(), "Writing average yield report");

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["Region", "Average Yield"])?;
    for row in results {
        writer.write_record([row.region.as_str(), format!("{:.4}", row.average_yield).as_str()])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

/// Renders the fixed-width high-yield maize report.
pub fn render_high_yield_maize(results: &[RegionHighYield]) -> String {
    let mut out = String::new();
    out.push_str(HIGH_YIELD_MAIZE_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(60));
    out.push('\n');
    for row in results {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<20} {:>6.2}% ({}/{})",
            row.region, row.percent_high, row.high_count, row.total_count
        );
    }
    out
}

/// Writes `percentage_high_yield_maize_by_region.txt` into `dir`, returning its path.
pub fn write_percentage_high_yield_maize_by_region(
    dir: &Path,
    results: &[RegionHighYield],
) -> Result<PathBuf> {
    let path = dir.join(HIGH_YIELD_MAIZE_FILE);
    debug!(path = %path.display(), rows = results.len(), "Writing high-yield maize report");

    fs::write(&path, render_high_yield_maize(results))
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
