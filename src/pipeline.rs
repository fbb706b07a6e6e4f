//! One end-to-end run: load, normalize, aggregate, write reports.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::analyzers::{
    RegionHighYield, RegionYield, average_yield_by_region, percentage_high_yield_maize_by_region,
};
use crate::columns::{self, Resolution};
use crate::config::RunConfig;
use crate::error::LoadError;
use crate::loader::load_records;
use crate::normalize::{CoercionStats, NumericFields, normalize_with_stats};
use crate::output::{
    ensure_output_dir, write_average_yield_by_region, write_percentage_high_yield_maize_by_region,
};
use crate::record::CleanRecord;

/// Normalized records of one input file.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<CleanRecord>,
    pub coercion: CoercionStats,
}

/// How the logical columns resolved against a dataset's header.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub region_column: Resolution,
    pub crop_column: Resolution,
    pub yield_column: Resolution,
}

impl ColumnReport {
    pub fn all_matched(&self) -> bool {
        self.region_column.matched && self.crop_column.matched && self.yield_column.matched
    }
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub rows: usize,
    pub coercion: CoercionStats,
    pub columns: ColumnReport,
    pub threshold: f64,
    pub average_yield: Vec<RegionYield>,
    pub high_yield_maize: Vec<RegionHighYield>,
    pub average_yield_path: PathBuf,
    pub high_yield_maize_path: PathBuf,
}

/// Loads and normalizes the CSV file at `path`.
pub fn load_dataset(path: &Path, numeric: &NumericFields) -> Result<Dataset, LoadError> {
    let raw = load_records(path)?;
    let (records, coercion) = normalize_with_stats(&raw, numeric);

    if coercion.failed > 0 {
        warn!(
            failed = coercion.failed,
            numeric_fields = coercion.numeric_fields,
            "Some numeric values could not be parsed and were treated as missing"
        );
    }

    Ok(Dataset { records, coercion })
}

pub fn inspect_columns(records: &[CleanRecord]) -> ColumnReport {
    ColumnReport {
        region_column: columns::resolve(records, columns::REGION),
        crop_column: columns::resolve(records, columns::CROP),
        yield_column: columns::resolve(records, columns::YIELD),
    }
}

/// Runs both aggregations for `config` and writes their reports.
///
/// # Errors
///
/// Fails when the input cannot be loaded or a report cannot be written.
/// Malformed values inside the input never fail the run.
#[tracing::instrument(
    skip_all,
    fields(input = %config.input.display(), output_dir = %config.output_dir.display(), threshold = config.threshold)
)]
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let dataset = load_dataset(&config.input, &NumericFields::default())
        .with_context(|| format!("failed to load dataset from {}", config.input.display()))?;
    info!(rows = dataset.records.len(), "Dataset loaded");

    let columns = inspect_columns(&dataset.records);
    let average_yield = average_yield_by_region(&dataset.records);
    let high_yield_maize = percentage_high_yield_maize_by_region(&dataset.records, config.threshold);

    ensure_output_dir(&config.output_dir)?;
    let average_yield_path = write_average_yield_by_region(&config.output_dir, &average_yield)?;
    let high_yield_maize_path =
        write_percentage_high_yield_maize_by_region(&config.output_dir, &high_yield_maize)?;

    info!(
        regions = average_yield.len(),
        maize_regions = high_yield_maize.len(),
        "Reports written"
    );

    Ok(RunSummary {
        input: config.input.clone(),
        rows: dataset.records.len(),
        coercion: dataset.coercion,
        columns,
        threshold: config.threshold,
        average_yield,
        high_yield_maize,
        average_yield_path,
        high_yield_maize_path,
    })
}
