//! Run configuration.

use std::path::PathBuf;

use serde::Serialize;

use crate::analyzers::DEFAULT_THRESHOLD;

pub const DEFAULT_INPUT: &str = "crop_yield.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Inputs of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Yield a record must strictly exceed to count as high.
    pub threshold: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}
