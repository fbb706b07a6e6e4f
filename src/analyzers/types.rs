//! Result rows produced by the aggregation passes.

use serde::Serialize;

/// Mean yield of one region across all crops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionYield {
    pub region: String,
    pub average_yield: f64,
    /// Records that contributed to the mean.
    pub record_count: usize,
}

/// Share of a region's records of one crop whose yield exceeded a threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionHighYield {
    pub region: String,
    /// In `[0, 100]`.
    pub percent_high: f64,
    pub high_count: usize,
    /// Always positive.
    pub total_count: usize,
}
