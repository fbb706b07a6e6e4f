//! Region-level aggregation over normalized records.
//!
//! Both passes resolve their columns once, scan the records a single time with
//! a private accumulator, and emit results sorted by region name. Records
//! lacking a region or a numeric yield are skipped rather than reported.

pub mod high_yield;
pub mod region_yield;
pub mod types;
pub mod utility;

pub use high_yield::{
    DEFAULT_THRESHOLD, high_yield_share_by_region, percentage_high_yield_maize_by_region,
};
pub use region_yield::average_yield_by_region;
pub use types::{RegionHighYield, RegionYield};
