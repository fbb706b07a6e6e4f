use std::collections::BTreeMap;

use tracing::debug;

use crate::analyzers::types::RegionHighYield;
use crate::analyzers::utility::{fold, pct, warn_unmatched};
use crate::columns;
use crate::record::CleanRecord;

/// Yield (same unit as the data) a record must strictly exceed to count as high.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

pub const MAIZE: &str = "maize";

#[derive(Default)]
struct Acc {
    high: usize,
    total: usize,
}

/// Percentage of maize records per region whose yield exceeds `threshold`.
pub fn percentage_high_yield_maize_by_region(
    records: &[CleanRecord],
    threshold: f64,
) -> Vec<RegionHighYield> {
    high_yield_share_by_region(records, MAIZE, threshold)
}

/// Percentage of `crop` records per region whose yield exceeds `threshold`.
///
/// Crop values are compared case- and whitespace-insensitively. Only records
/// with a non-empty region, a non-empty crop and a numeric yield are counted,
/// and regions without any such record of `crop` are omitted.
pub fn high_yield_share_by_region(
    records: &[CleanRecord],
    crop: &str,
    threshold: f64,
) -> Vec<RegionHighYield> {
    let region_key = columns::resolve(records, columns::REGION);
    let crop_key = columns::resolve(records, columns::CROP);
    let yield_key = columns::resolve(records, columns::YIELD);
    warn_unmatched(records, &[&region_key, &crop_key, &yield_key]);

    let wanted = fold(crop);
    let mut by_region: BTreeMap<&str, Acc> = BTreeMap::new();

    for record in records {
        let (Some(region), Some(value_crop), Some(value)) = (
            record.text(&region_key.key),
            record.text(&crop_key.key),
            record.number(&yield_key.key),
        ) else {
            continue;
        };
        if fold(value_crop) != wanted {
            continue;
        }

        let acc = by_region.entry(region).or_default();
        acc.total += 1;
        if value > threshold {
            acc.high += 1;
        }
    }

    debug!(crop = %wanted, threshold, regions = by_region.len(), "Counted high-yield records");

    by_region
        .into_iter()
        .filter(|(_, acc)| acc.total > 0)
        .map(|(region, acc)| RegionHighYield {
            region: region.to_string(),
            percent_high: pct(acc.high, acc.total),
            high_count: acc.high,
            total_count: acc.total,
        })
        .collect()
}
