use std::collections::BTreeMap;

use tracing::debug;

use crate::analyzers::types::RegionYield;
use crate::analyzers::utility::warn_unmatched;
use crate::columns;
use crate::record::CleanRecord;

#[derive(Default)]
struct Acc {
    sum: f64,
    count: usize,
}

/// Mean yield per region across all crops, sorted by region name.
///
/// Only records with a non-empty region and a numeric yield contribute.
pub fn average_yield_by_region(records: &[CleanRecord]) -> Vec<RegionYield> {
    let region_key = columns::resolve(records, columns::REGION);
    let yield_key = columns::resolve(records, columns::YIELD);
    warn_unmatched(records, &[&region_key, &yield_key]);

    let mut by_region: BTreeMap<&str, Acc> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let (Some(region), Some(value)) = (
            record.text(&region_key.key),
            record.number(&yield_key.key),
        ) else {
            skipped += 1;
            continue;
        };

        let acc = by_region.entry(region).or_default();
        acc.sum += value;
        acc.count += 1;
    }

    debug!(
        regions = by_region.len(),
        skipped, "Averaged yield by region"
    );

    by_region
        .into_iter()
        .filter(|(_, acc)| acc.count > 0)
        .map(|(region, acc)| RegionYield {
            region: region.to_string(),
            average_yield: acc.sum / acc.count as f64,
            record_count: acc.count,
        })
        .collect()
}
