//! Column resolution under naming variance.
//!
//! All rows of one dataset share a header, so a logical column is resolved
//! once against the first record and the resulting key is reused for every
//! row.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::CleanRecord;

pub static REGION: &[&str] = &["Region"];

pub static CROP: &[&str] = &["Crop"];

pub static YIELD: &[&str] = &[
    "Yield (tons/hectare)",
    "yield (tons/hectare)",
    "Yield_tons_per_hectare",
    "yield_tons_per_hectare",
    "Yield",
];

/// Outcome of resolving one logical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Key to read from each record.
    pub key: String,
    /// `false` when `key` is the first candidate used as a placeholder and
    /// may not exist in the data.
    pub matched: bool,
}

/// Resolves `candidates` against the headers of `records`.
///
/// Matching is case-insensitive and follows candidate order. Without a match,
/// or for an empty record set, the first candidate is returned verbatim.
pub fn resolve(records: &[CleanRecord], candidates: &[&str]) -> Resolution {
    let fallback = Resolution {
        key: candidates.first().copied().unwrap_or_default().to_string(),
        matched: false,
    };

    let Some(first) = records.first() else {
        return fallback;
    };

    // Later headers win when two only differ in casing.
    let lookup: HashMap<String, &str> = first.keys().map(|k| (k.to_lowercase(), k)).collect();

    candidates
        .iter()
        .find_map(|candidate| lookup.get(&candidate.to_lowercase()))
        .map(|key| Resolution {
            key: key.to_string(),
            matched: true,
        })
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    fn record(keys: &[&str]) -> CleanRecord {
        keys.iter().map(|k| (*k, Value::Text("x".into()))).collect()
    }

    #[test]
    fn test_resolves_case_insensitively_to_original_casing() {
        let records = vec![record(&["REGION", "crop", "YIELD_TONS_PER_HECTARE"])];

        let region = resolve(&records, REGION);
        assert_eq!(region.key, "REGION");
        assert!(region.matched);

        let yld = resolve(&records, YIELD);
        assert_eq!(yld.key, "YIELD_TONS_PER_HECTARE");
        assert!(yld.matched);
    }

    #[test]
    fn test_candidate_order_wins() {
        let records = vec![record(&["Yield", "Yield (tons/hectare)"])];
        let resolution = resolve(&records, YIELD);
        assert_eq!(resolution.key, "Yield (tons/hectare)");
    }

    #[test]
    fn test_empty_records_fall_back_to_first_candidate() {
        let resolution = resolve(&[], YIELD);
        assert_eq!(resolution.key, "Yield (tons/hectare)");
        assert!(!resolution.matched);
    }

    #[test]
    fn test_no_match_falls_back_to_first_candidate() {
        let records = vec![record(&["Area", "Produce"])];
        let resolution = resolve(&records, CROP);
        assert_eq!(
            resolution,
            Resolution {
                key: "Crop".into(),
                matched: false
            }
        );
    }

    #[test]
    fn test_only_first_record_is_consulted() {
        let records = vec![record(&["Area"]), record(&["Region"])];
        assert!(!resolve(&records, REGION).matched);
    }

    #[test]
    fn test_empty_candidates() {
        let records = vec![record(&["Region"])];
        let resolution = resolve(&records, &[]);
        assert_eq!(resolution.key, "");
        assert!(!resolution.matched);
    }
}
