//! Field normalization: trimming and numeric coercion.
//!
//! Which columns are numeric is decided by a [`NumericFields`] table keyed on
//! the lower-cased header spelling, so a dataset that writes
//! `Yield (tons/hectare)` and one that writes `yield_tons_per_hectare` are
//! coerced the same way.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::record::{CleanRecord, RawRecord, Value};

/// Known spellings of the numeric columns, lower-cased.
static DEFAULT_NUMERIC_SPELLINGS: &[&str] = &[
    // yield
    "yield",
    "yield (tons/hectare)",
    "yield_tons_per_hectare",
    "yield (t/ha)",
    // rainfall
    "rainfall",
    "rainfall (mm)",
    "rainfall_mm",
    // temperature
    "temperature",
    "temperature (c)",
    "temperature_c",
    "temperature_celsius",
];

/// Table of header spellings whose values are parsed as numbers.
#[derive(Debug, Clone)]
pub struct NumericFields {
    spellings: HashSet<String>,
}

impl Default for NumericFields {
    fn default() -> Self {
        Self::from_spellings(DEFAULT_NUMERIC_SPELLINGS.iter().copied())
    }
}

impl NumericFields {
    /// A table with no numeric columns: every value stays text.
    pub fn empty() -> Self {
        Self {
            spellings: HashSet::new(),
        }
    }

    pub fn from_spellings<I, S>(spellings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            spellings: spellings.into_iter().map(|s| fold(s.as_ref())).collect(),
        }
    }

    /// Adds another spelling to the table.
    pub fn with_spelling(mut self, spelling: &str) -> Self {
        self.spellings.insert(fold(spelling));
        self
    }

    /// Whether a header (in any casing, with surrounding whitespace) is numeric.
    pub fn is_numeric(&self, key: &str) -> bool {
        self.spellings.contains(&fold(key))
    }
}

/// Counters describing how numeric coercion went over one dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoercionStats {
    /// Numeric cells seen.
    pub numeric_fields: usize,
    pub parsed: usize,
    /// Empty numeric cells, mapped to `Missing`.
    pub empty: usize,
    /// Non-empty numeric cells that did not parse, mapped to `Missing`.
    pub failed: usize,
}

impl CoercionStats {
    pub fn missing(&self) -> usize {
        self.empty + self.failed
    }
}

/// Normalizes every record, preserving length and order.
pub fn normalize(rows: &[RawRecord], numeric: &NumericFields) -> Vec<CleanRecord> {
    normalize_with_stats(rows, numeric).0
}

/// Like [`normalize`], also returning coercion counters.
pub fn normalize_with_stats(
    rows: &[RawRecord],
    numeric: &NumericFields,
) -> (Vec<CleanRecord>, CoercionStats) {
    let mut stats = CoercionStats::default();

    let records = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.iter()
                .map(|(key, value)| {
                    let key = key.trim();
                    let value = value.trim();
                    if !numeric.is_numeric(key) {
                        return (key.to_string(), Value::Text(value.to_string()));
                    }

                    stats.numeric_fields += 1;
                    let coerced = coerce_number(value);
                    match coerced {
                        Value::Number(_) => stats.parsed += 1,
                        _ if value.is_empty() => stats.empty += 1,
                        _ => {
                            stats.failed += 1;
                            debug!(row = index, field = key, value, "Numeric coercion failed");
                        }
                    }
                    (key.to_string(), coerced)
                })
                .collect::<CleanRecord>()
        })
        .collect();

    (records, stats)
}

/// Parses a trimmed cell as a finite number, or `Missing`.
///
/// `NaN` and infinities parse as `f64` but are treated as `Missing` too.
pub fn coerce_number(value: &str) -> Value {
    let value = value.trim();
    if value.is_empty() {
        return Value::Missing;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::Missing,
    }
}

fn fold(key: &str) -> String {
    key.trim().to_lowercase()
}
