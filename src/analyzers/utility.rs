use tracing::warn;

use crate::columns::Resolution;
use crate::record::CleanRecord;

/// Percentage of `part` in `total`. Returns 0.0 for an empty total.
pub fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Case- and whitespace-insensitive form of a categorical value.
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Logs each column that fell back to a placeholder key.
pub(crate) fn warn_unmatched(records: &[CleanRecord], resolutions: &[&Resolution]) {
    if records.is_empty() {
        return;
    }
    for resolution in resolutions.iter().filter(|r| !r.matched) {
        warn!(column = %resolution.key, "Column not found in data, records will be excluded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_with_zero_total() {
        assert_eq!(pct(3, 0), 0.0);
    }

    #[test]
    fn test_pct_normal_values() {
        assert_eq!(pct(1, 2), 50.0);
        assert_eq!(pct(1, 4), 25.0);
        assert_eq!(pct(3, 3), 100.0);
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("  MaIzE "), "maize");
    }
}
