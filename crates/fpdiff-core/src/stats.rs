//! Consistency counters over comparable rows.

use serde::{Deserialize, Serialize};

/// Running counts over eligible rows.
///
/// `divergent_rows` never exceeds `comparable_rows`: every divergent row is
/// also counted as comparable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyStats {
    pub comparable_rows: u64,
    pub divergent_rows: u64,
}

impl ConsistencyStats {
    pub fn record_consistent(&mut self) {
        self.comparable_rows += 1;
    }

    pub fn record_divergent(&mut self) {
        self.comparable_rows += 1;
        self.divergent_rows += 1;
    }

    /// Fraction of comparable rows that diverged; `None` when nothing was comparable.
    pub fn inconsistency_rate(&self) -> Option<f64> {
        if self.comparable_rows == 0 {
            None
        } else {
            Some(self.divergent_rows as f64 / self.comparable_rows as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_with_no_rate() {
        let stats = ConsistencyStats::default();
        assert_eq!(stats.comparable_rows, 0);
        assert_eq!(stats.divergent_rows, 0);
        assert_eq!(stats.inconsistency_rate(), None);
    }

    #[test]
    fn test_divergent_also_counts_as_comparable() {
        let mut stats = ConsistencyStats::default();
        stats.record_consistent();
        stats.record_consistent();
        stats.record_consistent();
        stats.record_divergent();
        assert_eq!(stats.comparable_rows, 4);
        assert_eq!(stats.divergent_rows, 1);
        assert_eq!(stats.inconsistency_rate(), Some(0.25));
    }
}
