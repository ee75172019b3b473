//! Alignment guard.
//!
//! Positional alignment breaks as soon as one producer emits a different
//! sequence of test cases. When the guard is on, a row whose records name
//! more than one test key is discarded before the fingerprints are looked at.

use crate::scanner::Row;
use serde::{Deserialize, Serialize};

/// Whether rows must agree on their test key before they are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Any row with at least one record is compared. The reported key is
    /// the first record's.
    #[default]
    Unguarded,
    /// Rows with more than one distinct test key are dropped.
    Guarded,
}

impl AlignmentPolicy {
    pub fn is_guarded(self) -> bool {
        matches!(self, AlignmentPolicy::Guarded)
    }
}

/// What the guard decided for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// No parsed records; neither comparable nor divergent.
    Empty,
    /// Records disagree on the test key; dropped from comparison and stats.
    Misaligned { distinct_keys: usize },
    /// Row goes on to the difference detector.
    Eligible,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentGuard {
    policy: AlignmentPolicy,
}

impl AlignmentGuard {
    pub fn new(policy: AlignmentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> AlignmentPolicy {
        self.policy
    }

    pub fn admit(&self, row: &Row) -> Admission {
        if row.is_empty() {
            return Admission::Empty;
        }
        if self.policy.is_guarded() {
            let distinct_keys = row.distinct_test_keys().len();
            if distinct_keys > 1 {
                return Admission::Misaligned { distinct_keys };
            }
        }
        Admission::Eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FingerprintRecord;
    use std::sync::Arc;

    fn row(lines: &[(&str, &str)]) -> Row {
        Row::new(
            1,
            lines
                .iter()
                .filter_map(|(id, line)| FingerprintRecord::from_line(Arc::from(*id), line))
                .collect(),
        )
    }

    #[test]
    fn test_empty_row_is_never_eligible() {
        let empty = Row::new(3, Vec::new());
        assert_eq!(AlignmentGuard::new(AlignmentPolicy::Guarded).admit(&empty), Admission::Empty);
        assert_eq!(AlignmentGuard::new(AlignmentPolicy::Unguarded).admit(&empty), Admission::Empty);
    }

    #[test]
    fn test_guarded_drops_mixed_keys() {
        let r = row(&[
            ("a", "Object: X, Protocol: 1, Hash: h1"),
            ("b", "Object: X, Protocol: 1, Hash: h1"),
            ("c", "Object: Y, Protocol: 1, Hash: h2"),
        ]);
        assert_eq!(
            AlignmentGuard::new(AlignmentPolicy::Guarded).admit(&r),
            Admission::Misaligned { distinct_keys: 2 }
        );
        assert_eq!(AlignmentGuard::new(AlignmentPolicy::Unguarded).admit(&r), Admission::Eligible);
    }

    #[test]
    fn test_protocol_difference_counts_as_distinct_key() {
        let r = row(&[
            ("a", "Object: X, Protocol: 1, Hash: h"),
            ("b", "Object: X, Protocol: 2, Hash: h"),
        ]);
        assert!(matches!(
            AlignmentGuard::new(AlignmentPolicy::Guarded).admit(&r),
            Admission::Misaligned { .. }
        ));
    }

    #[test]
    fn test_single_record_is_eligible_under_guard() {
        let r = row(&[("a", "Object: X, Protocol: 1, Hash: h")]);
        assert_eq!(AlignmentGuard::new(AlignmentPolicy::Guarded).admit(&r), Admission::Eligible);
    }

    #[test]
    fn test_default_policy_is_unguarded() {
        assert_eq!(AlignmentGuard::default().policy(), AlignmentPolicy::Unguarded);
    }
}
