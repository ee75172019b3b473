//! Difference report types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Field order is fixed so serialized reports are byte-stable across runs.

use crate::record::TestKey;
use crate::stats::ConsistencyStats;
use serde::{Deserialize, Serialize};

/// One source's fingerprint for a divergent row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceFingerprint {
    /// Display path of the fingerprint log
    pub source_id: String,
    /// Fingerprint exactly as logged
    pub fingerprint: String,
}

/// A row whose fingerprints are not all equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifferenceEntry {
    /// 1-based row number shared by every source
    pub row_number: u64,
    /// Test key of the first record in the row
    pub test_key: TestKey,
    /// Every record of the row, in source order
    pub fingerprints: Vec<SourceFingerprint>,
}

impl DifferenceEntry {
    pub fn distinct_fingerprint_count(&self) -> usize {
        let mut seen: Vec<&str> = self.fingerprints.iter().map(|f| f.fingerprint.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

/// Structured form of a finished comparison.
///
/// `stats` is `None` unless statistics were requested for the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonReport {
    pub entries: Vec<DifferenceEntry>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stats: Option<ConsistencyStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> DifferenceEntry {
        DifferenceEntry {
            row_number: 4,
            test_key: TestKey::new("b'x'", "3"),
            fingerprints: vec![
                SourceFingerprint {
                    source_id: "in/a_results.txt".into(),
                    fingerprint: "aa".into(),
                },
                SourceFingerprint {
                    source_id: "in/b_results.txt".into(),
                    fingerprint: "bb".into(),
                },
                SourceFingerprint {
                    source_id: "in/c_results.txt".into(),
                    fingerprint: "aa".into(),
                },
            ],
        }
    }

    #[test]
    fn test_distinct_fingerprint_count() {
        assert_eq!(entry().distinct_fingerprint_count(), 2);
    }

    #[test]
    fn test_report_json_omits_absent_stats() {
        let report = ComparisonReport {
            entries: vec![entry()],
            stats: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("stats").is_none());
        assert_eq!(value["entries"][0]["row_number"], 4);
        assert_eq!(value["entries"][0]["test_key"]["object"], "b'x'");
        assert_eq!(value["entries"][0]["fingerprints"][1]["source_id"], "in/b_results.txt");
    }

    #[test]
    fn test_report_json_includes_requested_stats() {
        let report = ComparisonReport {
            entries: Vec::new(),
            stats: Some(ConsistencyStats {
                comparable_rows: 10,
                divergent_rows: 0,
            }),
        };
        let text = serde_json::to_string(&report).unwrap();
        let back: ComparisonReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, report);
        assert!(text.contains("\"comparable_rows\":10"));
    }
}
