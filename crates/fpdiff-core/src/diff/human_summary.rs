//! Plain-text rendering of difference blocks and the statistics summary.
//!
//! This is the byte format written to `hash_differences_<mode>.txt`.

use crate::diff::model::DifferenceEntry;
use crate::stats::ConsistencyStats;

/// Render one difference block, including its trailing blank line.
pub fn render_difference_block(entry: &DifferenceEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("--- Difference at line {} ---\n", entry.row_number));
    out.push_str(&format!("{}\n", entry.test_key));
    for fp in &entry.fingerprints {
        out.push_str(&format!("File: {}, Hash: {}\n", fp.source_id, fp.fingerprint));
    }
    out.push('\n');
    out
}

/// Render the statistics summary that closes a report.
pub fn render_statistics(stats: &ConsistencyStats) -> String {
    let mut out = String::from("\n=== Statistical results ===\n");
    out.push_str(&format!(
        "Effective comparison of data volume: {}\n",
        stats.comparable_rows
    ));
    out.push_str(&format!(
        "Number of hash inconsistencies: {}\n",
        stats.divergent_rows
    ));
    match stats.inconsistency_rate() {
        Some(rate) => out.push_str(&format!("Inconsistency rate: {:.2}%\n", rate * 100.0)),
        None => out.push_str("No valid comparison data available\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::SourceFingerprint;
    use crate::record::TestKey;

    fn entry() -> DifferenceEntry {
        DifferenceEntry {
            row_number: 1,
            test_key: TestKey::new("42", "2"),
            fingerprints: vec![
                SourceFingerprint {
                    source_id: "d/a_results.txt".into(),
                    fingerprint: "abc".into(),
                },
                SourceFingerprint {
                    source_id: "d/b_results.txt".into(),
                    fingerprint: "def".into(),
                },
            ],
        }
    }

    #[test]
    fn test_block_format() {
        assert_eq!(
            render_difference_block(&entry()),
            "--- Difference at line 1 ---\n\
             Object: 42, Protocol: 2\n\
             File: d/a_results.txt, Hash: abc\n\
             File: d/b_results.txt, Hash: def\n\
             \n"
        );
    }

    #[test]
    fn test_statistics_with_rate() {
        let stats = ConsistencyStats {
            comparable_rows: 8,
            divergent_rows: 1,
        };
        assert_eq!(
            render_statistics(&stats),
            "\n=== Statistical results ===\n\
             Effective comparison of data volume: 8\n\
             Number of hash inconsistencies: 1\n\
             Inconsistency rate: 12.50%\n"
        );
    }

    #[test]
    fn test_statistics_without_comparable_rows() {
        let text = render_statistics(&ConsistencyStats::default());
        assert!(text.ends_with("Number of hash inconsistencies: 0\nNo valid comparison data available\n"));
        assert!(!text.contains("Inconsistency rate"));
    }

    #[test]
    fn test_rate_rounds_to_two_decimals() {
        let stats = ConsistencyStats {
            comparable_rows: 3,
            divergent_rows: 1,
        };
        assert!(render_statistics(&stats).contains("Inconsistency rate: 33.33%\n"));
    }
}
