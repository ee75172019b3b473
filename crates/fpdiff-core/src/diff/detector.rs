//! Fingerprint comparison within one eligible row.

use crate::diff::model::{DifferenceEntry, SourceFingerprint};
use crate::scanner::Row;

/// Outcome of comparing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// All fingerprints equal (or nothing to compare against).
    Consistent,
    Divergent(DifferenceEntry),
}

/// Compare the fingerprints of `row`.
///
/// Only fingerprints are compared. In unguarded mode two records with
/// different test keys but equal fingerprints are therefore consistent,
/// and a divergent row is labelled with the first record's key.
pub fn detect(row: &Row) -> Verdict {
    let Some(first) = row.first() else {
        return Verdict::Consistent;
    };

    if row.distinct_fingerprints().len() < 2 {
        return Verdict::Consistent;
    }

    let fingerprints = row
        .records()
        .iter()
        .map(|r| SourceFingerprint {
            source_id: r.source_id.to_string(),
            fingerprint: r.fingerprint.clone(),
        })
        .collect();

    Verdict::Divergent(DifferenceEntry {
        row_number: row.number(),
        test_key: first.test_key.clone(),
        fingerprints,
    })
}
