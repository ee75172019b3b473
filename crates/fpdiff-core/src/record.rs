//! Fingerprint record grammar.
//!
//! One log line has the shape
//! `Object: <object>, Protocol: <protocol>, Hash: <fingerprint>`.
//! Anything else (blank lines, truncated writes, stray output) parses to
//! `None`; it is never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

fn record_pattern() -> &'static Regex {
    static RECORD_PATTERN: OnceLock<Regex> = OnceLock::new();
    RECORD_PATTERN.get_or_init(|| {
        Regex::new(r"^Object: (.*), Protocol: (.*), Hash: (.*)$")
            .expect("record pattern is a valid regex")
    })
}

/// Identifies one logical test case: the object description and the
/// protocol identifier, both verbatim from the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestKey {
    pub object: String,
    pub protocol: String,
}

impl TestKey {
    pub fn new(object: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            protocol: protocol.into(),
        }
    }
}

impl std::fmt::Display for TestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object: {}, Protocol: {}", self.object, self.protocol)
    }
}

/// Parse one log line into its test key and fingerprint.
///
/// The line is trimmed first. Captures are greedy left to right, so if a
/// separator literal appears more than once its last occurrence wins.
pub fn parse_record(line: &str) -> Option<(TestKey, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let caps = record_pattern().captures(line)?;
    let object = caps.get(1)?.as_str();
    let protocol = caps.get(2)?.as_str();
    let fingerprint = caps.get(3)?.as_str();

    Some((TestKey::new(object, protocol), fingerprint.to_string()))
}

/// A parsed line attributed to the source it came from.
///
/// Lives only as long as the row it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintRecord {
    pub source_id: Arc<str>,
    pub test_key: TestKey,
    pub fingerprint: String,
}

impl FingerprintRecord {
    /// Parse `line` and attribute it to `source_id`; `None` if the line is
    /// not a record.
    pub fn from_line(source_id: Arc<str>, line: &str) -> Option<Self> {
        let (test_key, fingerprint) = parse_record(line)?;
        Some(Self {
            source_id,
            test_key,
            fingerprint,
        })
    }
}
