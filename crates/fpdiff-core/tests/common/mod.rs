use fpdiff_core::{
    ComparisonEngine, ComparisonReport, EngineOptions, LineSource, MemoryReportSink, RunSummary,
    SynchronizedScanner, TextReportSink,
};
use sha2::{Digest, Sha256};
use std::io::Cursor;

/// SHA-256 hex digest of `payload`, the shape real producers log.
#[allow(dead_code)]
pub fn fingerprint(payload: &str) -> String {
    hex::encode(Sha256::digest(payload.as_bytes()))
}

/// Format one log line.
#[allow(dead_code)]
pub fn record_line(object: &str, protocol: u8, hash: &str) -> String {
    format!("Object: {object}, Protocol: {protocol}, Hash: {hash}")
}

/// Build an in-memory scanner; each source is `(source_id, lines)`.
///
/// Every line is newline-terminated, so an empty `lines` is an empty log.
#[allow(dead_code)]
pub fn scanner_from(sources: &[(&str, Vec<String>)]) -> SynchronizedScanner<Cursor<Vec<u8>>> {
    SynchronizedScanner::new(
        sources
            .iter()
            .map(|(id, lines)| {
                let text: String = lines.iter().map(|line| format!("{line}\n")).collect();
                LineSource::new(*id, Cursor::new(text.into_bytes()))
            })
            .collect(),
    )
}

/// Run the engine into a memory sink.
#[allow(dead_code)]
pub fn run_structured(
    sources: &[(&str, Vec<String>)],
    options: EngineOptions,
) -> (RunSummary, ComparisonReport) {
    let mut sink = MemoryReportSink::new();
    let summary = ComparisonEngine::new(options)
        .run(&mut scanner_from(sources), &mut sink)
        .unwrap();
    (summary, sink.into_report())
}

/// Run the engine into a text sink and return the report bytes as a string.
#[allow(dead_code)]
pub fn run_text(sources: &[(&str, Vec<String>)], options: EngineOptions) -> String {
    let mut sink = TextReportSink::new(Vec::new());
    ComparisonEngine::new(options)
        .run(&mut scanner_from(sources), &mut sink)
        .unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}
