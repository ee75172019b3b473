//! Row-level difference detection.
//!
//! Decides, for one eligible row, whether every source logged the same
//! fingerprint, and renders divergent rows for humans.
//!
//! ## Entry point
//!
//! ```ignore
//! use fpdiff_core::diff::{detect, Verdict};
//!
//! if let Verdict::Divergent(entry) = detect(&row) {
//!     print!("{}", fpdiff_core::diff::render_difference_block(&entry));
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Source order**: fingerprints in a [`DifferenceEntry`] appear in the order
//!   the sources were handed to the scanner.
//! - **Hash-only comparison**: test keys are never compared here; key agreement
//!   is the alignment guard's job.
//! - **Determinism**: the same row always renders to the same bytes.

pub mod detector;
pub mod human_summary;
pub mod model;

pub use detector::{detect, Verdict};
pub use human_summary::{render_difference_block, render_statistics};
pub use model::{ComparisonReport, DifferenceEntry, SourceFingerprint};
