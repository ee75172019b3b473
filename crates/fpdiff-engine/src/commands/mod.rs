//! Command orchestration layer.
//!
//! Commands wire the filesystem collaborators to the comparison engine and
//! own lifecycle logging for the operations they run.

pub mod compare;
