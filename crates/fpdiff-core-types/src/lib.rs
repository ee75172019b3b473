//! Core types shared across fpdiff facilities
//!
//! This crate provides foundational types used by both the logging facility
//! and the comparison driver:
//!
//! - **Correlation types**: RunId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
