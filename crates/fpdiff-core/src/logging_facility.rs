//! Structured logging for fpdiff.
//!
//! Binaries call [`init`] once. Operation boundaries are logged with
//! `log_op_start!`, `log_op_end!` and `log_op_error!`; tests read events back
//! through [`test_capture`]. Logs never go to stdout, which belongs to reports.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
