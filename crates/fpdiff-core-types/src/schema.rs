//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Comparison identifiers
pub const FIELD_SOURCE_ID: &str = "source_id";
pub const FIELD_ROW_NUMBER: &str = "row_number";

// Collection sizes
pub const FIELD_SOURCE_COUNT: &str = "source_count";
pub const FIELD_ROWS_SCANNED: &str = "rows_scanned";
pub const FIELD_COMPARABLE_ROWS: &str = "comparable_rows";
pub const FIELD_DIVERGENT_ROWS: &str = "divergent_rows";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
