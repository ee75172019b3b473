//! Operation lifecycle macros.
//!
//! Every key they emit is a constant from `fpdiff_core_types::schema`.
//! Extra fields go after the fixed ones, in `tracing` field syntax.

/// Log the start of an operation.
///
/// ```
/// # use fpdiff_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare", source_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            { $crate::fpdiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::fpdiff_core_types::schema::FIELD_OP } = $op,
            { $crate::fpdiff_core_types::schema::FIELD_EVENT } =
                $crate::fpdiff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            { $crate::fpdiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::fpdiff_core_types::schema::FIELD_OP } = $op,
            { $crate::fpdiff_core_types::schema::FIELD_EVENT } =
                $crate::fpdiff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation.
///
/// ```
/// # use fpdiff_core::log_op_end;
/// log_op_end!("compare", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            { $crate::fpdiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::fpdiff_core_types::schema::FIELD_OP } = $op,
            { $crate::fpdiff_core_types::schema::FIELD_EVENT } =
                $crate::fpdiff_core_types::schema::EVENT_END,
            { $crate::fpdiff_core_types::schema::FIELD_DURATION_MS } = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            { $crate::fpdiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::fpdiff_core_types::schema::FIELD_OP } = $op,
            { $crate::fpdiff_core_types::schema::FIELD_EVENT } =
                $crate::fpdiff_core_types::schema::EVENT_END,
            { $crate::fpdiff_core_types::schema::FIELD_DURATION_MS } = $duration,
            $($field)*
        );
    };
}

/// Log a failed operation with the error's kind and stable code.
///
/// `$err` is anything that converts into [`ExError`](crate::errors::ExError).
///
/// ```
/// # use fpdiff_core::{log_op_error, errors::FpDiffError};
/// let err = FpDiffError::InputDirNotFound { path: "missing".to_string() };
/// log_op_error!("compare", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            { $crate::fpdiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::fpdiff_core_types::schema::FIELD_OP } = $op,
            { $crate::fpdiff_core_types::schema::FIELD_EVENT } =
                $crate::fpdiff_core_types::schema::EVENT_END_ERROR,
            { $crate::fpdiff_core_types::schema::FIELD_DURATION_MS } = $duration,
            { $crate::fpdiff_core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::fpdiff_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            { $crate::fpdiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::fpdiff_core_types::schema::FIELD_OP } = $op,
            { $crate::fpdiff_core_types::schema::FIELD_EVENT } =
                $crate::fpdiff_core_types::schema::EVENT_END_ERROR,
            { $crate::fpdiff_core_types::schema::FIELD_DURATION_MS } = $duration,
            { $crate::fpdiff_core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::fpdiff_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
            $($field)*
        );
    }};
}
