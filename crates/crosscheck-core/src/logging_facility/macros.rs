//! Operation logging macros
//!
//! Every instrumented operation emits a `start` event and exactly one of
//! `end` or `end_error`, each tagged with `component`, `op` and `event`.
//! Extra `key = value` fields are passed through to `tracing` unchanged.

/// Log the start of an operation
///
/// ```
/// # use crosscheck_core::log_op_start;
/// log_op_start!("run_category");
/// log_op_start!("run_category", category = "CodeValues", scenario_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use crosscheck_core::log_op_end;
/// log_op_end!("run_category", duration_ms = 42, diff_count = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log a failed operation
///
/// The error expression is converted into an `XcError`, whose kind and code
/// are attached as `err.kind` / `err.code`.
///
/// ```
/// # use crosscheck_core::log_op_error;
/// # use crosscheck_core::errors::{XcError, XcErrorKind};
/// let err = XcError::new(XcErrorKind::Io).with_message("disk full");
/// log_op_error!("run_category", err, duration_ms = 10, category = "ROP report");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let xc_err: $crate::errors::XcError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?xc_err.kind(),
            err.code = xc_err.code(),
            error = %xc_err,
            $($($field)*)?
        );
    }};
}
