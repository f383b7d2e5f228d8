//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use listdelta_core::log_op_start;
/// log_op_start!("diff");
/// log_op_start!("diff", before_sections = 3, after_sections = 4);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = listdelta_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = listdelta_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use listdelta_core::log_op_end;
/// log_op_end!("diff", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = listdelta_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = listdelta_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use listdelta_core::{log_op_error, errors::{ListDeltaError, Side}};
/// let err = ListDeltaError::DuplicateSectionIdentity { side: Side::Before, identity: 1 };
/// log_op_error!("diff", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err_ref: &$crate::errors::ListDeltaError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = listdelta_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err_ref.code(),
            err = %err_ref,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err_ref: &$crate::errors::ListDeltaError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = listdelta_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err_ref.code(),
            err = %err_ref,
            $($field)*
        );
    }};
}
