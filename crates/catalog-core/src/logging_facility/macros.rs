//! Boundary logging macros
//!
//! Every boundary event carries `component`, `op`, `event` and the
//! correlation ids of the `RequestContext` it was logged under. Field keys
//! are the ones listed in `catalog_core_types::schema`.

/// Log the start of a catalog operation
///
/// ```
/// # use catalog_core::log_op_start;
/// # use catalog_core_types::RequestContext;
/// let ctx = RequestContext::new();
/// log_op_start!("add_command", &ctx);
/// log_op_start!("add_command", &ctx, cluster_id = "c1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr, $ctx:expr $(, $($field:tt)*)?) => {{
        let ctx: &$crate::catalog_core_types::RequestContext = $ctx;
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::catalog_core_types::schema::EVENT_START,
            request_id = ctx.request_id.as_str(),
            trace_id = ctx.trace_id.as_ref().map(|id| id.as_str()),
            $($($field)*)?
        );
    }};
}

/// Log the successful end of a catalog operation
///
/// ```
/// # use catalog_core::log_op_end;
/// # use catalog_core_types::RequestContext;
/// let ctx = RequestContext::new();
/// log_op_end!("add_command", &ctx, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, $ctx:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ctx: &$crate::catalog_core_types::RequestContext = $ctx;
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::catalog_core_types::schema::EVENT_END,
            request_id = ctx.request_id.as_str(),
            trace_id = ctx.trace_id.as_ref().map(|id| id.as_str()),
            duration_ms = $duration,
            $($($field)*)?
        );
    }};
}

/// Log a failed catalog operation
///
/// The error is converted into an `ExError` stamped with the context's
/// request and trace ids. Its kind, stable code and rendered form are logged.
///
/// ```
/// # use catalog_core::{log_op_error, errors::CatalogError};
/// # use catalog_core_types::RequestContext;
/// let ctx = RequestContext::new();
/// let err = CatalogError::ClusterNotFound { cluster_id: "c1".to_string() };
/// log_op_error!("add_command", &ctx, err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $ctx:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ctx: &$crate::catalog_core_types::RequestContext = $ctx;
        let ex_err = $crate::errors::ExError::from($err).with_context(ctx);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::catalog_core_types::schema::EVENT_END_ERROR,
            request_id = ctx.request_id.as_str(),
            trace_id = ctx.trace_id.as_ref().map(|id| id.as_str()),
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            error = %ex_err,
            $($($field)*)?
        );
    }};
}
