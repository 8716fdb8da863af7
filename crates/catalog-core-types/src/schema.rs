//! Canonical schema constants for structured logging and events
//!
//! The boundary macros emit these keys and the test capture reads them back,
//! so both sides stay in step.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Entity identifiers
pub const FIELD_CLUSTER_ID: &str = "cluster_id";
pub const FIELD_COMMAND_ID: &str = "command_id";

// Size of a cluster's command list after a replace
pub const FIELD_COMMANDS_LEN: &str = "commands_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERROR: &str = "error";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
