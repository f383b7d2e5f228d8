//! Canonical schema constants for structured logging and events
//!
//! These constants keep field naming consistent across all log events
//! emitted by the reconciliation engine and its callers.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Snapshot shape, per side
pub const FIELD_BEFORE_SECTIONS: &str = "before_sections";
pub const FIELD_AFTER_SECTIONS: &str = "after_sections";
pub const FIELD_BEFORE_ROWS: &str = "before_rows";
pub const FIELD_AFTER_ROWS: &str = "after_rows";

// Edit script shape
pub const FIELD_OP_COUNT: &str = "op_count";

// Identity hashes in diagnostics
pub const FIELD_IDENTITY: &str = "identity";

// Error fields
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_field_keys_are_non_empty() {
        for key in [
            FIELD_COMPONENT,
            FIELD_OP,
            FIELD_EVENT,
            FIELD_DURATION_MS,
            FIELD_BEFORE_SECTIONS,
            FIELD_AFTER_SECTIONS,
            FIELD_BEFORE_ROWS,
            FIELD_AFTER_ROWS,
            FIELD_OP_COUNT,
        ] {
            assert!(!key.is_empty());
        }
    }
}
