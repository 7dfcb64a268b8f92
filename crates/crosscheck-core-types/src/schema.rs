//! Field keys and event names shared by the log macros and the test
//! capture layer.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Run identifiers
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_OPERATION: &str = "operation";
pub const FIELD_BACKEND: &str = "backend";
pub const FIELD_SCENARIO: &str = "scenario";

// Counters
pub const FIELD_SCENARIO_COUNT: &str = "scenario_count";
pub const FIELD_DIFF_COUNT: &str = "diff_count";
pub const FIELD_CHANGE_COUNT: &str = "change_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
