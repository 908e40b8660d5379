//! Stable error codes shared by all Quill error types.

/// Implemented by every Quill error enum.
pub trait QuillErrorCode {
    /// A stable, SCREAMING_SNAKE_CASE identifier for the error variant.
    fn error_code(&self) -> &'static str;
}

pub const RULE_PATTERN_INVALID: &str = "RULE_PATTERN_INVALID";
pub const RULE_PANICKED: &str = "RULE_PANICKED";
pub const RULE_TIMEOUT: &str = "RULE_TIMEOUT";
pub const CALL_BUDGET_EXHAUSTED: &str = "CALL_BUDGET_EXHAUSTED";

pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_IO_ERROR: &str = "CONFIG_IO_ERROR";

pub const CATALOG_DUPLICATE_RULE: &str = "CATALOG_DUPLICATE_RULE";
pub const CATALOG_INVALID_RULE: &str = "CATALOG_INVALID_RULE";
pub const CATALOG_PACK_ERROR: &str = "CATALOG_PACK_ERROR";

pub const RULE_NOT_FOUND: &str = "RULE_NOT_FOUND";
