//! Error types for every Quill subsystem.
//!
//! Each enum implements [`QuillErrorCode`] so callers (and logs) can key on a
//! stable string code instead of matching on `Display` output.

pub mod error_code;

mod catalog_error;
mod config_error;
mod engine_error;
mod rule_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use engine_error::{EngineError, QuillResult};
pub use rule_error::RuleError;
