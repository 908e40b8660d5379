//! # quill-core
//!
//! Foundation crate for the Quill suggestion engine.
//! Defines the shared taxonomy types, errors, configuration, and tracing setup.
//! The engine crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{
    CacheConfig, EngineConfig, EngineConfigOverrides, LimitsConfig, QuillConfig,
};
pub use errors::error_code::QuillErrorCode;
pub use errors::{CatalogError, ConfigError, EngineError, QuillResult, RuleError};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::taxonomy::{Category, DocumentType, RuleType, Severity, UserLevel};
