use super::error_code::{self, QuillErrorCode};
use super::{CatalogError, ConfigError, RuleError};

/// Top-level error type for the Quill engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("rule not found: {id}")]
    RuleNotFound { id: String },

    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl QuillErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RuleNotFound { .. } => error_code::RULE_NOT_FOUND,
            Self::Rule(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type QuillResult<T> = Result<T, EngineError>;
