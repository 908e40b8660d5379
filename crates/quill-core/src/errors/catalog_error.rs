//! Rule catalog errors, raised when a custom rule pack fails validation.

use std::path::PathBuf;

use super::error_code::{self, QuillErrorCode};

/// Errors that can occur while building or extending a rule catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate rule id: {id}")]
    DuplicateRule { id: String },

    #[error("invalid rule '{id}': {reason}")]
    InvalidRule { id: String, reason: String },

    #[error("failed to parse rule pack: {0}")]
    PackParse(#[from] toml::de::Error),

    #[error("failed to read rule pack {path}: {source}")]
    PackIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QuillErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateRule { .. } => error_code::CATALOG_DUPLICATE_RULE,
            Self::InvalidRule { .. } => error_code::CATALOG_INVALID_RULE,
            Self::PackParse(_) | Self::PackIo { .. } => error_code::CATALOG_PACK_ERROR,
        }
    }
}
