//! Configuration loading errors.

use std::path::PathBuf;

use super::error_code::{self, QuillErrorCode};

/// Errors that can occur while loading configuration.
///
/// Unknown keys and out-of-range values are not errors: unknown keys are
/// ignored and numbers are clamped when the configuration is resolved.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QuillErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => error_code::CONFIG_PARSE_ERROR,
            Self::Io { .. } => error_code::CONFIG_IO_ERROR,
        }
    }
}
