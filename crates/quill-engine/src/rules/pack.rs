//! Custom rule packs loaded from TOML.
//!
//! ```toml
//! [[rules]]
//! id = "house-style-utilize"
//! category = "wordiness"
//! severity = "low"
//! rule_type = "conciseness"
//! priority = 60
//! message = "Prefer 'use'."
//! pattern = { kind = "regex", regex = '\butili[sz]e\b' }
//! replacement = { kind = "fixed", candidates = ["use"] }
//! ```

use std::path::Path;

use quill_core::CatalogError;
use serde::Deserialize;

use super::types::Rule;

/// A set of rules parsed from one TOML document. Not yet validated: the
/// catalog does that when the pack is added.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulePack {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RulePack {
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::PackIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
