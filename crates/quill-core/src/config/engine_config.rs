//! Engine configuration: the resolved per-call settings and the partial
//! overrides callers pass in.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::taxonomy::{Category, DocumentType, UserLevel};

pub const DEFAULT_MIN_CONFIDENCE: u8 = 50;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 100;
pub const DEFAULT_QUALITY_THRESHOLD: u8 = 60;
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const MAX_SUGGESTIONS_LIMIT: usize = 1_000;

/// Fully resolved engine configuration.
///
/// Sets are ordered so that the canonical serialization used for cache keys
/// does not depend on insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub enabled_categories: BTreeSet<Category>,
    pub min_confidence: u8,
    pub max_suggestions: usize,
    pub quality_threshold: u8,
    pub language: String,
    pub document_type: DocumentType,
    pub user_level: UserLevel,
    pub prioritize_by_impact: bool,
    pub enable_advanced_rules: bool,
    /// Rules switched off for this session, regardless of their definition.
    pub disabled_rules: BTreeSet<String>,
    /// Rules switched on for this session even if defined as disabled.
    pub enabled_rules: BTreeSet<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled_categories: Category::all().iter().copied().collect(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            quality_threshold: DEFAULT_QUALITY_THRESHOLD,
            language: DEFAULT_LANGUAGE.to_string(),
            document_type: DocumentType::General,
            user_level: UserLevel::Intermediate,
            prioritize_by_impact: true,
            enable_advanced_rules: false,
            disabled_rules: BTreeSet::new(),
            enabled_rules: BTreeSet::new(),
        }
    }
}

impl EngineConfig {
    /// Return a new config with `overrides` applied on top of `self`.
    pub fn merge(&self, overrides: &EngineConfigOverrides) -> EngineConfig {
        let mut merged = self.clone();
        merged.apply(overrides);
        merged
    }

    /// Apply `overrides` in place. Numeric values are clamped into range.
    pub fn apply(&mut self, overrides: &EngineConfigOverrides) {
        if let Some(ref categories) = overrides.enabled_categories {
            self.enabled_categories = categories.iter().copied().collect();
        }
        if let Some(v) = overrides.min_confidence {
            self.min_confidence = clamp_percent(v as f64);
        }
        if let Some(v) = overrides.max_suggestions {
            self.max_suggestions = v.clamp(1, MAX_SUGGESTIONS_LIMIT as i64) as usize;
        }
        if let Some(v) = overrides.quality_threshold {
            self.quality_threshold = clamp_percent(v);
        }
        if let Some(ref lang) = overrides.language {
            let lang = lang.trim();
            if !lang.is_empty() {
                self.language = lang.to_string();
            }
        }
        if let Some(v) = overrides.document_type {
            self.document_type = v;
        }
        if let Some(v) = overrides.user_level {
            self.user_level = v;
        }
        if let Some(v) = overrides.prioritize_by_impact {
            self.prioritize_by_impact = v;
        }
        if let Some(v) = overrides.enable_advanced_rules {
            self.enable_advanced_rules = v;
        }
        if let Some(ref ids) = overrides.disabled_rules {
            self.disabled_rules = ids.iter().cloned().collect();
        }
        if let Some(ref ids) = overrides.enabled_rules {
            self.enabled_rules = ids.iter().cloned().collect();
        }
    }

    /// Deterministic serialization used as the configuration half of a cache key.
    pub fn canonical_json(&self) -> String {
        // Only BTreeSets, strings, and scalars: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Toggle a single rule for this session.
    pub fn set_rule_enabled(&mut self, rule_id: &str, enabled: bool) {
        if enabled {
            self.disabled_rules.remove(rule_id);
            self.enabled_rules.insert(rule_id.to_string());
        } else {
            self.enabled_rules.remove(rule_id);
            self.disabled_rules.insert(rule_id.to_string());
        }
    }
}

fn clamp_percent(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 100.0) as u8
}

/// Partial configuration supplied per call (or loaded from TOML).
///
/// Every field is optional; `None` keeps the session default. Unknown keys
/// are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfigOverrides {
    pub enabled_categories: Option<Vec<Category>>,
    pub min_confidence: Option<i64>,
    pub max_suggestions: Option<i64>,
    pub quality_threshold: Option<f64>,
    pub language: Option<String>,
    pub document_type: Option<DocumentType>,
    pub user_level: Option<UserLevel>,
    pub prioritize_by_impact: Option<bool>,
    pub enable_advanced_rules: Option<bool>,
    pub disabled_rules: Option<Vec<String>>,
    pub enabled_rules: Option<Vec<String>>,
}

impl EngineConfigOverrides {
    pub fn with_categories(mut self, categories: &[Category]) -> Self {
        self.enabled_categories = Some(categories.to_vec());
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: i64) -> Self {
        self.min_confidence = Some(min_confidence);
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: i64) -> Self {
        self.max_suggestions = Some(max_suggestions);
        self
    }

    pub fn with_quality_threshold(mut self, quality_threshold: f64) -> Self {
        self.quality_threshold = Some(quality_threshold);
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self
    }

    pub fn with_user_level(mut self, user_level: UserLevel) -> Self {
        self.user_level = Some(user_level);
        self
    }

    pub fn with_prioritize_by_impact(mut self, on: bool) -> Self {
        self.prioritize_by_impact = Some(on);
        self
    }

    pub fn with_advanced_rules(mut self, on: bool) -> Self {
        self.enable_advanced_rules = Some(on);
        self
    }

    pub fn with_disabled_rules(mut self, ids: &[&str]) -> Self {
        self.disabled_rules = Some(ids.iter().map(|s| s.to_string()).collect());
        self
    }
}
