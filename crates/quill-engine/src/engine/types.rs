//! Engine output types.

use std::collections::BTreeMap;

use quill_core::{Category, RuleType, Severity};
use serde::Serialize;

use crate::scoring::{ImpactAnalysis, QualityFactorScore};

/// One actionable finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// `{rule_id}-{offset}`
    pub id: String,
    pub rule_id: String,
    pub rule_type: RuleType,
    pub message: String,
    /// Ordered best first; empty for advisory suggestions.
    pub replacements: Vec<String>,
    /// Byte offset into the checked text.
    pub offset: usize,
    /// Byte length of the flagged span.
    pub length: usize,
    pub context: String,
    pub category: Category,
    pub severity: Severity,
    /// 0–100
    pub confidence: u8,
    pub quality_factors: Vec<QualityFactorScore>,
    pub impact: ImpactAnalysis,
    pub tags: Vec<String>,
}

impl Suggestion {
    /// The flagged slice of `text`.
    pub fn span<'t>(&self, text: &'t str) -> &'t str {
        &text[self.offset..self.offset + self.length]
    }

    /// `text` with the best replacement applied, if there is one.
    pub fn apply(&self, text: &str) -> Option<String> {
        let best = self.replacements.first()?;
        Some(format!(
            "{}{}{}",
            &text[..self.offset],
            best,
            &text[self.offset + self.length..]
        ))
    }
}

/// Summary of confidence across the returned suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualityStats {
    pub average_confidence: f64,
    /// confidence >= 80
    pub high_quality: usize,
    /// 60 <= confidence < 80
    pub medium_quality: usize,
    pub low_quality: usize,
    pub total: usize,
}

/// Result of one `check_text` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineResult {
    pub suggestions: Vec<Suggestion>,
    /// Rules that passed configuration filtering and were run.
    pub total_rules_processed: usize,
    pub execution_time_ms: f64,
    pub quality_stats: QualityStats,
    pub category_breakdown: BTreeMap<Category, usize>,
}

impl EngineResult {
    /// Export as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Static description of a loaded engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineInfo {
    pub version: &'static str,
    pub total_rules: usize,
    pub active_rules: usize,
    pub rules_by_category: BTreeMap<Category, usize>,
    pub rules_by_type: BTreeMap<RuleType, usize>,
    pub supported_categories: Vec<Category>,
    pub supported_rule_types: Vec<RuleType>,
    pub lexicon_count: usize,
    pub cache_enabled: bool,
}
