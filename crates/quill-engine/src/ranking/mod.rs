//! Ranking and filtering of scored suggestions.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use quill_core::{Category, EngineConfig};

use crate::engine::types::{QualityStats, Suggestion};

/// Order, cap, and filter suggestions.
///
/// Sorted by severity, confidence, and (optionally) impact score, all
/// descending; ties fall back to offset and rule id so the order never
/// depends on rule processing order. The list is truncated to
/// `max_suggestions` and then filtered by `min_confidence`.
pub fn rank(mut suggestions: Vec<Suggestion>, config: &EngineConfig) -> Vec<Suggestion> {
    suggestions.sort_by(|a, b| compare(a, b, config.prioritize_by_impact));
    suggestions.truncate(config.max_suggestions);
    suggestions.retain(|s| s.confidence >= config.min_confidence);
    suggestions
}

fn compare(a: &Suggestion, b: &Suggestion, by_impact: bool) -> Ordering {
    b.severity
        .cmp(&a.severity)
        .then_with(|| b.confidence.cmp(&a.confidence))
        .then_with(|| {
            if by_impact {
                b.impact.score().cmp(&a.impact.score())
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.offset.cmp(&b.offset))
        .then_with(|| a.rule_id.cmp(&b.rule_id))
        .then_with(|| a.length.cmp(&b.length))
}

pub fn quality_stats(suggestions: &[Suggestion]) -> QualityStats {
    if suggestions.is_empty() {
        return QualityStats::default();
    }
    let total = suggestions.len();
    let sum: u64 = suggestions.iter().map(|s| u64::from(s.confidence)).sum();
    let high_quality = suggestions.iter().filter(|s| s.confidence >= 80).count();
    let medium_quality = suggestions
        .iter()
        .filter(|s| (60..80).contains(&s.confidence))
        .count();
    QualityStats {
        average_confidence: sum as f64 / total as f64,
        high_quality,
        medium_quality,
        low_quality: total - high_quality - medium_quality,
        total,
    }
}

pub fn category_breakdown(suggestions: &[Suggestion]) -> BTreeMap<Category, usize> {
    let mut breakdown = BTreeMap::new();
    for s in suggestions {
        *breakdown.entry(s.category).or_insert(0) += 1;
    }
    breakdown
}
