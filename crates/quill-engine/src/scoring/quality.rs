//! Multi-factor quality scoring.
//!
//! Four dimensions on a 0–100 scale are combined into the overall score
//! that becomes a suggestion's confidence:
//!
//! | dimension  | base | adjustments                                   | weight |
//! |------------|------|-----------------------------------------------|--------|
//! | accuracy   | 75   | ± half the weighted rule-factor deviation     | 0.30   |
//! | relevance  | 70   | +10 context on both sides, +5 common word     | 0.25   |
//! | impact     | 65   | +15 critical, +10 high, +5 medium             | 0.25   |
//! | confidence | 70   | +10 priority > 80, +5 priority > 60           | 0.20   |
//!
//! Negation (−20), conditional (−10), and question (−5) cues in the
//! preceding window are subtracted before clamping.

use quill_core::Severity;
use serde::Serialize;

use crate::matcher::context::{at_sentence_start, words, MatchContext};
use crate::rules::lexicon::LexiconId;
use crate::rules::types::{FactorKind, Rule};

pub const WEIGHT_ACCURACY: f64 = 0.30;
pub const WEIGHT_RELEVANCE: f64 = 0.25;
pub const WEIGHT_IMPACT: f64 = 0.25;
pub const WEIGHT_CONFIDENCE: f64 = 0.20;

const NEGATION_PENALTY: f64 = 20.0;
const CONDITIONAL_PENALTY: f64 = 10.0;
const QUESTION_PENALTY: f64 = 5.0;

/// One named contribution to a suggestion's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityFactorScore {
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

/// All dimensions for one match.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityScore {
    pub accuracy: f64,
    pub relevance: f64,
    pub impact: f64,
    pub confidence: f64,
    /// Weighted, penalized, rounded, and clamped.
    pub overall: u8,
    /// Rule factors followed by the four dimensions.
    pub factors: Vec<QualityFactorScore>,
}

/// Score a match produced by `rule`.
pub fn score(rule: &Rule, ctx: &MatchContext<'_>) -> QualityScore {
    let mut factors: Vec<QualityFactorScore> = rule
        .quality_factors
        .iter()
        .map(|f| QualityFactorScore {
            name: f.kind.name().to_string(),
            score: factor_score(f.kind, ctx),
            weight: f64::from(f.weight),
        })
        .collect();

    let accuracy = accuracy(&factors);
    let relevance = relevance(ctx);
    let impact = impact(rule.severity);
    let confidence = rule_confidence(rule.priority);

    let weighted = accuracy * WEIGHT_ACCURACY
        + relevance * WEIGHT_RELEVANCE
        + impact * WEIGHT_IMPACT
        + confidence * WEIGHT_CONFIDENCE;
    let overall = (weighted - context_penalty(ctx)).round().clamp(0.0, 100.0) as u8;

    factors.extend([
        dimension("accuracy", accuracy, WEIGHT_ACCURACY),
        dimension("relevance", relevance, WEIGHT_RELEVANCE),
        dimension("impact", impact, WEIGHT_IMPACT),
        dimension("confidence", confidence, WEIGHT_CONFIDENCE),
    ]);

    QualityScore { accuracy, relevance, impact, confidence, overall, factors }
}

/// Minimum overall score for a rule: the threshold scaled by priority.
pub fn minimum_quality(quality_threshold: u8, priority: u8) -> f64 {
    f64::from(quality_threshold) * f64::from(priority) / 100.0
}

fn dimension(name: &str, score: f64, weight: f64) -> QualityFactorScore {
    QualityFactorScore { name: name.to_string(), score, weight }
}

fn accuracy(factors: &[QualityFactorScore]) -> f64 {
    let total_weight: f64 = factors.iter().map(|f| f.weight).sum();
    if total_weight <= f64::EPSILON {
        return 75.0;
    }
    let deviation: f64 = factors.iter().map(|f| (f.score - 50.0) * f.weight).sum::<f64>() / total_weight;
    (75.0 + 0.5 * deviation).clamp(0.0, 100.0)
}

fn relevance(ctx: &MatchContext<'_>) -> f64 {
    let mut score = 70.0;
    if !ctx.preceding.trim().is_empty() && !ctx.following.trim().is_empty() {
        score += 10.0;
    }
    let common = LexiconId::CommonWords.lexicon();
    if words(ctx.matched).any(|w| common.contains(&w)) {
        score += 5.0;
    }
    score
}

fn impact(severity: Severity) -> f64 {
    65.0 + match severity {
        Severity::Critical => 15.0,
        Severity::High => 10.0,
        Severity::Medium => 5.0,
        Severity::Low | Severity::Suggestion => 0.0,
    }
}

fn rule_confidence(priority: u8) -> f64 {
    70.0 + if priority > 80 {
        10.0
    } else if priority > 60 {
        5.0
    } else {
        0.0
    }
}

fn context_penalty(ctx: &MatchContext<'_>) -> f64 {
    let negation = LexiconId::NegationWords.lexicon();
    let conditional = LexiconId::ConditionalWords.lexicon();
    let mut penalty = 0.0;
    if words(ctx.preceding).any(|w| negation.contains(&w)) {
        penalty += NEGATION_PENALTY;
    }
    if words(ctx.preceding).any(|w| conditional.contains(&w)) {
        penalty += CONDITIONAL_PENALTY;
    }
    if ctx.preceding.contains('?') {
        penalty += QUESTION_PENALTY;
    }
    penalty
}

fn factor_score(kind: FactorKind, ctx: &MatchContext<'_>) -> f64 {
    match kind {
        FactorKind::SentenceBoundary => {
            if straddles_sentence_boundary(ctx.matched) {
                20.0
            } else if at_sentence_start(ctx.text, ctx.start) {
                80.0
            } else {
                60.0
            }
        }
        FactorKind::MatchLength => match ctx.matched.chars().count() {
            0..=2 => 40.0,
            3..=40 => 80.0,
            _ => 55.0,
        },
        FactorKind::ProperNoun => {
            let skip_first = at_sentence_start(ctx.text, ctx.start);
            let capitalized_mid_sentence = ctx
                .matched
                .split_whitespace()
                .skip(usize::from(skip_first))
                .any(|w| {
                    let is_pronoun_i = w == "I" || w.starts_with("I'") || w.starts_with("I\u{2019}");
                    !is_pronoun_i && w.chars().next().is_some_and(char::is_uppercase)
                });
            if capitalized_mid_sentence {
                25.0
            } else {
                70.0
            }
        }
    }
}

fn straddles_sentence_boundary(matched: &str) -> bool {
    let mut chars = matched.trim_end().chars().peekable();
    while let Some(c) = chars.next() {
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin::builtin_rules;

    fn builtin(id: &str) -> Rule {
        builtin_rules().into_iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn agreement_at_sentence_start_scores_high() {
        let rule = builtin("sva-third-person-singular");
        let text = "He run fast.";
        let q = score(&rule, &MatchContext::new(text, 0, 6));
        assert!((q.accuracy - 88.0).abs() < 1e-6);
        assert_eq!(q.relevance, 75.0);
        assert_eq!(q.impact, 75.0);
        assert_eq!(q.confidence, 80.0);
        assert_eq!(q.overall, 80);
        assert_eq!(q.factors.len(), 2 + 4);
    }

    #[test]
    fn negation_in_preceding_window_lowers_score() {
        let rule = builtin("redundant-phrase");
        let plain = "We need advance planning for this.";
        let negated = "We do not need advance planning for this.";
        let start = plain.find("advance").unwrap();
        let a = score(&rule, &MatchContext::new(plain, start, start + 16));
        let start = negated.find("advance").unwrap();
        let b = score(&rule, &MatchContext::new(negated, start, start + 16));
        assert_eq!(a.overall, 78);
        assert_eq!(b.overall, 58);
    }

    #[test]
    fn no_factors_means_base_accuracy() {
        assert_eq!(accuracy(&[]), 75.0);
    }

    #[test]
    fn threshold_scales_with_priority() {
        assert_eq!(minimum_quality(60, 90), 54.0);
        assert_eq!(minimum_quality(60, 0), 0.0);
    }

    #[test]
    fn boundary_straddling_is_detected() {
        assert!(straddles_sentence_boundary("end. Start"));
        assert!(!straddles_sentence_boundary("e.g"));
        assert!(!straddles_sentence_boundary("done."));
    }
}
