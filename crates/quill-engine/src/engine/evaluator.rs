//! Single-rule evaluation: match, generate replacements, score, build
//! suggestions.

use quill_core::{RuleError, Severity, UserLevel};

use super::types::Suggestion;
use crate::matcher::context::{context_around, MatchContext, RuleContext, SNIPPET_WIDTH};
use crate::matcher::{CompiledPattern, Deadline};
use crate::replacement::candidates_for;
use crate::rules::types::Rule;
use crate::scoring::{classify, minimum_quality, score};

/// Whether a rule applies to the language, document, and writer of a call.
pub fn applies_to(rule: &Rule, ctx: &RuleContext<'_>) -> bool {
    let language = ctx.language.to_ascii_lowercase();
    if !language.starts_with(&rule.language.to_ascii_lowercase()) {
        return false;
    }
    if let Some(dialect) = &rule.dialect {
        if !dialect.eq_ignore_ascii_case(ctx.language) {
            return false;
        }
    }
    if !rule.document_types.is_empty() && !rule.document_types.contains(&ctx.document_type) {
        return false;
    }
    !(ctx.user_level == UserLevel::Expert && rule.severity == Severity::Suggestion)
}

/// Run one rule over the text of `ctx`.
///
/// Matches whose strategy yields no usable replacement are dropped unless
/// the rule is advisory; matches scoring below the rule's minimum quality
/// are dropped too.
pub fn evaluate_rule(
    rule: &Rule,
    pattern: &CompiledPattern,
    ctx: &RuleContext<'_>,
    quality_threshold: u8,
    deadline: &Deadline,
) -> Result<Vec<Suggestion>, RuleError> {
    let text = ctx.text;
    let matches = pattern.find_matches(rule, text, deadline)?;
    if matches.is_empty() {
        return Ok(Vec::new());
    }

    let floor = minimum_quality(quality_threshold, rule.priority);
    let impact = classify(rule.category, rule.severity);
    let mut suggestions = Vec::with_capacity(matches.len());

    for m in &matches {
        deadline.check(&rule.id)?;

        let replacements = candidates_for(&rule.replacement, text, m);
        if replacements.is_empty() && !rule.replacement.is_flag_only() {
            continue;
        }

        let quality = score(rule, &MatchContext::new(text, m.start, m.end));
        if f64::from(quality.overall) < floor {
            tracing::trace!(
                rule_id = %rule.id,
                offset = m.start,
                overall = quality.overall,
                "match below quality floor"
            );
            continue;
        }

        suggestions.push(Suggestion {
            id: format!("{}-{}", rule.id, m.start),
            rule_id: rule.id.clone(),
            rule_type: rule.rule_type,
            message: rule.message.clone(),
            replacements,
            offset: m.start,
            length: m.end - m.start,
            context: context_around(text, m.start, m.end, SNIPPET_WIDTH),
            category: rule.category,
            severity: rule.severity,
            confidence: quality.overall,
            quality_factors: quality.factors,
            impact,
            tags: rule.tags.clone(),
        });
    }

    Ok(suggestions)
}
