//! Built-in English rules.

mod grammar;
mod punctuation;
mod spelling;
mod style;
mod usage;

use super::lexicon::LexiconId;
use super::types::{ReplacementStrategy, Rule, RulePattern};

/// Every built-in rule, grouped by area.
pub fn builtin_rules() -> Vec<Rule> {
    let mut rules = Vec::with_capacity(56);
    rules.extend(grammar::rules());
    rules.extend(spelling::rules());
    rules.extend(usage::rules());
    rules.extend(punctuation::rules());
    rules.extend(style::rules());
    rules
}

fn regex(pattern: &str) -> RulePattern {
    RulePattern::Regex {
        regex: pattern.to_string(),
        focus: None,
    }
}

fn focused(pattern: &str, group: usize) -> RulePattern {
    RulePattern::Regex {
        regex: pattern.to_string(),
        focus: Some(group),
    }
}

fn swap(group: usize, lexicon: LexiconId) -> ReplacementStrategy {
    ReplacementStrategy::LookupSwap { group, lexicon }
}

fn table(lexicon: LexiconId) -> ReplacementStrategy {
    ReplacementStrategy::LookupTable { lexicon }
}
