//! Misspellings, missing apostrophes, and dialect consistency.

use quill_core::{Category, RuleType, Severity};

use super::table;
use crate::rules::lexicon::LexiconId;
use crate::rules::types::{FactorKind, Rule, RulePattern};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "common-misspelling",
            Category::Spelling,
            Severity::High,
            RuleType::Spelling,
            90,
            RulePattern::Words { lexicon: LexiconId::Misspellings },
            "Possible spelling mistake.",
            table(LexiconId::Misspellings),
        )
        .with_factors(&[(FactorKind::MatchLength, 0.5), (FactorKind::ProperNoun, 0.5)])
        .with_tags(&["spelling", "typo"])
        .with_examples(&[
            ("We will definately come.", "We will definitely come."),
            ("Teh results are in.", "The results are in."),
        ]),
        Rule::new(
            "missing-apostrophe",
            Category::Spelling,
            Severity::Medium,
            RuleType::Spelling,
            80,
            RulePattern::Words { lexicon: LexiconId::MissingApostrophes },
            "This contraction needs an apostrophe.",
            table(LexiconId::MissingApostrophes),
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["spelling", "apostrophe"])
        .with_examples(&[("I dont know.", "I don't know.")]),
        Rule::new(
            "american-spelling",
            Category::Consistency,
            Severity::Low,
            RuleType::Consistency,
            60,
            RulePattern::Words { lexicon: LexiconId::BritishToAmerican },
            "Use American spelling for consistency.",
            table(LexiconId::BritishToAmerican),
        )
        .for_dialect("en-US")
        .with_tags(&["dialect", "spelling"])
        .with_examples(&[("I lost my favourite pen.", "I lost my favorite pen.")]),
        Rule::new(
            "british-spelling",
            Category::Consistency,
            Severity::Low,
            RuleType::Consistency,
            60,
            RulePattern::Words { lexicon: LexiconId::AmericanToBritish },
            "Use British spelling for consistency.",
            table(LexiconId::AmericanToBritish),
        )
        .for_dialect("en-GB")
        .with_tags(&["dialect", "spelling"])
        .with_examples(&[("I lost my favorite pen.", "I lost my favourite pen.")]),
    ]
}
