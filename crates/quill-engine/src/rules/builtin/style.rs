//! Conciseness, engagement, delivery, formality, and clarity.

use quill_core::{Category, DocumentType, RuleType, Severity};

use super::{focused, regex, table};
use crate::rules::lexicon::LexiconId;
use crate::rules::types::{FactorKind, Guard, ReplacementStrategy, Rule, RulePattern};

const FORMAL_DOCUMENTS: &[DocumentType] =
    &[DocumentType::Academic, DocumentType::Business, DocumentType::Technical];

pub(super) fn rules() -> Vec<Rule> {
    vec![
        // ── Conciseness ──
        Rule::new(
            "redundant-phrase",
            Category::Redundancy,
            Severity::Low,
            RuleType::Conciseness,
            70,
            RulePattern::Phrases { lexicon: LexiconId::Redundancies },
            "This phrase is redundant.",
            table(LexiconId::Redundancies),
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["redundancy", "concise"])
        .with_examples(&[
            ("We need advance planning for this.", "We need planning for this."),
            ("The end result was fine.", "The result was fine."),
        ]),
        Rule::new(
            "absolute-modifier",
            Category::Redundancy,
            Severity::Low,
            RuleType::Conciseness,
            65,
            regex(r"\b(very|really|extremely|totally|quite)\s+(unique|perfect|essential|complete|absolute|impossible|infinite|final)\b"),
            "Absolute adjectives do not need an intensifier.",
            ReplacementStrategy::KeepGroups { groups: vec![2] },
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["redundancy"])
        .with_examples(&[("It is a very unique idea.", "It is a unique idea.")]),
        Rule::new(
            "wordy-phrase",
            Category::Wordiness,
            Severity::Low,
            RuleType::Conciseness,
            65,
            RulePattern::Phrases { lexicon: LexiconId::WordyPhrases },
            "A shorter phrase says the same thing.",
            table(LexiconId::WordyPhrases),
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["wordiness", "concise"])
        .with_examples(&[("We left early in order to beat traffic.", "We left early to beat traffic.")]),
        // ── Engagement ──
        Rule::new(
            "weak-intensifier",
            Category::WeakLanguage,
            Severity::Suggestion,
            RuleType::Engagement,
            55,
            regex(r"\b(very|really|quite|so)\s+([a-z]+)\b"),
            "A stronger word is more vivid than an intensifier.",
            ReplacementStrategy::LookupGroup { group: 2, lexicon: LexiconId::StrongWords },
        )
        .with_guards(vec![Guard::GroupIn { group: 2, lexicon: LexiconId::StrongWords }])
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["engagement", "vocabulary"])
        .with_examples(&[("The food was very good.", "The food was excellent.")]),
        Rule::new(
            "cliche",
            Category::Cliche,
            Severity::Low,
            RuleType::Engagement,
            60,
            RulePattern::Phrases { lexicon: LexiconId::Cliches },
            "This phrase is a cliché.",
            table(LexiconId::Cliches),
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["engagement", "cliche"])
        .with_examples(&[("At the end of the day, we won.", "Ultimately, we won.")]),
        // ── Delivery ──
        Rule::new(
            "hedging",
            Category::Hedging,
            Severity::Suggestion,
            RuleType::Delivery,
            50,
            RulePattern::Phrases { lexicon: LexiconId::HedgingPhrases },
            "Hedging weakens the statement. State it directly.",
            ReplacementStrategy::FlagOnly,
        )
        .with_tags(&["delivery", "confidence"])
        .with_examples(&[("I think that we should go.", "We should go.")]),
        Rule::new(
            "filler-opener",
            Category::FillerWords,
            Severity::Suggestion,
            RuleType::Delivery,
            50,
            focused(
                r"(?:^|[.!?]\s+)((basically|actually|literally|honestly|obviously),?\s+([a-z]))",
                1,
            ),
            "This opening word adds nothing.",
            ReplacementStrategy::template(&["$3"]),
        )
        .with_tags(&["delivery", "filler"])
        .with_examples(&[("Basically, we should go.", "We should go.")]),
        // ── Formality ──
        Rule::new(
            "contraction-in-formal-text",
            Category::Formality,
            Severity::Suggestion,
            RuleType::Style,
            55,
            RulePattern::Words { lexicon: LexiconId::Contractions },
            "Spell out contractions in formal writing.",
            table(LexiconId::Contractions),
        )
        .for_documents(FORMAL_DOCUMENTS)
        .with_tags(&["formality", "contraction"])
        .with_examples(&[("We don't agree.", "We do not agree.")]),
        Rule::new(
            "informal-word",
            Category::Formality,
            Severity::Suggestion,
            RuleType::Style,
            55,
            RulePattern::Words { lexicon: LexiconId::InformalWords },
            "This word is informal.",
            table(LexiconId::InformalWords),
        )
        .for_documents(FORMAL_DOCUMENTS)
        .with_tags(&["formality", "register"])
        .with_examples(&[("We are gonna need more data.", "We are going to need more data.")]),
        // ── Clarity ──
        Rule::new(
            "passive-voice",
            Category::PassiveVoice,
            Severity::Suggestion,
            RuleType::Clarity,
            50,
            regex(r"\b(is|are|was|were|been|being|be)\s+([a-z]+ed)\b"),
            "Passive voice can hide who acts. Consider the active voice.",
            ReplacementStrategy::FlagOnly,
        )
        .advanced()
        .with_guards(vec![Guard::GroupNotIn { group: 2, lexicon: LexiconId::AdjectivalParticiples }])
        .with_tags(&["clarity", "voice"])
        .with_examples(&[("The ball was kicked by Sam.", "Sam kicked the ball.")]),
        Rule::new(
            "vague-word",
            Category::Clarity,
            Severity::Suggestion,
            RuleType::Clarity,
            45,
            RulePattern::Words { lexicon: LexiconId::VagueWords },
            "This word is vague. Be specific.",
            ReplacementStrategy::FlagOnly,
        )
        .advanced()
        .with_tags(&["clarity", "vocabulary"])
        .with_examples(&[("There are many things to do.", "There are many tasks to do.")]),
        Rule::new(
            "long-sentence",
            Category::Clarity,
            Severity::Suggestion,
            RuleType::Clarity,
            40,
            RulePattern::LongSentence { max_words: 35 },
            "This sentence is long. Consider splitting it.",
            ReplacementStrategy::FlagOnly,
        )
        .advanced()
        .with_tags(&["clarity", "readability"])
        .with_examples(&[(
            "When the committee finally met after weeks of delay it discussed the budget and the schedule and the staffing plan and the new building and the parking problem and the cafeteria menu and the holiday party and the annual report before anyone noticed the time.",
            "The committee finally met after weeks of delay. It discussed a long list of topics before anyone noticed the time.",
        )]),
    ]
}
