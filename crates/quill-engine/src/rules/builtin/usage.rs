//! Commonly confused words.

use quill_core::{Category, RuleType, Severity};

use super::{focused, regex, swap};
use crate::rules::lexicon::LexiconId;
use crate::rules::types::{FactorKind, Guard, ReplacementStrategy, Rule};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "your-youre",
            Category::ConfusedWords,
            Severity::High,
            RuleType::Grammar,
            85,
            regex(r"\b(your)\s+([a-z]+ing)\b"),
            "Use \"you're\" (you are) before a verb ending in -ing.",
            swap(1, LexiconId::WordSwaps),
        )
        .with_guards(vec![Guard::GroupNotIn { group: 2, lexicon: LexiconId::IngNouns }])
        .with_factors(&[(FactorKind::SentenceBoundary, 0.5), (FactorKind::MatchLength, 0.5)])
        .with_tags(&["confused", "contraction"])
        .with_examples(&[
            ("Your going home.", "You're going home."),
            ("I think your making a mistake.", "I think you're making a mistake."),
        ]),
        Rule::new(
            "its-its",
            Category::ConfusedWords,
            Severity::High,
            RuleType::Grammar,
            80,
            regex(r"\b(its)\s+(a|an|the|been|not|going|very|so|too|time|true|important|clear|possible)\b"),
            "Use \"it's\" (it is / it has) here.",
            swap(1, LexiconId::WordSwaps),
        )
        .with_factors(&[(FactorKind::SentenceBoundary, 0.5), (FactorKind::MatchLength, 0.5)])
        .with_tags(&["confused", "contraction"])
        .with_examples(&[("Its a beautiful day.", "It's a beautiful day.")]),
        Rule::new(
            "there-their",
            Category::ConfusedWords,
            Severity::High,
            RuleType::Grammar,
            80,
            regex(r"\b(there)\s+(own|car|house|home|family|friends|children|parents|work|team|money|names?|way|job|dog|cat)\b"),
            "Use the possessive \"their\".",
            swap(1, LexiconId::WordSwaps),
        )
        .with_tags(&["confused", "possessive"])
        .with_examples(&[("We visited there house.", "We visited their house.")]),
        Rule::new(
            "their-there",
            Category::ConfusedWords,
            Severity::High,
            RuleType::Grammar,
            80,
            regex(r"\b(their)\s+(is|are|was|were)\b"),
            "Use \"there\" to introduce existence.",
            swap(1, LexiconId::WordSwaps),
        )
        .with_factors(&[(FactorKind::SentenceBoundary, 1.0)])
        .with_tags(&["confused"])
        .with_examples(&[("Their is a problem.", "There is a problem.")]),
        Rule::new(
            "then-than",
            Category::ConfusedWords,
            Severity::Medium,
            RuleType::Grammar,
            78,
            regex(r"\b(more|less|better|worse|rather|other|greater|fewer|larger|smaller|faster|slower|older|younger|higher|lower|taller|bigger|easier|harder)\s+(then)\b"),
            "Use \"than\" for comparisons.",
            swap(2, LexiconId::WordSwaps),
        )
        .with_tags(&["confused", "comparison"])
        .with_examples(&[("She is taller then me.", "She is taller than me.")]),
        Rule::new(
            "loose-lose",
            Category::ConfusedWords,
            Severity::Medium,
            RuleType::Grammar,
            75,
            regex(r"\b(to|will|might|could|would|not|never|don['’]t)\s+(loose)\b"),
            "\"Lose\" is the verb; \"loose\" means not tight.",
            swap(2, LexiconId::WordSwaps),
        )
        .with_tags(&["confused"])
        .with_examples(&[("I don't want to loose my keys.", "I don't want to lose my keys.")]),
        Rule::new(
            "effect-affect",
            Category::ConfusedWords,
            Severity::Medium,
            RuleType::Grammar,
            75,
            regex(r"\b(will|can|could|may|might|would|should|does|did|not)\s+(effect)\b"),
            "Use the verb \"affect\".",
            swap(2, LexiconId::WordSwaps),
        )
        .with_tags(&["confused"])
        .with_examples(&[("This will effect the results.", "This will affect the results.")]),
        Rule::new(
            "to-too",
            Category::ConfusedWords,
            Severity::Medium,
            RuleType::Grammar,
            75,
            focused(r"\b((to)\s+(much|many|late|soon|early))(?:[.!?,;]|$)", 1),
            "Use \"too\" to mean excessively.",
            swap(2, LexiconId::WordSwaps),
        )
        .with_tags(&["confused"])
        .with_examples(&[("It is to late.", "It is too late.")]),
        Rule::new(
            "accept-except",
            Category::ConfusedWords,
            Severity::Medium,
            RuleType::Grammar,
            72,
            regex(r"\b(everyone|everybody|everything|all)\s+(accept)\b"),
            "Use \"except\" to mean excluding.",
            swap(2, LexiconId::WordSwaps),
        )
        .with_tags(&["confused"])
        .with_examples(&[("Everyone accept John came.", "Everyone except John came.")]),
        Rule::new(
            "could-care-less",
            Category::ConfusedWords,
            Severity::Low,
            RuleType::Clarity,
            65,
            regex(r"\b(could)\s+(care\s+less)\b"),
            "The idiom is \"couldn't care less\".",
            ReplacementStrategy::template(&["$1n't $2"]),
        )
        .with_tags(&["idiom"])
        .with_examples(&[("I could care less about it.", "I couldn't care less about it.")]),
        Rule::new(
            "less-fewer",
            Category::ConfusedWords,
            Severity::Low,
            RuleType::Grammar,
            65,
            regex(r"\b(less)\s+(people|things|items|books|cars|students|errors|mistakes|calories|options|words|problems|questions|days|hours|years|friends|children)\b"),
            "Use \"fewer\" with countable nouns.",
            swap(1, LexiconId::WordSwaps),
        )
        .with_tags(&["confused", "countable"])
        .with_examples(&[("We had less people this year.", "We had fewer people this year.")]),
    ]
}
