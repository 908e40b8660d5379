//! Spacing, punctuation, and comma usage.

use quill_core::{Category, RuleType, Severity};

use super::focused;
use crate::rules::types::{ReplacementStrategy, Rule};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "double-space",
            Category::Punctuation,
            Severity::Low,
            RuleType::Style,
            70,
            focused(r"\S( {2,})\S", 1),
            "Use a single space between words.",
            ReplacementStrategy::fixed(&[" "]),
        )
        .with_tags(&["whitespace"])
        .with_examples(&[("This is  odd.", "This is odd.")]),
        Rule::new(
            "space-before-punctuation",
            Category::Punctuation,
            Severity::Low,
            RuleType::Style,
            70,
            focused(r"\w(\s+)(?:[,;:!?]|\.(?:\s|$))", 1),
            "Remove the space before punctuation.",
            ReplacementStrategy::fixed(&[""]),
        )
        .with_tags(&["whitespace"])
        .with_examples(&[("Hello , world.", "Hello, world.")]),
        Rule::new(
            "repeated-punctuation",
            Category::Punctuation,
            Severity::Low,
            RuleType::Style,
            60,
            super::regex(r"(!)!+|(\?)\?+"),
            "One punctuation mark is enough.",
            ReplacementStrategy::template(&["$1$2"]),
        )
        .with_tags(&["emphasis"])
        .with_examples(&[("Stop it!!!", "Stop it!")]),
        Rule::new(
            "comma-after-introductory-word",
            Category::CommaUsage,
            Severity::Low,
            RuleType::Style,
            60,
            focused(
                r"(?:^|[.!?]\s+)((however|therefore|moreover|furthermore|consequently|nevertheless|additionally|unfortunately|fortunately|finally|meanwhile))\s+[a-z]",
                1,
            ),
            "Add a comma after an introductory word.",
            ReplacementStrategy::template(&["$2,"]),
        )
        .with_tags(&["comma"])
        .with_examples(&[("However we decided to stay.", "However, we decided to stay.")]),
        Rule::new(
            "comma-before-conjunction",
            Category::CommaUsage,
            Severity::Suggestion,
            RuleType::Style,
            50,
            focused(r"\b([a-z]+)\s+(?:but|yet)\s+(?:i|you|he|she|it|we|they)\s+[a-z]+", 1),
            "Consider a comma before a conjunction joining two clauses.",
            ReplacementStrategy::template(&["$1,"]),
        )
        .advanced()
        .with_tags(&["comma", "clause"])
        .with_examples(&[("I wanted to go but she stayed home.", "I wanted to go, but she stayed home.")]),
    ]
}
