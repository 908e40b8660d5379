//! Rule taxonomy: categories, severities, rule types, and the document and
//! user descriptors a caller can attach to a check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Taxonomy bucket a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SubjectVerbAgreement,
    VerbForm,
    ArticleUsage,
    PronounCase,
    Negation,
    Repetition,
    Capitalization,
    Spelling,
    ConfusedWords,
    Punctuation,
    CommaUsage,
    Redundancy,
    Wordiness,
    WeakLanguage,
    Cliche,
    Hedging,
    FillerWords,
    Formality,
    PassiveVoice,
    Clarity,
    Consistency,
}

impl Category {
    /// All 21 categories.
    pub fn all() -> &'static [Category] {
        &[
            Self::SubjectVerbAgreement, Self::VerbForm, Self::ArticleUsage,
            Self::PronounCase, Self::Negation, Self::Repetition,
            Self::Capitalization, Self::Spelling, Self::ConfusedWords,
            Self::Punctuation, Self::CommaUsage, Self::Redundancy,
            Self::Wordiness, Self::WeakLanguage, Self::Cliche,
            Self::Hedging, Self::FillerWords, Self::Formality,
            Self::PassiveVoice, Self::Clarity, Self::Consistency,
        ]
    }

    /// Categories that cover sentence grammar (agreement, verb forms, articles...).
    pub fn grammar() -> &'static [Category] {
        &[
            Self::SubjectVerbAgreement, Self::VerbForm, Self::ArticleUsage,
            Self::PronounCase, Self::Negation, Self::Repetition,
        ]
    }

    /// Category name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubjectVerbAgreement => "subject-verb-agreement",
            Self::VerbForm => "verb-form",
            Self::ArticleUsage => "article-usage",
            Self::PronounCase => "pronoun-case",
            Self::Negation => "negation",
            Self::Repetition => "repetition",
            Self::Capitalization => "capitalization",
            Self::Spelling => "spelling",
            Self::ConfusedWords => "confused-words",
            Self::Punctuation => "punctuation",
            Self::CommaUsage => "comma-usage",
            Self::Redundancy => "redundancy",
            Self::Wordiness => "wordiness",
            Self::WeakLanguage => "weak-language",
            Self::Cliche => "cliche",
            Self::Hedging => "hedging",
            Self::FillerWords => "filler-words",
            Self::Formality => "formality",
            Self::PassiveVoice => "passive-voice",
            Self::Clarity => "clarity",
            Self::Consistency => "consistency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// Fixed-order urgency tier. Declared lowest first so the derived `Ord`
/// puts `Critical` on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Suggestion,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, most urgent first.
    pub fn all() -> &'static [Severity] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low, Self::Suggestion]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "suggestion" | "hint" => Ok(Self::Suggestion),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// What kind of problem a rule addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Grammar,
    Spelling,
    Style,
    Clarity,
    Engagement,
    Delivery,
    Consistency,
    Conciseness,
}

impl RuleType {
    pub fn all() -> &'static [RuleType] {
        &[
            Self::Grammar, Self::Spelling, Self::Style, Self::Clarity,
            Self::Engagement, Self::Delivery, Self::Consistency, Self::Conciseness,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Spelling => "spelling",
            Self::Style => "style",
            Self::Clarity => "clarity",
            Self::Engagement => "engagement",
            Self::Delivery => "delivery",
            Self::Consistency => "consistency",
            Self::Conciseness => "conciseness",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| format!("Unknown rule type: {s}"))
    }
}

/// Kind of document being checked. Some rules only apply to a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    General,
    Academic,
    Business,
    Technical,
    Casual,
    Creative,
}

impl DocumentType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Academic => "academic",
            Self::Business => "business",
            Self::Technical => "technical",
            Self::Casual => "casual",
            Self::Creative => "creative",
        }
    }

    /// Formal registers where contractions and colloquialisms are flagged.
    pub fn is_formal(&self) -> bool {
        matches!(self, Self::Academic | Self::Business | Self::Technical)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writer proficiency. Experts do not receive `Suggestion`-severity advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl UserLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order_puts_critical_first() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Low > Severity::Suggestion);
        let mut sorted = vec![Severity::Low, Severity::Critical, Severity::Suggestion];
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, vec![Severity::Critical, Severity::Low, Severity::Suggestion]);
    }

    #[test]
    fn category_names_round_trip_through_from_str() {
        for cat in Category::all() {
            assert_eq!(cat.name().parse::<Category>().unwrap(), *cat);
        }
        assert_eq!(
            "subject_verb_agreement".parse::<Category>().unwrap(),
            Category::SubjectVerbAgreement
        );
        assert!("nonsense".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::SubjectVerbAgreement).unwrap();
        assert_eq!(json, "\"subject-verb-agreement\"");
    }

    #[test]
    fn grammar_categories_are_a_subset() {
        for cat in Category::grammar() {
            assert!(Category::all().contains(cat));
        }
    }
}
