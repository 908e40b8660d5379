//! Rule definitions: pattern, guards, replacement strategy, scoring factors.

use quill_core::{Category, DocumentType, RuleType, Severity};
use serde::{Deserialize, Serialize};

use super::lexicon::LexiconId;

/// An immutable rule definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub category: Category,
    pub severity: Severity,
    pub rule_type: RuleType,
    /// 0–100. Orders rules and scales the quality threshold.
    pub priority: u8,
    pub pattern: RulePattern,
    /// Scan for every non-overlapping match, or stop after the first.
    #[serde(default = "default_true")]
    pub global: bool,
    #[serde(default)]
    pub guards: Vec<Guard>,
    pub message: String,
    #[serde(default)]
    pub replacement: ReplacementStrategy,
    #[serde(default)]
    pub quality_factors: Vec<QualityFactor>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub examples: Vec<RuleExample>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Only runs when advanced rules are switched on.
    #[serde(default)]
    pub advanced: bool,
    /// Language prefix the rule applies to, e.g. `en`.
    #[serde(default = "default_language")]
    pub language: String,
    /// Restricts the rule to one dialect, e.g. `en-GB`.
    #[serde(default)]
    pub dialect: Option<String>,
    /// Document types the rule applies to. Empty means all.
    #[serde(default)]
    pub document_types: Vec<DocumentType>,
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

impl Rule {
    /// A rule with the common defaults: global, enabled, English, no guards,
    /// no factors.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        category: Category,
        severity: Severity,
        rule_type: RuleType,
        priority: u8,
        pattern: RulePattern,
        message: &str,
        replacement: ReplacementStrategy,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            severity,
            rule_type,
            priority,
            pattern,
            global: true,
            guards: Vec::new(),
            message: message.to_string(),
            replacement,
            quality_factors: Vec::new(),
            tags: Vec::new(),
            examples: Vec::new(),
            enabled: true,
            advanced: false,
            language: default_language(),
            dialect: None,
            document_types: Vec::new(),
        }
    }

    pub fn with_guards(mut self, guards: Vec<Guard>) -> Self {
        self.guards = guards;
        self
    }

    pub fn with_factors(mut self, factors: &[(FactorKind, f32)]) -> Self {
        self.quality_factors = factors
            .iter()
            .map(|&(kind, weight)| QualityFactor { kind, weight })
            .collect();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_examples(mut self, examples: &[(&str, &str)]) -> Self {
        self.examples = examples
            .iter()
            .map(|(incorrect, correct)| RuleExample {
                incorrect: incorrect.to_string(),
                correct: correct.to_string(),
            })
            .collect();
        self
    }

    /// Stop after the first accepted match.
    pub fn first_match_only(mut self) -> Self {
        self.global = false;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn for_dialect(mut self, dialect: &str) -> Self {
        self.dialect = Some(dialect.to_string());
        self
    }

    pub fn for_documents(mut self, document_types: &[DocumentType]) -> Self {
        self.document_types = document_types.to_vec();
        self
    }

    /// Every lexicon the rule refers to, through its pattern, guards, or
    /// replacement.
    pub fn lexicon_refs(&self) -> Vec<LexiconId> {
        let mut refs = Vec::new();
        match &self.pattern {
            RulePattern::Phrases { lexicon } | RulePattern::Words { lexicon } => refs.push(*lexicon),
            _ => {}
        }
        for guard in &self.guards {
            match guard {
                Guard::GroupIn { lexicon, .. }
                | Guard::GroupNotIn { lexicon, .. }
                | Guard::PrecedingWordNotIn { lexicon } => refs.push(*lexicon),
                Guard::GroupNotAcronym { .. } => {}
            }
        }
        match &self.replacement {
            ReplacementStrategy::LookupSwap { lexicon, .. }
            | ReplacementStrategy::LookupGroup { lexicon, .. }
            | ReplacementStrategy::LookupTable { lexicon } => refs.push(*lexicon),
            _ => {}
        }
        refs
    }
}

/// How a rule finds candidate spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RulePattern {
    /// Case-insensitive regular expression. `focus` names a capture group
    /// that narrows the reported span. Scanning resumes at the end of the
    /// focus group, so text matched after it acts as lookahead and may be
    /// matched again; reported spans never overlap.
    Regex {
        regex: String,
        #[serde(default)]
        focus: Option<usize>,
    },
    /// Alternation of every phrase in a lexicon, longest first.
    Phrases { lexicon: LexiconId },
    /// Single tokens whose lowercase form is a key of the lexicon.
    Words { lexicon: LexiconId },
    /// Two adjacent identical words. Groups 1 and 2 are the two words.
    RepeatedWord,
    /// A sentence with more than `max_words` words.
    LongSentence { max_words: usize },
}

/// Post-match check. A match is reported only if every guard accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Guard {
    GroupIn { group: usize, lexicon: LexiconId },
    GroupNotIn { group: usize, lexicon: LexiconId },
    /// The word immediately before the match must not be in the lexicon.
    PrecedingWordNotIn { lexicon: LexiconId },
    /// The group must not be an all-caps acronym.
    GroupNotAcronym { group: usize },
}

/// Target verb form for agreement corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgreementForm {
    /// "run" → "runs"
    Singular,
    /// "runs" → "run"
    Plural,
}

/// How candidate replacements are produced from a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReplacementStrategy {
    Fixed { candidates: Vec<String> },
    /// `$N` expands to capture group N.
    Template { templates: Vec<String> },
    VerbAgreement { verb_group: usize, form: AgreementForm },
    /// Swap one group through a lexicon and keep the rest of the match.
    LookupSwap { group: usize, lexicon: LexiconId },
    /// Replace the whole match with the lexicon value of one group.
    LookupGroup { group: usize, lexicon: LexiconId },
    /// Replace the whole match with its own lexicon value.
    LookupTable { lexicon: LexiconId },
    /// Keep only the listed groups, joined by a space.
    KeepGroups { groups: Vec<usize> },
    Capitalize,
    #[default]
    FlagOnly,
}

impl ReplacementStrategy {
    pub fn fixed(candidates: &[&str]) -> Self {
        Self::Fixed {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn template(templates: &[&str]) -> Self {
        Self::Template {
            templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn is_flag_only(&self) -> bool {
        matches!(self, Self::FlagOnly)
    }
}

/// Kind of accuracy sub-scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorKind {
    SentenceBoundary,
    MatchLength,
    ProperNoun,
}

impl FactorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SentenceBoundary => "sentence-boundary",
            Self::MatchLength => "match-length",
            Self::ProperNoun => "proper-noun",
        }
    }
}

/// A weighted accuracy factor attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityFactor {
    pub kind: FactorKind,
    /// 0.0–1.0
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleExample {
    pub incorrect: String,
    pub correct: String,
}
