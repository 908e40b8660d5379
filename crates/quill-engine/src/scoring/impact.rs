//! Five-dimension impact classification.

use quill_core::{Category, Severity};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectnessImpact {
    Fixes,
    Improves,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Improves,
    Neutral,
    Degrades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormalityImpact {
    Raises,
    Lowers,
    Unchanged,
}

/// What applying a suggestion does to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactAnalysis {
    pub correctness: CorrectnessImpact,
    pub clarity: Effect,
    pub readability: Effect,
    pub engagement: Effect,
    pub formality: FormalityImpact,
}

impl ImpactAnalysis {
    /// Aggregate score used as a ranking tiebreaker.
    pub fn score(&self) -> i32 {
        let correctness = match self.correctness {
            CorrectnessImpact::Fixes => 50,
            CorrectnessImpact::Improves => 30,
            CorrectnessImpact::Neutral => 0,
        };
        let formality = match self.formality {
            FormalityImpact::Raises | FormalityImpact::Lowers => 5,
            FormalityImpact::Unchanged => 0,
        };
        correctness
            + effect_score(self.clarity, 20, 10)
            + effect_score(self.readability, 15, 8)
            + effect_score(self.engagement, 10, 5)
            + formality
    }
}

fn effect_score(effect: Effect, gain: i32, loss: i32) -> i32 {
    match effect {
        Effect::Improves => gain,
        Effect::Neutral => 0,
        Effect::Degrades => -loss,
    }
}

/// Classify the impact of a rule's suggestions from its category and severity.
pub fn classify(category: Category, severity: Severity) -> ImpactAnalysis {
    use Category::*;

    let correctness = match (severity, category) {
        (Severity::Critical | Severity::High, _) => CorrectnessImpact::Fixes,
        (
            _,
            SubjectVerbAgreement | VerbForm | ArticleUsage | PronounCase | Negation | Repetition
            | Capitalization | Spelling | ConfusedWords | Punctuation | CommaUsage,
        ) => CorrectnessImpact::Improves,
        _ => CorrectnessImpact::Neutral,
    };

    let clarity = match category {
        Clarity | PassiveVoice | Wordiness | Redundancy | ConfusedWords | Hedging | CommaUsage => {
            Effect::Improves
        }
        _ => Effect::Neutral,
    };

    let readability = match category {
        Wordiness | Redundancy | Clarity | Repetition | Punctuation | CommaUsage | Cliche
        | FillerWords => Effect::Improves,
        Formality => Effect::Degrades,
        _ => Effect::Neutral,
    };

    let engagement = match category {
        WeakLanguage | Cliche | Hedging | FillerWords | PassiveVoice => Effect::Improves,
        Formality => Effect::Degrades,
        _ => Effect::Neutral,
    };

    let formality = match category {
        Formality | Cliche | Capitalization => FormalityImpact::Raises,
        _ => FormalityImpact::Unchanged,
    };

    ImpactAnalysis { correctness, clarity, readability, engagement, formality }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severe_issues_fix_correctness() {
        let impact = classify(Category::Spelling, Severity::High);
        assert_eq!(impact.correctness, CorrectnessImpact::Fixes);
        assert_eq!(impact.score(), 50);
    }

    #[test]
    fn conciseness_improves_clarity_and_readability() {
        let impact = classify(Category::Redundancy, Severity::Low);
        assert_eq!(impact.correctness, CorrectnessImpact::Neutral);
        assert_eq!(impact.score(), 20 + 15);
    }

    #[test]
    fn formality_trades_readability_for_register() {
        let impact = classify(Category::Formality, Severity::Suggestion);
        assert_eq!(impact.formality, FormalityImpact::Raises);
        assert_eq!(impact.score(), -8 - 5 + 5);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_value(classify(Category::Cliche, Severity::Low)).unwrap();
        assert_eq!(json["formality"], "raises");
        assert_eq!(json["engagement"], "improves");
    }
}
