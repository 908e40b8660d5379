//! Agreement, verb forms, articles, pronouns, negation, repetition,
//! capitalization.

use quill_core::{Category, RuleType, Severity};

use super::{focused, regex, swap, table};
use crate::rules::lexicon::LexiconId;
use crate::rules::types::{AgreementForm, FactorKind, Guard, ReplacementStrategy, Rule, RulePattern};

pub(super) fn rules() -> Vec<Rule> {
    vec![
        // ── Subject–verb agreement ──
        Rule::new(
            "sva-third-person-singular",
            Category::SubjectVerbAgreement,
            Severity::High,
            RuleType::Grammar,
            90,
            regex(r"\b(he|she|it)\s+([a-z]+)\b"),
            "Use the third-person singular verb form after \"he\", \"she\", or \"it\".",
            ReplacementStrategy::VerbAgreement { verb_group: 2, form: AgreementForm::Singular },
        )
        .with_guards(vec![
            Guard::GroupIn { group: 2, lexicon: LexiconId::BaseVerbs },
            Guard::PrecedingWordNotIn { lexicon: LexiconId::PerceptionAndModalWords },
        ])
        .with_factors(&[(FactorKind::SentenceBoundary, 0.6), (FactorKind::ProperNoun, 0.4)])
        .with_tags(&["agreement", "verb"])
        .with_examples(&[("He run fast.", "He runs fast."), ("It seem unlikely.", "It seems unlikely.")]),
        Rule::new(
            "sva-plural-subject",
            Category::SubjectVerbAgreement,
            Severity::High,
            RuleType::Grammar,
            88,
            regex(r"\b(they|we|you|i)\s+([a-z]+)\b"),
            "Use the base verb form with a plural subject or \"I\"/\"you\".",
            ReplacementStrategy::VerbAgreement { verb_group: 2, form: AgreementForm::Plural },
        )
        .with_guards(vec![
            Guard::GroupIn { group: 2, lexicon: LexiconId::ThirdPersonVerbs },
            Guard::PrecedingWordNotIn { lexicon: LexiconId::RomanNumeralContext },
        ])
        .with_factors(&[(FactorKind::SentenceBoundary, 0.6), (FactorKind::ProperNoun, 0.4)])
        .with_tags(&["agreement", "verb"])
        .with_examples(&[
            ("They walks to school.", "They walk to school."),
            ("I wants more time.", "I want more time."),
        ]),
        Rule::new(
            "sva-be-plural",
            Category::SubjectVerbAgreement,
            Severity::High,
            RuleType::Grammar,
            90,
            regex(r"\b(they|we|you)\s+(is|was)\b"),
            "Plural subjects take \"are\" or \"were\".",
            swap(2, LexiconId::BeAgreement),
        )
        .with_factors(&[(FactorKind::SentenceBoundary, 0.5), (FactorKind::MatchLength, 0.5)])
        .with_tags(&["agreement", "be"])
        .with_examples(&[
            ("They was late again.", "They were late again."),
            ("We is ready.", "We are ready."),
        ]),
        Rule::new(
            "sva-be-singular",
            Category::SubjectVerbAgreement,
            Severity::High,
            RuleType::Grammar,
            90,
            regex(r"\b(he|she|it)\s+(are|were)\b"),
            "Singular subjects take \"is\" or \"was\".",
            swap(2, LexiconId::BeAgreement),
        )
        .with_guards(vec![Guard::PrecedingWordNotIn { lexicon: LexiconId::SubjunctiveTriggers }])
        .with_factors(&[(FactorKind::SentenceBoundary, 0.5), (FactorKind::MatchLength, 0.5)])
        .with_tags(&["agreement", "be"])
        .with_examples(&[
            ("She are my friend.", "She is my friend."),
            ("It were broken yesterday.", "It was broken yesterday."),
        ]),
        Rule::new(
            "sva-auxiliary",
            Category::SubjectVerbAgreement,
            Severity::High,
            RuleType::Grammar,
            88,
            regex(r"\b(he|she|it)\s+(don['’]t|do\s+not|haven['’]t|have\s+not|have)\b"),
            "Use \"doesn't\" or \"has\" with a singular subject.",
            swap(2, LexiconId::AuxAgreement),
        )
        .with_guards(vec![Guard::PrecedingWordNotIn { lexicon: LexiconId::PerceptionAndModalWords }])
        .with_factors(&[(FactorKind::SentenceBoundary, 0.6), (FactorKind::ProperNoun, 0.4)])
        .with_tags(&["agreement", "auxiliary"])
        .with_examples(&[
            ("He don't like it.", "He doesn't like it."),
            ("She have a car.", "She has a car."),
        ]),
        Rule::new(
            "first-person-be",
            Category::SubjectVerbAgreement,
            Severity::High,
            RuleType::Grammar,
            85,
            regex(r"\b(i)\s+(is|are)\b"),
            "Use \"am\" with \"I\".",
            ReplacementStrategy::fixed(&["I am"]),
        )
        .with_guards(vec![Guard::PrecedingWordNotIn { lexicon: LexiconId::RomanNumeralContext }])
        .with_factors(&[(FactorKind::SentenceBoundary, 1.0)])
        .with_tags(&["agreement", "be"])
        .with_examples(&[("I is happy.", "I am happy.")]),
        // ── Verb forms ──
        Rule::new(
            "perfect-participle",
            Category::VerbForm,
            Severity::High,
            RuleType::Grammar,
            85,
            regex(r"\b(have|has|had|i['’]ve|you['’]ve|we['’]ve|they['’]ve)\s+([a-z]+)\b"),
            "Use the past participle after \"have\".",
            swap(2, LexiconId::PastParticiples),
        )
        .with_guards(vec![Guard::GroupIn { group: 2, lexicon: LexiconId::PastParticiples }])
        .with_factors(&[(FactorKind::MatchLength, 0.5), (FactorKind::ProperNoun, 0.5)])
        .with_tags(&["verb", "tense"])
        .with_examples(&[
            ("I have went there before.", "I have gone there before."),
            ("She had ate already.", "She had eaten already."),
        ]),
        Rule::new(
            "modal-of",
            Category::VerbForm,
            Severity::High,
            RuleType::Grammar,
            85,
            regex(r"\b(could|would|should|must|might)\s+(of)\b"),
            "Use \"have\" after a modal verb, not \"of\".",
            swap(2, LexiconId::WordSwaps),
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["verb", "modal"])
        .with_examples(&[("I could of helped.", "I could have helped.")]),
        Rule::new(
            "overregularized-past",
            Category::VerbForm,
            Severity::High,
            RuleType::Grammar,
            80,
            RulePattern::Words { lexicon: LexiconId::Overregularized },
            "This verb has an irregular past tense.",
            table(LexiconId::Overregularized),
        )
        .with_factors(&[(FactorKind::MatchLength, 0.5), (FactorKind::ProperNoun, 0.5)])
        .with_tags(&["verb", "tense", "irregular"])
        .with_examples(&[
            ("Yesterday we goed to the park.", "Yesterday we went to the park."),
            ("She catched the ball.", "She caught the ball."),
        ]),
        // ── Articles ──
        Rule::new(
            "article-a-before-vowel",
            Category::ArticleUsage,
            Severity::Medium,
            RuleType::Grammar,
            75,
            regex(r"\b(a)\s+([aeiou][a-z]*)\b"),
            "Use \"an\" before a vowel sound.",
            ReplacementStrategy::template(&["an $2"]),
        )
        .with_guards(vec![
            Guard::GroupNotIn { group: 2, lexicon: LexiconId::ConsonantSoundVowelWords },
            Guard::GroupNotAcronym { group: 2 },
        ])
        .with_factors(&[(FactorKind::MatchLength, 0.5), (FactorKind::ProperNoun, 0.5)])
        .with_tags(&["article"])
        .with_examples(&[("She ate a apple.", "She ate an apple.")]),
        Rule::new(
            "article-an-before-consonant",
            Category::ArticleUsage,
            Severity::Medium,
            RuleType::Grammar,
            75,
            regex(r"\b(an)\s+([b-df-hj-np-tv-z][a-z]*)\b"),
            "Use \"a\" before a consonant sound.",
            ReplacementStrategy::template(&["a $2"]),
        )
        .with_guards(vec![
            Guard::GroupNotIn { group: 2, lexicon: LexiconId::VowelSoundWords },
            Guard::GroupNotAcronym { group: 2 },
        ])
        .with_factors(&[(FactorKind::MatchLength, 0.5), (FactorKind::ProperNoun, 0.5)])
        .with_tags(&["article"])
        .with_examples(&[("He is an good friend.", "He is a good friend.")]),
        Rule::new(
            "article-a-before-silent-h",
            Category::ArticleUsage,
            Severity::Medium,
            RuleType::Grammar,
            75,
            regex(r"\b(a)\s+(h[a-z]*)\b"),
            "Use \"an\" before a silent \"h\".",
            ReplacementStrategy::template(&["an $2"]),
        )
        .with_guards(vec![Guard::GroupIn { group: 2, lexicon: LexiconId::VowelSoundWords }])
        .with_tags(&["article"])
        .with_examples(&[("We waited a hour.", "We waited an hour.")]),
        // ── Negation ──
        Rule::new(
            "double-negative",
            Category::Negation,
            Severity::High,
            RuleType::Grammar,
            80,
            regex(
                r"\b(don['’]t|doesn['’]t|didn['’]t|can['’]t|won['’]t|isn['’]t|aren['’]t|wasn['’]t|never)\s+(?:[a-z]+\s+)?(nothing|nobody|nowhere|no\s+one|none)\b",
            ),
            "Avoid double negatives.",
            swap(2, LexiconId::NegativeToAny),
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["negation"])
        .with_examples(&[
            ("I don't need nothing.", "I don't need anything."),
            ("She didn't see nobody there.", "She didn't see anybody there."),
        ]),
        // ── Pronoun case ──
        Rule::new(
            "between-you-and-i",
            Category::PronounCase,
            Severity::Medium,
            RuleType::Grammar,
            75,
            regex(r"\b(between\s+you\s+and\s+)(i)\b"),
            "Use the object pronoun after a preposition: \"between you and me\".",
            swap(2, LexiconId::WordSwaps),
        )
        .with_tags(&["pronoun"])
        .with_examples(&[("This stays between you and I.", "This stays between you and me.")]),
        Rule::new(
            "me-and-subject",
            Category::PronounCase,
            Severity::Medium,
            RuleType::Grammar,
            70,
            focused(r"(?:^|[.!?]\s+)((me)\s+and\s+([a-z]+)\s+(went|were|are|did|have|had|will))\b", 1),
            "Use the subject pronoun and put yourself last: \"X and I\".",
            ReplacementStrategy::template(&["$3 and I $4"]),
        )
        .with_factors(&[(FactorKind::SentenceBoundary, 1.0)])
        .with_tags(&["pronoun"])
        .with_examples(&[("Me and John went home.", "John and I went home.")]),
        // ── Repetition ──
        Rule::new(
            "repeated-word",
            Category::Repetition,
            Severity::Medium,
            RuleType::Grammar,
            80,
            RulePattern::RepeatedWord,
            "This word is repeated.",
            ReplacementStrategy::KeepGroups { groups: vec![1] },
        )
        .with_factors(&[(FactorKind::MatchLength, 1.0)])
        .with_tags(&["repetition", "typo"])
        .with_examples(&[("I saw the the dog.", "I saw the dog.")]),
        // ── Capitalization ──
        Rule::new(
            "capitalize-i",
            Category::Capitalization,
            Severity::Medium,
            RuleType::Grammar,
            85,
            focused(r"\b((?-i:i))(?:[\s,;:!?'’]|$)", 1),
            "The pronoun \"I\" is always capitalized.",
            ReplacementStrategy::fixed(&["I"]),
        )
        .with_tags(&["capitalization", "pronoun"])
        .with_examples(&[("Yesterday i went home.", "Yesterday I went home.")]),
        Rule::new(
            "sentence-capitalization",
            Category::Capitalization,
            Severity::Medium,
            RuleType::Grammar,
            80,
            focused(r"(?:^|[.!?]\s+)((?-i:[a-z]))", 1),
            "Start a sentence with a capital letter.",
            ReplacementStrategy::Capitalize,
        )
        .with_guards(vec![Guard::PrecedingWordNotIn { lexicon: LexiconId::Abbreviations }])
        .with_tags(&["capitalization", "sentence"])
        .with_examples(&[("The sun set. the moon rose.", "The sun set. The moon rose.")]),
        Rule::new(
            "capitalize-calendar-names",
            Category::Capitalization,
            Severity::Low,
            RuleType::Grammar,
            70,
            regex(
                r"\b((?-i:monday|tuesday|wednesday|thursday|friday|saturday|sunday|january|february|april|june|july|august|september|october|november|december))\b",
            ),
            "Days and months are capitalized.",
            ReplacementStrategy::Capitalize,
        )
        .with_tags(&["capitalization", "proper-noun"])
        .with_examples(&[("See you on monday.", "See you on Monday.")]),
    ]
}
