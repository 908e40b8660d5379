//! End-to-end tests for `SuggestionEngine::check_text` and the session API.

use std::sync::Arc;
use std::thread;

use quill_core::{
    Category, DocumentType, EngineConfigOverrides, EngineError, QuillConfig, QuillErrorCode,
    RuleType, Severity, UserLevel,
};
use quill_engine::{EngineResult, RuleCatalog, Suggestion, SuggestionEngine};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn defaults() -> EngineConfigOverrides {
    EngineConfigOverrides::default()
}

fn by_rule<'a>(result: &'a EngineResult, rule_id: &str) -> Option<&'a Suggestion> {
    result.suggestions.iter().find(|s| s.rule_id == rule_id)
}

fn sequential_engine() -> SuggestionEngine {
    let config = QuillConfig::from_toml("[limits]\nparallel = false\n").unwrap();
    SuggestionEngine::with_config(config)
}

// ─── Core scenarios ────────────────────────────────────────────────────────

#[test]
fn agreement_error_is_corrected() {
    let engine = SuggestionEngine::new();
    let text = "He run fast.";
    let result = engine.check_text(text, &defaults());

    let s = by_rule(&result, "sva-third-person-singular").expect("agreement suggestion");
    assert_eq!(s.span(text), "He run");
    assert_eq!(s.replacements[0], "He runs");
    assert_eq!(s.category, Category::SubjectVerbAgreement);
    assert_eq!(s.severity, Severity::High);
    assert_eq!(s.apply(text).as_deref(), Some("He runs fast."));
    assert!(s.context.contains("He run"));
}

#[test]
fn agreement_fix_is_withheld_in_a_past_tense_sentence() {
    let engine = SuggestionEngine::new();
    let text = "Yesterday we walked to the park and it was sunny, then he run home and we were tired.";
    let result = engine.check_text(text, &defaults());
    assert!(by_rule(&result, "sva-third-person-singular").is_none());

    // A past-tense neighbour sentence does not veto the fix.
    let text = "We walked there yesterday and it was late. Today he run to school.";
    let result = engine.check_text(text, &defaults());
    let s = by_rule(&result, "sva-third-person-singular").expect("agreement suggestion");
    assert_eq!(s.replacements[0], "he runs");
}

#[test]
fn your_before_gerund_becomes_youre() {
    let engine = SuggestionEngine::new();
    let text = "Your going home.";
    let result = engine.check_text(text, &defaults());

    let s = by_rule(&result, "your-youre").expect("your/you're suggestion");
    assert_eq!(s.span(text), "Your going");
    assert_eq!(s.replacements[0], "You're going");
}

#[test]
fn redundant_phrase_is_shortened() {
    let engine = SuggestionEngine::new();
    let text = "We need advance planning for this.";
    let result = engine.check_text(text, &defaults());

    let s = result
        .suggestions
        .iter()
        .find(|s| s.span(text) == "advance planning")
        .expect("redundancy suggestion");
    assert_eq!(s.replacements[0], "planning");
    assert_eq!(s.rule_type, RuleType::Conciseness);
    assert_eq!(s.category, Category::Redundancy);
}

#[test]
fn clean_sentence_has_no_grammar_suggestions() {
    let engine = SuggestionEngine::new();
    let overrides = defaults().with_categories(Category::grammar());
    let result = engine.check_text("The quick brown fox jumps over the lazy dog.", &overrides);

    assert!(result.suggestions.is_empty(), "{:?}", result.suggestions);
    assert!(result.total_rules_processed > 0);
    assert_eq!(result.quality_stats.total, 0);
    assert!(result.category_breakdown.is_empty());
}

#[test]
fn no_categories_means_no_rules() {
    let engine = SuggestionEngine::new();
    let result = engine.check_text("He run fast. Your going home.", &defaults().with_categories(&[]));
    assert!(result.suggestions.is_empty());
    assert_eq!(result.total_rules_processed, 0);
}

#[test]
fn empty_text_is_fine() {
    let engine = SuggestionEngine::new();
    let result = engine.check_text("", &defaults());
    assert!(result.suggestions.is_empty());
    assert!(result.total_rules_processed > 0);
}

// ─── Configuration ─────────────────────────────────────────────────────────

#[test]
fn min_confidence_of_100_filters_everything_here() {
    let engine = SuggestionEngine::new();
    let result = engine.check_text("He run fast.", &defaults().with_min_confidence(100));
    assert!(result.suggestions.iter().all(|s| s.confidence == 100));
}

#[test]
fn max_suggestions_caps_the_list() {
    let engine = SuggestionEngine::new();
    let text = "He run fast. Your going home. We need advance planning. I saw the the dog.";
    let all = engine.check_text(text, &defaults());
    assert!(all.suggestions.len() > 1);
    let capped = engine.check_text(text, &defaults().with_max_suggestions(1));
    assert_eq!(capped.suggestions.len(), 1);
    assert_eq!(capped.suggestions[0], all.suggestions[0]);
}

#[test]
fn suggestions_are_ranked_by_severity() {
    let engine = SuggestionEngine::new();
    let text = "We need advance planning. He run fast.";
    let result = engine.check_text(text, &defaults());
    for pair in result.suggestions.windows(2) {
        assert!(pair[0].severity >= pair[1].severity);
    }
}

#[test]
fn expert_users_skip_suggestion_severity() {
    let engine = SuggestionEngine::new();
    let text = "The food was very good.";

    let intermediate = engine.check_text(text, &defaults());
    assert!(by_rule(&intermediate, "weak-intensifier").is_some());

    let expert = engine.check_text(text, &defaults().with_user_level(UserLevel::Expert));
    assert!(expert.suggestions.iter().all(|s| s.severity != Severity::Suggestion));
    assert!(expert.total_rules_processed < intermediate.total_rules_processed);
}

#[test]
fn formality_rules_only_for_formal_documents() {
    let engine = SuggestionEngine::new();
    let text = "We don't agree.";

    let general = engine.check_text(text, &defaults());
    assert!(by_rule(&general, "contraction-in-formal-text").is_none());

    let business =
        engine.check_text(text, &defaults().with_document_type(DocumentType::Business));
    let s = by_rule(&business, "contraction-in-formal-text").expect("contraction suggestion");
    assert_eq!(s.replacements[0], "do not");
}

#[test]
fn advanced_rules_are_opt_in() {
    let engine = SuggestionEngine::new();
    let text = "The ball was kicked by Sam.";

    let basic = engine.check_text(text, &defaults());
    assert!(by_rule(&basic, "passive-voice").is_none());

    let advanced = engine.check_text(text, &defaults().with_advanced_rules(true));
    let s = by_rule(&advanced, "passive-voice").expect("passive voice advisory");
    assert!(s.replacements.is_empty());
}

#[test]
fn dialect_rules_follow_the_language() {
    let engine = SuggestionEngine::new();
    let text = "My favorite book.";

    let us = engine.check_text(text, &defaults());
    assert!(by_rule(&us, "british-spelling").is_none());

    let gb = engine.check_text(text, &defaults().with_language("en-GB"));
    let s = by_rule(&gb, "british-spelling").expect("british spelling suggestion");
    assert_eq!(s.replacements[0], "favourite");
}

#[test]
fn other_languages_run_no_english_rules() {
    let engine = SuggestionEngine::new();
    let result = engine.check_text("He run fast.", &defaults().with_language("fr-FR"));
    assert_eq!(result.total_rules_processed, 0);
}

// ─── Session toggles ───────────────────────────────────────────────────────

#[test]
fn disabling_a_rule_changes_results_not_the_catalog() {
    let engine = SuggestionEngine::new();
    let text = "He run fast.";
    assert!(by_rule(&engine.check_text(text, &defaults()), "sva-third-person-singular").is_some());

    engine.set_rule_enabled("sva-third-person-singular", false).unwrap();
    assert!(by_rule(&engine.check_text(text, &defaults()), "sva-third-person-singular").is_none());
    assert!(engine.rule_by_id("sva-third-person-singular").unwrap().enabled);

    engine.set_rule_enabled("sva-third-person-singular", true).unwrap();
    assert!(by_rule(&engine.check_text(text, &defaults()), "sva-third-person-singular").is_some());
}

#[test]
fn per_call_disabled_rules_do_not_stick() {
    let engine = SuggestionEngine::new();
    let text = "He run fast.";
    let off = engine.check_text(text, &defaults().with_disabled_rules(&["sva-third-person-singular"]));
    assert!(by_rule(&off, "sva-third-person-singular").is_none());
    assert!(by_rule(&engine.check_text(text, &defaults()), "sva-third-person-singular").is_some());
}

#[test]
fn toggling_unknown_rule_is_an_error() {
    let engine = SuggestionEngine::new();
    let err = engine.set_rule_enabled("no-such-rule", false).unwrap_err();
    assert!(matches!(err, EngineError::RuleNotFound { ref id } if id == "no-such-rule"));
    assert_eq!(err.error_code(), "RULE_NOT_FOUND");
}

#[test]
fn update_config_changes_session_defaults() {
    let engine = SuggestionEngine::new();
    engine.update_config(&defaults().with_categories(&[Category::Spelling]));
    assert_eq!(engine.config().enabled_categories.len(), 1);

    let result = engine.check_text("He run fast.", &defaults());
    assert!(by_rule(&result, "sva-third-person-singular").is_none());

    let overridden = engine.check_text("He run fast.", &defaults().with_categories(Category::all()));
    assert!(by_rule(&overridden, "sva-third-person-singular").is_some());
}

#[test]
fn session_config_comes_from_toml() {
    let config = QuillConfig::from_toml(
        r#"
        [engine]
        document_type = "academic"
        enable_advanced_rules = true
        "#,
    )
    .unwrap();
    let engine = SuggestionEngine::with_config(config);
    assert_eq!(engine.config().document_type, DocumentType::Academic);
    assert!(engine.config().enable_advanced_rules);
}

// ─── Introspection ─────────────────────────────────────────────────────────

#[test]
fn engine_info_describes_the_catalog() {
    let engine = SuggestionEngine::new();
    let info = engine.engine_info();
    assert_eq!(info.total_rules, engine.catalog().len());
    assert_eq!(info.active_rules, info.total_rules);
    assert_eq!(info.supported_categories.len(), 21);
    assert_eq!(info.supported_rule_types.len(), 8);
    assert_eq!(info.rules_by_category.values().sum::<usize>(), info.total_rules);
    assert_eq!(info.rules_by_type.values().sum::<usize>(), info.total_rules);
    assert!(info.lexicon_count > 30);
    assert!(info.cache_enabled);

    engine.set_rule_enabled("repeated-word", false).unwrap();
    assert_eq!(engine.engine_info().active_rules, info.total_rules - 1);
}

#[test]
fn custom_catalog_rules_run() {
    let catalog = RuleCatalog::builtin()
        .with_pack_str(
            r#"
            [[rules]]
            id = "house-style-utilize"
            category = "wordiness"
            severity = "medium"
            rule_type = "conciseness"
            priority = 60
            message = "Prefer 'use'."
            pattern = { kind = "regex", regex = '\butili[sz]e\b' }
            replacement = { kind = "fixed", candidates = ["use"] }
            "#,
        )
        .unwrap();
    let engine = SuggestionEngine::with_catalog(catalog, QuillConfig::default());
    let text = "We utilize many tools.";
    let result = engine.check_text(text, &defaults());
    let s = by_rule(&result, "house-style-utilize").expect("custom rule suggestion");
    assert_eq!(s.apply(text).as_deref(), Some("We use many tools."));
}

#[test]
fn result_exports_as_json() {
    let engine = SuggestionEngine::new();
    let json = engine.check_text("He run fast.", &defaults()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["suggestions"][0]["category"], "subject-verb-agreement");
    assert!(value["category_breakdown"]["subject-verb-agreement"].as_u64().unwrap() >= 1);
}

// ─── Concurrency ───────────────────────────────────────────────────────────

#[test]
fn concurrent_checks_agree() {
    let engine = Arc::new(SuggestionEngine::new());
    let text = "He run fast. Your going home. We need advance planning.";
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.check_text(text, &EngineConfigOverrides::default()))
        })
        .collect();
    let results: Vec<Arc<EngineResult>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results[1..] {
        assert_eq!(r.suggestions, results[0].suggestions);
    }
    let stats = engine.performance_stats();
    assert_eq!(stats.total_calls, 8);
    assert_eq!(stats.cache_hits + stats.cache_misses, 8);
}

#[test]
fn sequential_and_parallel_evaluation_agree() {
    let text = "He run fast. Your going home. I saw the the dog. She ate a apple.";
    let parallel = SuggestionEngine::new().check_text(text, &defaults());
    let sequential = sequential_engine().check_text(text, &defaults());
    assert_eq!(parallel.suggestions, sequential.suggestions);
    assert_eq!(parallel.total_rules_processed, sequential.total_rules_processed);
}
