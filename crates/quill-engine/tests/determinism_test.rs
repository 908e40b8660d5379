//! Identical inputs produce identical outputs, regardless of scheduling or
//! cache state.

use quill_core::{EngineConfigOverrides, QuillConfig};
use quill_engine::SuggestionEngine;

const SAMPLE: &str = "He run fast. Your going home. We need advance planning for this. \
    I saw the the dog. She ate a apple. Its a beautiful day. We waited a hour. \
    At the end of the day, the food was very good. However we decided to stay!!";

#[test]
fn repeated_runs_with_cleared_cache_match() {
    let engine = SuggestionEngine::new();
    let overrides = EngineConfigOverrides::default().with_advanced_rules(true);
    let first = engine.check_text(SAMPLE, &overrides);
    for _ in 0..5 {
        engine.clear_cache();
        let again = engine.check_text(SAMPLE, &overrides);
        assert_eq!(again.suggestions, first.suggestions);
        assert_eq!(again.quality_stats, first.quality_stats);
        assert_eq!(again.category_breakdown, first.category_breakdown);
    }
}

#[test]
fn separate_engines_match() {
    let a = SuggestionEngine::new().check_text(SAMPLE, &EngineConfigOverrides::default());
    let b = SuggestionEngine::new().check_text(SAMPLE, &EngineConfigOverrides::default());
    assert_eq!(a.suggestions, b.suggestions);
}

#[test]
fn parallelism_does_not_change_order() {
    let sequential = SuggestionEngine::with_config(
        QuillConfig::from_toml("[limits]\nparallel = false\n").unwrap(),
    );
    let parallel = SuggestionEngine::new();
    for _ in 0..3 {
        parallel.clear_cache();
        let p = parallel.check_text(SAMPLE, &EngineConfigOverrides::default());
        let s = sequential.check_text(SAMPLE, &EngineConfigOverrides::default());
        assert_eq!(p.suggestions, s.suggestions);
    }
}

#[test]
fn suggestion_ids_are_unique() {
    let result = SuggestionEngine::new().check_text(SAMPLE, &EngineConfigOverrides::default());
    let mut ids: Vec<&str> = result.suggestions.iter().map(|s| s.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
