//! Rule catalog tests: built-in rule examples, filtered views, and custom
//! rule packs.

use std::io::Write;
use std::time::Duration;

use quill_core::{CatalogError, Category, RuleType, Severity};
use quill_engine::matcher::{CompiledPattern, Deadline};
use quill_engine::replacement::candidates_for;
use quill_engine::rules::{Rule, RuleCatalog};

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Apply the best candidate of the first match that has one.
fn fix_first(rule: &Rule, text: &str) -> Option<String> {
    let pattern = CompiledPattern::compile(rule).unwrap();
    let matches = pattern
        .find_matches(rule, text, &Deadline::new(Duration::from_secs(5)))
        .unwrap();
    matches.iter().find_map(|m| {
        let best = candidates_for(&rule.replacement, text, m).into_iter().next()?;
        Some(format!("{}{}{}", &text[..m.start], best, &text[m.end..]))
    })
}

fn match_count(rule: &Rule, text: &str) -> usize {
    let pattern = CompiledPattern::compile(rule).unwrap();
    pattern
        .find_matches(rule, text, &Deadline::new(Duration::from_secs(5)))
        .unwrap()
        .len()
}

const UTILIZE_PACK: &str = r#"
[[rules]]
id = "house-style-utilize"
category = "wordiness"
severity = "low"
rule_type = "conciseness"
priority = 60
message = "Prefer 'use'."
pattern = { kind = "regex", regex = '\butili[sz]e\b' }
replacement = { kind = "fixed", candidates = ["use"] }
tags = ["house-style"]
"#;

// ─── Built-in examples ─────────────────────────────────────────────────────

#[test]
fn every_builtin_rule_has_examples() {
    let catalog = RuleCatalog::builtin();
    for rule in catalog.iter() {
        assert!(!rule.examples.is_empty(), "rule {} has no examples", rule.id);
    }
}

#[test]
fn builtin_examples_are_reproduced() {
    let catalog = RuleCatalog::builtin();
    for rule in catalog.iter() {
        for example in &rule.examples {
            if rule.replacement.is_flag_only() {
                assert!(
                    match_count(rule, &example.incorrect) > 0,
                    "advisory rule {} does not flag {:?}",
                    rule.id,
                    example.incorrect
                );
                continue;
            }
            let fixed = fix_first(rule, &example.incorrect);
            assert_eq!(
                fixed.as_deref(),
                Some(example.correct.as_str()),
                "rule {} on {:?}",
                rule.id,
                example.incorrect
            );
        }
    }
}

#[test]
fn corrected_examples_are_not_flagged_again() {
    let catalog = RuleCatalog::builtin();
    for rule in catalog.iter().filter(|r| !r.replacement.is_flag_only()) {
        for example in &rule.examples {
            assert_eq!(
                fix_first(rule, &example.correct),
                None,
                "rule {} still fires on {:?}",
                rule.id,
                example.correct
            );
        }
    }
}

#[test]
fn dialect_examples_are_fully_converted() {
    let catalog = RuleCatalog::builtin();
    for id in ["american-spelling", "british-spelling"] {
        let rule = catalog.get(id).unwrap();
        for example in &rule.examples {
            assert_eq!(match_count(rule, &example.incorrect), 1, "rule {id} on {:?}", example.incorrect);
            assert_eq!(match_count(rule, &example.correct), 0, "rule {id} on {:?}", example.correct);
        }
    }
}

// ─── Views ─────────────────────────────────────────────────────────────────

#[test]
fn filtered_views_agree_with_rule_fields() {
    let catalog = RuleCatalog::builtin();

    let agreement = catalog.rules_by_category(Category::SubjectVerbAgreement);
    assert!(agreement.len() >= 4);
    assert!(agreement.iter().all(|r| r.category == Category::SubjectVerbAgreement));

    let conciseness = catalog.rules_by_type(RuleType::Conciseness);
    assert!(conciseness.iter().any(|r| r.id == "redundant-phrase"));

    let high = catalog.rules_by_severity(Severity::High);
    assert!(high.iter().all(|r| r.severity == Severity::High));

    let tagged = catalog.rules_by_tag("agreement");
    assert!(tagged.iter().any(|r| r.id == "sva-third-person-singular"));
}

#[test]
fn active_rules_exclude_disabled_definitions() {
    let catalog = RuleCatalog::builtin();
    assert_eq!(
        catalog.active_rules().len(),
        catalog.iter().filter(|r| r.enabled).count()
    );
}

#[test]
fn get_returns_none_for_unknown_ids() {
    assert!(RuleCatalog::builtin().get("no-such-rule").is_none());
}

// ─── Rule packs ────────────────────────────────────────────────────────────

#[test]
fn pack_rules_are_appended() {
    let base = RuleCatalog::builtin();
    let extended = base.with_pack_str(UTILIZE_PACK).unwrap();
    assert_eq!(extended.len(), base.len() + 1);
    let rule = extended.get("house-style-utilize").unwrap();
    assert_eq!(fix_first(rule, "We utilize tools."), Some("We use tools.".to_string()));
    assert!(base.get("house-style-utilize").is_none());
}

#[test]
fn pack_with_builtin_id_is_rejected() {
    let pack = UTILIZE_PACK.replace("house-style-utilize", "repeated-word");
    let err = RuleCatalog::builtin().with_pack_str(&pack).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateRule { ref id } if id == "repeated-word"));
}

#[test]
fn pack_with_internal_duplicate_is_rejected() {
    let pack = format!("{UTILIZE_PACK}\n{UTILIZE_PACK}");
    let err = RuleCatalog::builtin().with_pack_str(&pack).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateRule { .. }));
}

#[test]
fn pack_with_invalid_regex_is_rejected() {
    let pack = UTILIZE_PACK.replace(r"\butili[sz]e\b", r"(unclosed");
    let err = RuleCatalog::builtin().with_pack_str(&pack).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRule { .. }), "{err}");
}

#[test]
fn pack_with_out_of_range_values_is_rejected() {
    let priority = UTILIZE_PACK.replace("priority = 60", "priority = 120");
    assert!(matches!(
        RuleCatalog::builtin().with_pack_str(&priority).unwrap_err(),
        CatalogError::InvalidRule { .. }
    ));

    let weight = format!(
        "{UTILIZE_PACK}quality_factors = [{{ kind = \"match-length\", weight = 1.5 }}]\n"
    );
    assert!(matches!(
        RuleCatalog::builtin().with_pack_str(&weight).unwrap_err(),
        CatalogError::InvalidRule { .. }
    ));
}

#[test]
fn pack_referencing_missing_group_is_rejected() {
    let pack = UTILIZE_PACK.replace(
        r#"replacement = { kind = "fixed", candidates = ["use"] }"#,
        r#"replacement = { kind = "template", templates = ["$4"] }"#,
    );
    assert!(matches!(
        RuleCatalog::builtin().with_pack_str(&pack).unwrap_err(),
        CatalogError::InvalidRule { .. }
    ));
}

#[test]
fn malformed_pack_is_a_parse_error() {
    let err = RuleCatalog::builtin().with_pack_str("[[rules]\nid = ").unwrap_err();
    assert!(matches!(err, CatalogError::PackParse(_)));
}

#[test]
fn pack_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(UTILIZE_PACK.as_bytes()).unwrap();
    let extended = RuleCatalog::builtin().with_pack_file(file.path()).unwrap();
    assert!(extended.get("house-style-utilize").is_some());
    assert_eq!(extended.rules_by_tag("house-style").len(), 1);
}
