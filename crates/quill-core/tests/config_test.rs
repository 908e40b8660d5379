//! Configuration loading from TOML strings and files.

use std::io::Write;

use quill_core::{
    Category, ConfigError, DocumentType, EngineConfig, QuillConfig, QuillErrorCode, UserLevel,
};

#[test]
fn empty_document_gives_defaults() {
    let config = QuillConfig::from_toml("").unwrap();
    assert_eq!(config.resolved_engine(), EngineConfig::default());
    assert!(config.cache.effective_enabled());
    assert_eq!(config.cache.effective_capacity(), 512);
    assert_eq!(config.cache.effective_ttl_secs(), 3_600);
    assert_eq!(config.limits.effective_rule_timeout_ms(), 250);
    assert_eq!(config.limits.effective_call_budget_ms(), 2_000);
    assert!(config.limits.effective_parallel());
}

#[test]
fn sections_override_defaults() {
    let config = QuillConfig::from_toml(
        r#"
        [engine]
        min_confidence = 65
        enabled_categories = ["spelling", "redundancy"]
        document_type = "business"
        user_level = "expert"
        language = "en-GB"

        [cache]
        capacity = 64
        ttl_secs = 0

        [limits]
        rule_timeout_ms = 50
        parallel = false
        "#,
    )
    .unwrap();

    let engine = config.resolved_engine();
    assert_eq!(engine.min_confidence, 65);
    assert_eq!(engine.enabled_categories.len(), 2);
    assert!(engine.enabled_categories.contains(&Category::Redundancy));
    assert_eq!(engine.document_type, DocumentType::Business);
    assert_eq!(engine.user_level, UserLevel::Expert);
    assert_eq!(engine.language, "en-GB");

    assert_eq!(config.cache.effective_capacity(), 64);
    assert_eq!(config.cache.effective_ttl_secs(), 0);
    assert_eq!(config.limits.effective_rule_timeout_ms(), 50);
    assert!(!config.limits.effective_parallel());
}

#[test]
fn out_of_range_numbers_are_clamped_not_rejected() {
    let config = QuillConfig::from_toml(
        "[engine]\nmin_confidence = 400\nmax_suggestions = 0\nquality_threshold = -5.0\n",
    )
    .unwrap();
    let engine = config.resolved_engine();
    assert_eq!(engine.min_confidence, 100);
    assert_eq!(engine.max_suggestions, 1);
    assert_eq!(engine.quality_threshold, 0);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = QuillConfig::from_toml("[engine]\ntheme = \"dark\"\n[extras]\nfoo = 1\n").unwrap();
    assert_eq!(config.resolved_engine(), EngineConfig::default());
}

#[test]
fn type_errors_are_parse_errors() {
    let err = QuillConfig::from_toml("[engine]\nmin_confidence = \"high\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
}

#[test]
fn unknown_category_is_a_parse_error() {
    let err = QuillConfig::from_toml("[engine]\nenabled_categories = [\"poetry\"]\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nenable_advanced_rules = true").unwrap();
    let config = QuillConfig::load(file.path()).unwrap();
    assert!(config.resolved_engine().enable_advanced_rules);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuillConfig::load(&dir.path().join("quill.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(err.error_code(), "CONFIG_IO_ERROR");
}
