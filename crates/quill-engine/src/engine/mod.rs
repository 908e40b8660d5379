//! SuggestionEngine: the public entry point.
//!
//! `check_text` merges per-call overrides into the session configuration,
//! looks the (text, configuration) pair up in the result cache, and on a
//! miss runs the pipeline: select rules, evaluate them (in parallel when
//! enabled), then rank and summarize.

pub mod evaluator;
pub mod types;

use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use quill_core::{
    Category, EngineConfig, EngineConfigOverrides, EngineError, LimitsConfig, QuillConfig,
    QuillErrorCode, QuillResult, RuleError, RuleType,
};
use rayon::prelude::*;

use crate::cache::{CacheKey, Lookup, PerformanceMonitor, PerformanceStats, ResultCache};
use crate::matcher::context::RuleContext;
use crate::matcher::{CompiledPattern, Deadline};
use crate::ranking;
use crate::rules::catalog::RuleCatalog;
use crate::rules::lexicon::LexiconId;
use crate::rules::types::Rule;

pub use types::{EngineInfo, EngineResult, QualityStats, Suggestion};

/// Rule-based prose suggestion engine. `Send + Sync`; share it behind an
/// `Arc` to check texts from several threads.
pub struct SuggestionEngine {
    catalog: RuleCatalog,
    /// Parallel to `catalog.rules()`. Compile failures are kept so every
    /// call can report them.
    compiled: Vec<Result<CompiledPattern, RuleError>>,
    session: RwLock<EngineConfig>,
    cache: ResultCache,
    monitor: PerformanceMonitor,
    limits: LimitsConfig,
}

impl SuggestionEngine {
    /// An engine with the built-in catalog and default configuration.
    pub fn new() -> Self {
        Self::with_config(QuillConfig::default())
    }

    pub fn with_config(config: QuillConfig) -> Self {
        Self::with_catalog(RuleCatalog::builtin(), config)
    }

    pub fn with_catalog(catalog: RuleCatalog, config: QuillConfig) -> Self {
        let compiled: Vec<_> = catalog
            .iter()
            .map(|rule| {
                let compiled = CompiledPattern::compile(rule);
                if let Err(ref e) = compiled {
                    tracing::warn!(rule_id = %rule.id, error = %e, code = e.error_code(), "rule failed to compile");
                }
                compiled
            })
            .collect();

        tracing::debug!(
            rules = catalog.len(),
            parallel = config.limits.effective_parallel(),
            cache = config.cache.effective_enabled(),
            "suggestion engine initialized"
        );

        Self {
            session: RwLock::new(config.resolved_engine()),
            cache: ResultCache::new(&config.cache),
            monitor: PerformanceMonitor::new(),
            limits: config.limits,
            compiled,
            catalog,
        }
    }

    /// Check `text` under the session configuration with `overrides` applied
    /// for this call only. Never fails: rules that error are skipped.
    pub fn check_text(&self, text: &str, overrides: &EngineConfigOverrides) -> Arc<EngineResult> {
        let config = self.config().merge(overrides);
        let key = CacheKey::new(text, &config);

        let started = Instant::now();
        let (result, lookup) = self.cache.get_or_compute(key, || self.run(text, &config));
        match lookup {
            Lookup::Hit => self.monitor.record_hit(),
            Lookup::Miss => self.monitor.record_miss(started.elapsed()),
        }
        tracing::debug!(
            text_len = text.len(),
            suggestions = result.suggestions.len(),
            cached = lookup == Lookup::Hit,
            "check_text complete"
        );
        result
    }

    fn run(&self, text: &str, config: &EngineConfig) -> EngineResult {
        let started = Instant::now();
        let ctx = RuleContext {
            text,
            language: &config.language,
            document_type: config.document_type,
            user_level: config.user_level,
        };

        let selected: Vec<usize> = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, rule)| is_selected(rule, config, &ctx))
            .map(|(i, _)| i)
            .collect();

        let budget_ms = self.limits.effective_call_budget_ms();
        let call_deadline = started + Duration::from_millis(budget_ms);
        let evaluate = |&i: &usize| self.evaluate(i, &ctx, config, call_deadline, budget_ms);

        let batches: Vec<Vec<Suggestion>> = if self.limits.effective_parallel() {
            selected.par_iter().map(evaluate).collect()
        } else {
            selected.iter().map(evaluate).collect()
        };

        let suggestions = ranking::rank(batches.into_iter().flatten().collect(), config);
        EngineResult {
            quality_stats: ranking::quality_stats(&suggestions),
            category_breakdown: ranking::category_breakdown(&suggestions),
            suggestions,
            total_rules_processed: selected.len(),
            execution_time_ms: started.elapsed().as_secs_f64() * 1_000.0,
        }
    }

    fn evaluate(
        &self,
        index: usize,
        ctx: &RuleContext<'_>,
        config: &EngineConfig,
        call_deadline: Instant,
        budget_ms: u64,
    ) -> Vec<Suggestion> {
        let rule = &self.catalog.rules()[index];
        let started = Instant::now();

        let outcome = match &self.compiled[index] {
            Ok(pattern) => {
                let deadline = Deadline::new(Duration::from_millis(
                    self.limits.effective_rule_timeout_ms(),
                ))
                .with_call_deadline(call_deadline, budget_ms);
                catch_unwind(AssertUnwindSafe(|| {
                    evaluator::evaluate_rule(rule, pattern, ctx, config.quality_threshold, &deadline)
                }))
                .unwrap_or_else(|_| {
                    Err(RuleError::Panicked {
                        rule_id: rule.id.clone(),
                    })
                })
            }
            Err(e) => Err(e.clone()),
        };

        let (suggestions, failed) = match outcome {
            Ok(suggestions) => (suggestions, false),
            Err(e @ RuleError::Panicked { .. }) => {
                tracing::error!(rule_id = e.rule_id(), code = e.error_code(), "rule panicked during evaluation");
                (Vec::new(), true)
            }
            Err(e) => {
                tracing::warn!(rule_id = e.rule_id(), error = %e, code = e.error_code(), "rule skipped");
                (Vec::new(), true)
            }
        };

        if self.limits.effective_track_rule_timings() {
            self.monitor.record_rule(&rule.id, started.elapsed(), failed);
        }
        suggestions
    }

    pub fn rule_by_id(&self, id: &str) -> Option<&Rule> {
        self.catalog.get(id)
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Switch a rule on or off for this session. The catalog is untouched.
    pub fn set_rule_enabled(&self, id: &str, enabled: bool) -> QuillResult<()> {
        if self.catalog.get(id).is_none() {
            return Err(EngineError::RuleNotFound { id: id.to_string() });
        }
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_rule_enabled(id, enabled);
        tracing::info!(rule_id = id, enabled, "rule toggled for session");
        Ok(())
    }

    /// Merge `overrides` into the session defaults.
    pub fn update_config(&self, overrides: &EngineConfigOverrides) {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(overrides);
    }

    /// Snapshot of the session defaults.
    pub fn config(&self) -> EngineConfig {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn engine_info(&self) -> EngineInfo {
        let config = self.config();
        let mut rules_by_category: BTreeMap<Category, usize> = BTreeMap::new();
        let mut rules_by_type: BTreeMap<RuleType, usize> = BTreeMap::new();
        for rule in self.catalog.iter() {
            *rules_by_category.entry(rule.category).or_insert(0) += 1;
            *rules_by_type.entry(rule.rule_type).or_insert(0) += 1;
        }
        EngineInfo {
            version: env!("CARGO_PKG_VERSION"),
            total_rules: self.catalog.len(),
            active_rules: self
                .catalog
                .iter()
                .filter(|r| is_switched_on(r, &config))
                .count(),
            rules_by_category,
            rules_by_type,
            supported_categories: Category::all().to_vec(),
            supported_rule_types: RuleType::all().to_vec(),
            lexicon_count: LexiconId::all().len(),
            cache_enabled: self.cache.is_enabled(),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn performance_stats(&self) -> PerformanceStats {
        self.monitor.stats(self.cache.entry_count())
    }

    pub fn reset_stats(&self) {
        self.monitor.reset();
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Session toggles override the rule definition; disabling wins.
fn is_switched_on(rule: &Rule, config: &EngineConfig) -> bool {
    !config.disabled_rules.contains(&rule.id)
        && (rule.enabled || config.enabled_rules.contains(&rule.id))
}

fn is_selected(rule: &Rule, config: &EngineConfig, ctx: &RuleContext<'_>) -> bool {
    is_switched_on(rule, config)
        && config.enabled_categories.contains(&rule.category)
        && (!rule.advanced || config.enable_advanced_rules)
        && evaluator::applies_to(rule, ctx)
}
