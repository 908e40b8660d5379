//! Process-wide performance counters.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use quill_core::FxHashMap;
use serde::Serialize;

/// Accumulated timing for one rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuleTiming {
    pub calls: u64,
    pub total_micros: u64,
    pub max_micros: u64,
    pub errors: u64,
}

/// Snapshot returned by [`PerformanceMonitor::stats`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceStats {
    pub total_calls: u64,
    pub computed_runs: u64,
    pub total_execution_ms: f64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// hits / (hits + misses), 0 when nothing was looked up.
    pub hit_rate: f64,
    /// Mean over computed runs only.
    pub average_execution_ms: f64,
    pub cache_entries: u64,
    pub rule_timings: BTreeMap<String, RuleTiming>,
}

/// Lock-free call counters plus a mutex-guarded per-rule table.
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    total_calls: AtomicU64,
    computed_runs: AtomicU64,
    total_exec_micros: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    rules: Mutex<FxHashMap<String, RuleTiming>>,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// A miss that ran the pipeline for `elapsed`.
    pub fn record_miss(&self, elapsed: Duration) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
        self.computed_runs.fetch_add(1, Ordering::Relaxed);
        self.total_exec_micros
            .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_rule(&self, rule_id: &str, elapsed: Duration, failed: bool) {
        let micros = elapsed.as_micros() as u64;
        let mut rules = self.rules.lock().unwrap_or_else(PoisonError::into_inner);
        let timing = rules.entry(rule_id.to_string()).or_default();
        timing.calls += 1;
        timing.total_micros += micros;
        timing.max_micros = timing.max_micros.max(micros);
        if failed {
            timing.errors += 1;
        }
    }

    pub fn stats(&self, cache_entries: u64) -> PerformanceStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let computed = self.computed_runs.load(Ordering::Relaxed);
        let total_ms = self.total_exec_micros.load(Ordering::Relaxed) as f64 / 1_000.0;
        let lookups = hits + misses;

        let rule_timings = self
            .rules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, t)| (id.clone(), *t))
            .collect();

        PerformanceStats {
            total_calls: self.total_calls.load(Ordering::Relaxed),
            computed_runs: computed,
            total_execution_ms: total_ms,
            cache_hits: hits,
            cache_misses: misses,
            hit_rate: if lookups == 0 { 0.0 } else { hits as f64 / lookups as f64 },
            average_execution_ms: if computed == 0 { 0.0 } else { total_ms / computed as f64 },
            cache_entries,
            rule_timings,
        }
    }

    pub fn reset(&self) {
        for counter in [
            &self.total_calls,
            &self.computed_runs,
            &self.total_exec_micros,
            &self.hits,
            &self.misses,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
        self.rules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
