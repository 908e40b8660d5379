//! Execution limits for rule evaluation.

use serde::{Deserialize, Serialize};

/// Wall-clock budgets and parallelism for a `check_text` call.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LimitsConfig {
    /// Per-rule scan budget in milliseconds. Default: 250.
    pub rule_timeout_ms: Option<u64>,
    /// Per-call budget in milliseconds. Rules not started before it runs out
    /// are skipped. Default: 2000.
    pub call_budget_ms: Option<u64>,
    /// Evaluate rules in parallel. Default: true.
    pub parallel: Option<bool>,
    /// Record per-rule timings in the performance monitor. Default: true.
    pub track_rule_timings: Option<bool>,
}

impl LimitsConfig {
    pub fn effective_rule_timeout_ms(&self) -> u64 {
        self.rule_timeout_ms.unwrap_or(250).max(1)
    }

    pub fn effective_call_budget_ms(&self) -> u64 {
        self.call_budget_ms.unwrap_or(2_000).max(1)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn effective_track_rule_timings(&self) -> bool {
        self.track_rule_timings.unwrap_or(true)
    }
}
