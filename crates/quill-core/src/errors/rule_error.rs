//! Per-rule execution errors. These never escape a `check_text` call: the
//! engine logs them and skips the offending rule.

use super::error_code::{self, QuillErrorCode};

/// Errors raised while evaluating a single rule against a text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule '{rule_id}' has an invalid pattern: {message}")]
    InvalidPattern { rule_id: String, message: String },

    #[error("rule '{rule_id}' panicked during evaluation")]
    Panicked { rule_id: String },

    #[error("rule '{rule_id}' exceeded its {budget_ms}ms budget")]
    Timeout { rule_id: String, budget_ms: u64 },

    #[error("call budget of {budget_ms}ms exhausted before rule '{rule_id}' ran")]
    BudgetExhausted { rule_id: String, budget_ms: u64 },
}

impl RuleError {
    /// The id of the rule that failed.
    pub fn rule_id(&self) -> &str {
        match self {
            Self::InvalidPattern { rule_id, .. }
            | Self::Panicked { rule_id }
            | Self::Timeout { rule_id, .. }
            | Self::BudgetExhausted { rule_id, .. } => rule_id,
        }
    }
}

impl QuillErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::RULE_PATTERN_INVALID,
            Self::Panicked { .. } => error_code::RULE_PANICKED,
            Self::Timeout { .. } => error_code::RULE_TIMEOUT,
            Self::BudgetExhausted { .. } => error_code::CALL_BUDGET_EXHAUSTED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_reports_its_rule() {
        let errors = [
            RuleError::InvalidPattern { rule_id: "a".into(), message: "bad".into() },
            RuleError::Panicked { rule_id: "a".into() },
            RuleError::Timeout { rule_id: "a".into(), budget_ms: 5 },
            RuleError::BudgetExhausted { rule_id: "a".into(), budget_ms: 5 },
        ];
        for e in &errors {
            assert_eq!(e.rule_id(), "a");
            assert!(e.to_string().contains("'a'"));
        }
    }
}
