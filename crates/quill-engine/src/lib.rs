//! # quill-engine
//!
//! Rule-based prose suggestion engine. Text goes in; ranked, scored
//! suggestions with replacement candidates come out.
//!
//! ```no_run
//! use quill_core::EngineConfigOverrides;
//! use quill_engine::SuggestionEngine;
//!
//! let engine = SuggestionEngine::new();
//! let result = engine.check_text("He run fast.", &EngineConfigOverrides::default());
//! for s in &result.suggestions {
//!     println!("{}: {:?}", s.message, s.replacements);
//! }
//! ```

pub mod cache;
pub mod engine;
pub mod matcher;
pub mod ranking;
pub mod replacement;
pub mod rules;
pub mod scoring;

pub use cache::{PerformanceStats, RuleTiming};
pub use engine::{EngineInfo, EngineResult, QualityStats, Suggestion, SuggestionEngine};
pub use rules::{ReplacementStrategy, Rule, RuleCatalog, RulePack, RulePattern};
pub use scoring::ImpactAnalysis;
