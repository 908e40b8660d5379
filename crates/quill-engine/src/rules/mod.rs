//! Rule definitions, lexicons, the built-in rule set, and the catalog.

pub mod builtin;
pub mod catalog;
pub mod lexicon;
pub mod morphology;
pub mod pack;
pub mod types;

pub use catalog::RuleCatalog;
pub use lexicon::{Lexicon, LexiconId};
pub use pack::RulePack;
pub use types::{
    AgreementForm, FactorKind, Guard, QualityFactor, ReplacementStrategy, Rule, RuleExample,
    RulePattern,
};
