//! Quality scoring and impact classification.

pub mod impact;
pub mod quality;

pub use impact::{classify, ImpactAnalysis};
pub use quality::{minimum_quality, score, QualityFactorScore, QualityScore};
