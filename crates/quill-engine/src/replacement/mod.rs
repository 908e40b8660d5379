//! Replacement generation and validation.
//!
//! A strategy produces raw candidates; each is re-cased to match the
//! original, deduplicated, and validated before at most
//! [`MAX_REPLACEMENTS`] survive.

pub mod case;
pub mod strategy;
pub mod validation;

use crate::matcher::RawMatch;
use crate::rules::types::ReplacementStrategy;

pub const MAX_REPLACEMENTS: usize = 3;

/// Final, ordered candidates for a match. Empty when nothing usable remains.
pub fn candidates_for(strategy: &ReplacementStrategy, text: &str, m: &RawMatch) -> Vec<String> {
    let original = &text[m.start..m.end];
    let mut out: Vec<String> = Vec::with_capacity(MAX_REPLACEMENTS);

    for raw in strategy::generate(strategy, text, m) {
        let candidate = case::preserve_case(original, &raw);
        if candidate == original || out.contains(&candidate) {
            continue;
        }
        if !validation::is_valid(text, m.start, m.end, &candidate) {
            tracing::trace!(candidate = %candidate, "candidate failed validation");
            continue;
        }
        out.push(candidate);
        if out.len() == MAX_REPLACEMENTS {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn duplicates_and_no_op_candidates_are_dropped() {
        let text = "good";
        let m = RawMatch { start: 0, end: 4, groups: smallvec![Some((0, 4))] };
        let strategy = ReplacementStrategy::fixed(&["good", "great", "great", "fine", "nice", "okay"]);
        assert_eq!(candidates_for(&strategy, text, &m), vec!["great", "fine", "nice"]);
    }

    #[test]
    fn candidates_follow_original_case() {
        let text = "Teh end";
        let m = RawMatch { start: 0, end: 3, groups: smallvec![Some((0, 3))] };
        let strategy = ReplacementStrategy::fixed(&["the"]);
        assert_eq!(candidates_for(&strategy, text, &m), vec!["The"]);
    }
}
