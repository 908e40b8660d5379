//! Candidate validation: structural sanity and tense consistency.

use crate::matcher::context::{snap_to_char_boundary, words};
use crate::rules::lexicon::LexiconId;
use crate::rules::morphology;

/// Bytes on each side used to rebuild the fragment for structural checks.
const FRAGMENT_WINDOW: usize = 30;
/// Bytes on each side scanned for the surrounding tense, within the
/// sentence holding the match.
const TENSE_WINDOW: usize = 120;

const BE_FORMS: &[&str] = &["am", "is", "are", "was", "were"];
const HAVE_FORMS: &[&str] = &["has", "have"];
const DO_FORMS: &[&str] = &["do", "does"];

/// Words ending in "-ed" that are not past-tense verbs.
const NOT_PAST_ED: &[&str] = &[
    "need", "feed", "seed", "speed", "bleed", "breed", "indeed", "proceed", "succeed",
    "exceed", "embed", "hundred", "sacred", "naked", "wicked", "kindred", "red", "bed",
    "shed", "wed", "weed", "greed", "deed", "creed", "steed", "tweed", "shred", "bred",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Present,
    Future,
}

/// Both checks pass for `candidate` replacing `text[start..end]`.
pub fn is_valid(text: &str, start: usize, end: usize, candidate: &str) -> bool {
    structurally_sound(text, start, end, candidate) && tense_consistent(text, start, end, candidate)
}

/// Reject a candidate that introduces an auxiliary contradiction ("is are")
/// or an adjacent duplicated word that the original fragment did not have.
pub fn structurally_sound(text: &str, start: usize, end: usize, candidate: &str) -> bool {
    let before = snap_to_char_boundary(text, start.saturating_sub(FRAGMENT_WINDOW), true);
    let after = snap_to_char_boundary(text, end.saturating_add(FRAGMENT_WINDOW), false);
    let original = &text[before..after];
    let replaced = format!("{}{}{}", &text[before..start], candidate, &text[end..after]);

    let (orig_contradictions, orig_duplicates) = structural_counts(original);
    let (new_contradictions, new_duplicates) = structural_counts(&replaced);
    new_contradictions <= orig_contradictions && new_duplicates <= orig_duplicates
}

fn structural_counts(fragment: &str) -> (usize, usize) {
    let allowed = LexiconId::RepeatableWords.lexicon();
    let tokens: Vec<String> = words(fragment).collect();
    let mut contradictions = 0;
    let mut duplicates = 0;
    for pair in tokens.windows(2) {
        let (a, b) = (pair[0].as_str(), pair[1].as_str());
        if a == b {
            if !allowed.contains(a) {
                duplicates += 1;
            }
        } else if same_family(a, b) {
            contradictions += 1;
        }
    }
    (contradictions, duplicates)
}

fn same_family(a: &str, b: &str) -> bool {
    [BE_FORMS, HAVE_FORMS, DO_FORMS]
        .iter()
        .any(|family| family.contains(&a) && family.contains(&b))
}

/// Reject a candidate that changes the tense of the match to one that
/// conflicts with the clearly dominant tense around it.
pub fn tense_consistent(text: &str, start: usize, end: usize, candidate: &str) -> bool {
    let Some(candidate_tense) = tense_of(candidate) else {
        return true;
    };
    if tense_of(&text[start..end]) == Some(candidate_tense) {
        return true;
    }

    let (sentence_start, sentence_end) = sentence_bounds(text, start, end);
    let before =
        snap_to_char_boundary(text, start.saturating_sub(TENSE_WINDOW), true).max(sentence_start);
    let after =
        snap_to_char_boundary(text, end.saturating_add(TENSE_WINDOW), false).min(sentence_end);
    let mut counts = [0usize; 3];
    for word in words(&text[before..start]).chain(words(&text[end..after])) {
        if let Some(t) = word_tense(&word) {
            counts[t as usize] += 1;
        }
    }

    match dominant(counts) {
        Some(surrounding) => surrounding == candidate_tense,
        None => true,
    }
}

/// Byte range of the sentence around `text[start..end]`, terminators excluded.
fn sentence_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let terminators = ['.', '!', '?'];
    let lo = text[..start].rfind(terminators).map_or(0, |i| i + 1);
    let hi = text[end..].find(terminators).map_or(text.len(), |i| end + i);
    (lo, hi)
}

/// Strictly greatest count, and at least two markers.
fn dominant(counts: [usize; 3]) -> Option<Tense> {
    let tenses = [Tense::Past, Tense::Present, Tense::Future];
    let (best, &max) = counts.iter().enumerate().max_by_key(|(_, c)| **c)?;
    let unique = counts.iter().filter(|c| **c == max).count() == 1;
    (max >= 2 && unique).then_some(tenses[best])
}

/// Tense signalled by a phrase: the first marker word found.
pub fn tense_of(phrase: &str) -> Option<Tense> {
    words(phrase).find_map(|w| word_tense(&w))
}

fn word_tense(word: &str) -> Option<Tense> {
    if LexiconId::PastMarkers.lexicon().contains(word) {
        return Some(Tense::Past);
    }
    if LexiconId::PresentMarkers.lexicon().contains(word) {
        return Some(Tense::Present);
    }
    if LexiconId::FutureMarkers.lexicon().contains(word) {
        return Some(Tense::Future);
    }
    if morphology::base_form(word).is_some() {
        return Some(Tense::Present);
    }
    if word.len() > 3 && word.ends_with("ed") && !NOT_PAST_ED.contains(&word) {
        return Some(Tense::Past);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auxiliary_contradiction_is_rejected() {
        let text = "They is are here.";
        // Replacing "is" with "are" would leave "are are": a new duplicate.
        assert!(!structurally_sound(text, 5, 7, "are"));
        // Dropping it removes the contradiction.
        assert!(structurally_sound(text, 5, 8, ""));
    }

    #[test]
    fn new_duplicates_are_rejected_but_existing_ones_tolerated() {
        let text = "I saw the dog.";
        assert!(!structurally_sound(text, 6, 9, "the the"));
        let text = "the the dog";
        assert!(structurally_sound(text, 8, 11, "cat"));
    }

    #[test]
    fn tense_conflicting_with_surroundings_is_rejected() {
        let text = "Today it is sunny and everyone is happy, so we goes to the beach now.";
        let start = text.find("goes").unwrap();
        assert!(!tense_consistent(text, start, start + 4, "went"));
        assert!(tense_consistent(text, start, start + 4, "go"));
    }

    #[test]
    fn same_tense_swaps_always_pass() {
        let text = "It were broken yesterday.";
        assert!(tense_consistent(text, 3, 7, "was"));
    }

    #[test]
    fn agreement_fix_against_past_narrative_is_rejected() {
        let text = "Yesterday we walked to the park and it was sunny, then he run home and we were tired.";
        let start = text.find("he run").unwrap();
        assert_eq!(tense_of("he runs"), Some(Tense::Present));
        assert!(!tense_consistent(text, start, start + 6, "he runs"));
    }

    #[test]
    fn tense_markers_in_other_sentences_are_ignored() {
        let text = "We walked there yesterday and it was late. Today he run to school.";
        let start = text.find("he run").unwrap();
        assert!(tense_consistent(text, start, start + 6, "he runs"));
    }

    #[test]
    fn inflected_present_verbs_are_markers() {
        assert_eq!(tense_of("walks"), Some(Tense::Present));
        assert_eq!(tense_of("goes"), Some(Tense::Present));
        assert_eq!(tense_of("run"), None);
    }

    #[test]
    fn ed_exceptions_are_not_past() {
        assert_eq!(tense_of("need"), None);
        assert_eq!(tense_of("walked"), Some(Tense::Past));
        assert_eq!(tense_of("will go"), Some(Tense::Future));
    }
}
