//! Scanners for patterns a regex cannot express: adjacent duplicate words
//! (no backreferences) and sentence length.

use smallvec::smallvec;

use super::GroupSpans;
use crate::rules::lexicon::LexiconId;

/// Word tokens (letters, digits, inner apostrophes) starting at `pos`.
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let (offset, _) = rest.char_indices().find(|(_, c)| c.is_alphanumeric())?;
        let start = self.pos + offset;

        let mut end = start;
        let mut chars = self.text[start..].char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            let inner_apostrophe = matches!(c, '\'' | '\u{2019}')
                && chars.peek().is_some_and(|(_, n)| n.is_alphanumeric());
            if c.is_alphanumeric() || inner_apostrophe {
                end = start + i + c.len_utf8();
            } else {
                break;
            }
        }
        self.pos = end;
        Some((start, end))
    }
}

/// Next pair of identical adjacent words separated only by whitespace.
/// Groups: 0 = both words, 1 = first, 2 = second.
pub(super) fn next_repeated_word(text: &str, pos: usize) -> Option<GroupSpans> {
    let allowed = LexiconId::RepeatableWords.lexicon();
    let mut prev: Option<(usize, usize)> = None;

    for (start, end) in (Tokens { text, pos }) {
        if let Some((prev_start, prev_end)) = prev {
            let gap = &text[prev_end..start];
            let first = &text[prev_start..prev_end];
            let second = &text[start..end];
            let repeated = !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && first.to_lowercase() == second.to_lowercase()
                && !first.chars().all(|c| c.is_ascii_digit())
                && !allowed.contains(first);
            if repeated {
                return Some(smallvec![
                    Some((prev_start, end)),
                    Some((prev_start, prev_end)),
                    Some((start, end)),
                ]);
            }
        }
        prev = Some((start, end));
    }
    None
}

/// Next sentence, at or after `pos`, with more than `max_words` words.
pub(super) fn next_long_sentence(text: &str, pos: usize, max_words: usize) -> Option<GroupSpans> {
    let mut start = pos;
    while start < text.len() {
        let rest = &text[start..];
        start += rest.len() - rest.trim_start().len();
        if start >= text.len() {
            break;
        }
        let end = sentence_end(text, start);
        if text[start..end].split_whitespace().count() > max_words {
            return Some(smallvec![Some((start, end))]);
        }
        start = end;
    }
    None
}

/// End of the sentence beginning at `start`: just past a terminator that is
/// followed by whitespace, or the end of the text.
fn sentence_end(text: &str, start: usize) -> usize {
    let mut chars = text[start..].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            match chars.peek() {
                None => return text.len(),
                Some((_, next)) if next.is_whitespace() => return start + i + c.len_utf8(),
                _ => {}
            }
        }
    }
    text.len()
}
