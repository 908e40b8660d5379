//! Text windows around a match.

use quill_core::{DocumentType, UserLevel};

/// Bytes of context captured on each side of a match for scoring.
pub const CONTEXT_WINDOW: usize = 40;

/// Characters shown in a suggestion's context snippet.
pub const SNIPPET_WIDTH: usize = 60;

/// Per-invocation context shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub text: &'a str,
    pub language: &'a str,
    pub document_type: DocumentType,
    pub user_level: UserLevel,
}

/// A match enriched with the text immediately around it.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub matched: &'a str,
    pub preceding: &'a str,
    pub following: &'a str,
}

impl<'a> MatchContext<'a> {
    pub fn new(text: &'a str, start: usize, end: usize) -> Self {
        // Snap inwards so neither window exceeds its byte budget.
        let before = snap_to_char_boundary(text, start.saturating_sub(CONTEXT_WINDOW), true);
        let after = snap_to_char_boundary(text, end.saturating_add(CONTEXT_WINDOW), false);
        Self {
            text,
            start,
            end,
            matched: &text[start..end],
            preceding: &text[before..start],
            following: &text[end..after],
        }
    }
}

/// Snap a byte offset to a char boundary, forward or backward.
pub fn snap_to_char_boundary(text: &str, pos: usize, forward: bool) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    if forward {
        while p < text.len() && !text.is_char_boundary(p) {
            p += 1;
        }
    } else {
        while p > 0 && !text.is_char_boundary(p) {
            p -= 1;
        }
    }
    p
}

/// A single-line snippet of about `width` bytes centred on the span, with
/// ellipses where it was cut.
pub fn context_around(text: &str, start: usize, end: usize, width: usize) -> String {
    let mid = (start + end) / 2;
    let half = width / 2;
    let ctx_start = snap_to_char_boundary(text, mid.saturating_sub(half), false);
    let ctx_end = snap_to_char_boundary(text, mid.saturating_add(half).max(end), true);

    let snippet = text[ctx_start..ctx_end].replace(['\n', '\r'], " ");
    let prefix = if ctx_start > 0 { "..." } else { "" };
    let suffix = if ctx_end < text.len() { "..." } else { "" };
    format!("{prefix}{snippet}{suffix}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '\u{2019}' | '.' | '-')
}

/// The word immediately before byte offset `pos`, skipping whitespace.
/// Trailing periods are dropped, so "e.g." comes back as "e.g".
pub fn preceding_word(text: &str, pos: usize) -> Option<&str> {
    let head = text[..pos].trim_end();
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(i, _)| i)?;
    let word = head[start..].trim_end_matches('.');
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Lowercase word tokens of a fragment. Apostrophes stay inside words.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .filter(|w| !w.is_empty())
        .map(|w| w.replace('\u{2019}', "'").to_lowercase())
}

/// Whether `pos` begins a sentence: only whitespace or a terminator before it.
pub fn at_sentence_start(text: &str, pos: usize) -> bool {
    let head = text[..pos].trim_end();
    head.is_empty() || head.ends_with(['.', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_snap_to_char_boundaries() {
        let text = "café ".repeat(20);
        let ctx = MatchContext::new(&text, 50, 55);
        assert!(ctx.preceding.len() <= CONTEXT_WINDOW);
        assert!(ctx.following.len() <= CONTEXT_WINDOW);
        assert_eq!(ctx.matched, "fé c");
    }

    #[test]
    fn preceding_word_handles_abbreviations() {
        assert_eq!(preceding_word("see e.g. the", 9), Some("e.g"));
        assert_eq!(preceding_word("make it work", 5), Some("make"));
        assert_eq!(preceding_word("   it", 3), None);
    }

    #[test]
    fn snippet_marks_truncation() {
        let text = "a".repeat(200);
        let snippet = context_around(&text, 100, 101, 60);
        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
        assert_eq!(context_around("short", 0, 5, 60), "short");
    }

    #[test]
    fn sentence_start_detection() {
        assert!(at_sentence_start("Hello", 0));
        assert!(at_sentence_start("Done. Next", 6));
        assert!(!at_sentence_start("one two", 4));
    }
}
