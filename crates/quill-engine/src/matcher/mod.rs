//! Pattern matcher: compiles rule patterns once and scans text for
//! non-overlapping matches with absolute byte offsets.
//!
//! All pattern kinds share one scan loop. It stops after the first accepted
//! match for non-global rules, always advances past zero-length matches, and
//! resumes after the first word of a guard-rejected match so overlapping
//! candidates are still seen.

pub mod context;
mod structural;

use std::time::{Duration, Instant};

use quill_core::RuleError;
use regex::{Captures, Regex};
use smallvec::SmallVec;

use crate::rules::lexicon::{self, LexiconId};
use crate::rules::types::{Guard, Rule, RulePattern};

/// Capture group spans. Index 0 is the whole regex match.
pub type GroupSpans = SmallVec<[Option<(usize, usize)>; 4]>;

/// One accepted match. `start..end` is the reported span (the focus group
/// when the rule has one); group spans are absolute byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub start: usize,
    pub end: usize,
    pub groups: GroupSpans,
}

impl RawMatch {
    /// Text of capture group `index`, if it participated.
    pub fn group<'t>(&self, text: &'t str, index: usize) -> Option<&'t str> {
        self.groups
            .get(index)
            .copied()
            .flatten()
            .map(|(s, e)| &text[s..e])
    }

    pub fn group_span(&self, index: usize) -> Option<(usize, usize)> {
        self.groups.get(index).copied().flatten()
    }
}

/// Wall-clock limits for one rule scan.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    rule_budget: Duration,
    call_deadline: Option<Instant>,
    call_budget_ms: u64,
}

impl Deadline {
    pub fn new(rule_budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            rule_budget,
            call_deadline: None,
            call_budget_ms: 0,
        }
    }

    /// Also stop when the whole call's budget runs out.
    pub fn with_call_deadline(mut self, deadline: Instant, budget_ms: u64) -> Self {
        self.call_deadline = Some(deadline);
        self.call_budget_ms = budget_ms;
        self
    }

    pub fn check(&self, rule_id: &str) -> Result<(), RuleError> {
        if self.started.elapsed() > self.rule_budget {
            return Err(RuleError::Timeout {
                rule_id: rule_id.to_string(),
                budget_ms: self.rule_budget.as_millis() as u64,
            });
        }
        if let Some(deadline) = self.call_deadline {
            if Instant::now() > deadline {
                return Err(RuleError::BudgetExhausted {
                    rule_id: rule_id.to_string(),
                    budget_ms: self.call_budget_ms,
                });
            }
        }
        Ok(())
    }
}

/// A rule pattern compiled for scanning.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    Regex { regex: Regex, focus: Option<usize> },
    Words { token: Regex, lexicon: LexiconId },
    RepeatedWord,
    LongSentence { max_words: usize },
}

const TOKEN_PATTERN: &str = r"(?i)\b[a-z]+(?:['’][a-z]+)*\b";

impl CompiledPattern {
    /// Compile a rule's pattern. Regexes are case-insensitive; `(?-i:...)`
    /// switches case sensitivity back on locally.
    pub fn compile(rule: &Rule) -> Result<Self, RuleError> {
        let invalid = |message: String| RuleError::InvalidPattern {
            rule_id: rule.id.clone(),
            message,
        };
        let compiled = match &rule.pattern {
            RulePattern::Regex { regex, focus } => {
                let regex = Regex::new(&format!("(?i){regex}")).map_err(|e| invalid(e.to_string()))?;
                if let Some(group) = focus {
                    if *group >= regex.captures_len() {
                        return Err(invalid(format!("focus group {group} does not exist")));
                    }
                }
                Self::Regex { regex, focus: *focus }
            }
            RulePattern::Phrases { lexicon } => {
                let regex = phrase_regex(*lexicon).map_err(|e| invalid(e.to_string()))?;
                Self::Regex { regex, focus: None }
            }
            RulePattern::Words { lexicon } => Self::Words {
                token: Regex::new(TOKEN_PATTERN).map_err(|e| invalid(e.to_string()))?,
                lexicon: *lexicon,
            },
            RulePattern::RepeatedWord => Self::RepeatedWord,
            RulePattern::LongSentence { max_words } => {
                if *max_words == 0 {
                    return Err(invalid("max_words must be positive".to_string()));
                }
                Self::LongSentence { max_words: *max_words }
            }
        };
        compiled.check_groups(rule).map_err(invalid)?;
        Ok(compiled)
    }

    /// Number of capture groups a match carries, including group 0.
    pub fn group_count(&self) -> usize {
        match self {
            Self::Regex { regex, .. } => regex.captures_len(),
            Self::Words { .. } | Self::LongSentence { .. } => 1,
            Self::RepeatedWord => 3,
        }
    }

    fn check_groups(&self, rule: &Rule) -> Result<(), String> {
        let count = self.group_count();
        let mut referenced: Vec<usize> = rule
            .guards
            .iter()
            .filter_map(|g| match g {
                Guard::GroupIn { group, .. }
                | Guard::GroupNotIn { group, .. }
                | Guard::GroupNotAcronym { group } => Some(*group),
                Guard::PrecedingWordNotIn { .. } => None,
            })
            .collect();
        referenced.extend(crate::replacement::strategy::referenced_groups(&rule.replacement));
        match referenced.into_iter().find(|g| *g >= count) {
            Some(group) => Err(format!("group {group} does not exist (pattern has {count})")),
            None => Ok(()),
        }
    }

    /// Scan `text`, returning accepted matches in order.
    pub fn find_matches(
        &self,
        rule: &Rule,
        text: &str,
        deadline: &Deadline,
    ) -> Result<Vec<RawMatch>, RuleError> {
        match self {
            Self::Regex { regex, focus } => {
                scan(rule, text, deadline, |pos| regex.captures_at(text, pos).map(|c| spans(&c)), *focus)
            }
            Self::Words { token, lexicon } => {
                let lexicon = lexicon.lexicon();
                scan(
                    rule,
                    text,
                    deadline,
                    |pos| {
                        let mut pos = pos;
                        while let Some(m) = token.find_at(text, pos) {
                            if lexicon.contains(m.as_str()) {
                                return Some(SmallVec::from_elem(Some((m.start(), m.end())), 1));
                            }
                            pos = m.end();
                        }
                        None
                    },
                    None,
                )
            }
            Self::RepeatedWord => {
                scan(rule, text, deadline, |pos| structural::next_repeated_word(text, pos), None)
            }
            Self::LongSentence { max_words } => scan(
                rule,
                text,
                deadline,
                |pos| structural::next_long_sentence(text, pos, *max_words),
                None,
            ),
        }
    }
}

fn spans(caps: &Captures<'_>) -> GroupSpans {
    caps.iter().map(|m| m.map(|m| (m.start(), m.end()))).collect()
}

fn phrase_regex(lexicon: LexiconId) -> Result<Regex, regex::Error> {
    let mut phrases: Vec<&str> = lexicon.lexicon().keys().collect();
    // Longest first so "in close proximity to" wins over "close proximity".
    phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternatives: Vec<String> = phrases
        .iter()
        .map(|p| {
            regex::escape(p)
                .replace(' ', r"\s+")
                .replace('\'', "['’]")
        })
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
}

/// The shared scan loop. `next` finds the next candidate at or after a byte
/// offset and returns its group spans. With a `focus` group the loop resumes
/// at the focus end rather than the whole-match end, so consecutive whole
/// matches may share trailing context.
fn scan<F>(
    rule: &Rule,
    text: &str,
    deadline: &Deadline,
    mut next: F,
    focus: Option<usize>,
) -> Result<Vec<RawMatch>, RuleError>
where
    F: FnMut(usize) -> Option<GroupSpans>,
{
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        deadline.check(&rule.id)?;
        let Some(groups) = next(pos) else { break };
        let Some((whole_start, whole_end)) = groups.first().copied().flatten() else { break };

        if !guards_accept(rule, text, whole_start, &groups) {
            pos = resume_after_first_word(text, whole_start, whole_end);
            continue;
        }

        let (start, end) = focus
            .and_then(|f| groups.get(f).copied().flatten())
            .unwrap_or((whole_start, whole_end));
        matches.push(RawMatch { start, end, groups });

        if !rule.global {
            break;
        }
        pos = if end > whole_start { end } else { advance_one(text, whole_start) };
    }

    Ok(matches)
}

fn advance_one(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

fn resume_after_first_word(text: &str, start: usize, end: usize) -> usize {
    let next_space = text[start..end]
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, _)| start + i);
    match next_space {
        Some(p) if p > start => p,
        _ if end > start => end,
        _ => advance_one(text, start),
    }
}

fn guards_accept(rule: &Rule, text: &str, whole_start: usize, groups: &GroupSpans) -> bool {
    let group_text = |g: usize| groups.get(g).copied().flatten().map(|(s, e)| &text[s..e]);
    rule.guards.iter().all(|guard| match guard {
        Guard::GroupIn { group, lexicon } => {
            group_text(*group).is_some_and(|t| lexicon.lexicon().contains(t))
        }
        Guard::GroupNotIn { group, lexicon } => {
            group_text(*group).map_or(true, |t| !lexicon.lexicon().contains(t))
        }
        Guard::PrecedingWordNotIn { lexicon } => context::preceding_word(text, whole_start)
            .map_or(true, |w| !lexicon.lexicon().contains(&lexicon::normalize(w))),
        Guard::GroupNotAcronym { group } => group_text(*group).map_or(true, |t| !is_acronym(t)),
    })
}

fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}
