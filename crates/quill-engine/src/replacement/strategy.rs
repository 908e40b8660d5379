//! Candidate generation for each replacement strategy.

use crate::matcher::RawMatch;
use crate::rules::morphology;
use crate::rules::types::{AgreementForm, ReplacementStrategy};

/// Raw candidates for a match, before case restoration and validation.
pub fn generate(strategy: &ReplacementStrategy, text: &str, m: &RawMatch) -> Vec<String> {
    let matched = &text[m.start..m.end];
    match strategy {
        ReplacementStrategy::Fixed { candidates } => candidates.clone(),
        ReplacementStrategy::Template { templates } => {
            templates.iter().map(|t| expand_template(t, text, m)).collect()
        }
        ReplacementStrategy::VerbAgreement { verb_group, form } => {
            let Some(verb) = m.group(text, *verb_group) else {
                return Vec::new();
            };
            let inflected = match form {
                AgreementForm::Singular => Some(morphology::third_person_singular(verb)),
                AgreementForm::Plural => morphology::base_form(verb),
            };
            inflected
                .and_then(|v| splice(text, m, *verb_group, &v))
                .into_iter()
                .collect()
        }
        ReplacementStrategy::LookupSwap { group, lexicon } => {
            let Some(word) = m.group(text, *group) else {
                return Vec::new();
            };
            lexicon
                .lexicon()
                .alternatives(word)
                .into_iter()
                .filter_map(|alt| splice(text, m, *group, alt))
                .collect()
        }
        ReplacementStrategy::LookupGroup { group, lexicon } => match m.group(text, *group) {
            Some(word) => lexicon
                .lexicon()
                .alternatives(word)
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        },
        ReplacementStrategy::LookupTable { lexicon } => lexicon
            .lexicon()
            .alternatives(matched)
            .into_iter()
            .map(str::to_string)
            .collect(),
        ReplacementStrategy::KeepGroups { groups } => {
            let kept: Vec<&str> = groups.iter().filter_map(|g| m.group(text, *g)).collect();
            if kept.is_empty() {
                Vec::new()
            } else {
                vec![kept.join(" ")]
            }
        }
        ReplacementStrategy::Capitalize => {
            let mut chars = matched.chars();
            match chars.next() {
                Some(first) => vec![first.to_uppercase().chain(chars).collect()],
                None => Vec::new(),
            }
        }
        ReplacementStrategy::FlagOnly => Vec::new(),
    }
}

/// Capture groups a strategy reads, for validation at compile time.
pub fn referenced_groups(strategy: &ReplacementStrategy) -> Vec<usize> {
    match strategy {
        ReplacementStrategy::Template { templates } => templates
            .iter()
            .flat_map(|t| template_refs(t).into_iter().map(|(_, _, g)| g))
            .collect(),
        ReplacementStrategy::VerbAgreement { verb_group, .. } => vec![*verb_group],
        ReplacementStrategy::LookupSwap { group, .. } | ReplacementStrategy::LookupGroup { group, .. } => {
            vec![*group]
        }
        ReplacementStrategy::KeepGroups { groups } => groups.clone(),
        _ => Vec::new(),
    }
}

/// `$N` references in a template as (start, end, group) byte ranges.
fn template_refs(template: &str) -> Vec<(usize, usize, usize)> {
    let bytes = template.as_bytes();
    let mut refs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' {
            let digits = bytes[i + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > 0 {
                if let Ok(group) = template[i + 1..i + 1 + digits].parse::<usize>() {
                    refs.push((i, i + 1 + digits, group));
                }
                i += 1 + digits;
                continue;
            }
        }
        i += 1;
    }
    refs
}

fn expand_template(template: &str, text: &str, m: &RawMatch) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut last = 0;
    for (start, end, group) in template_refs(template) {
        out.push_str(&template[last..start]);
        out.push_str(m.group(text, group).unwrap_or(""));
        last = end;
    }
    out.push_str(&template[last..]);
    out
}

/// The reported span with capture group `group` replaced by `with`.
/// Returns `None` if the group did not participate or lies outside the span.
fn splice(text: &str, m: &RawMatch, group: usize, with: &str) -> Option<String> {
    let (gs, ge) = m.group_span(group)?;
    if gs < m.start || ge > m.end {
        return None;
    }
    Some(format!("{}{}{}", &text[m.start..gs], with, &text[ge..m.end]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::lexicon::LexiconId;
    use smallvec::smallvec;

    fn m(start: usize, end: usize, groups: &[Option<(usize, usize)>]) -> RawMatch {
        RawMatch { start, end, groups: groups.iter().copied().collect() }
    }

    #[test]
    fn templates_expand_groups_and_missing_groups_are_empty() {
        let text = "?? x";
        let raw = RawMatch { start: 0, end: 2, groups: smallvec![Some((0, 2)), None, Some((0, 1))] };
        let out = generate(&ReplacementStrategy::template(&["$1$2"]), text, &raw);
        assert_eq!(out, vec!["?"]);
    }

    #[test]
    fn template_refs_parse_multi_digit_groups() {
        assert_eq!(template_refs("a$12b$3"), vec![(1, 4, 12), (5, 7, 3)]);
        assert!(template_refs("cost $ 5").is_empty());
    }

    #[test]
    fn verb_agreement_inflects_the_verb_group() {
        let text = "He run fast";
        let raw = m(0, 6, &[Some((0, 6)), Some((0, 2)), Some((3, 6))]);
        let strategy = ReplacementStrategy::VerbAgreement { verb_group: 2, form: AgreementForm::Singular };
        assert_eq!(generate(&strategy, text, &raw), vec!["He runs"]);

        let text = "They walks";
        let raw = m(0, 10, &[Some((0, 10)), Some((0, 4)), Some((5, 10))]);
        let strategy = ReplacementStrategy::VerbAgreement { verb_group: 2, form: AgreementForm::Plural };
        assert_eq!(generate(&strategy, text, &raw), vec!["They walk"]);
    }

    #[test]
    fn lookup_swap_keeps_the_rest_of_the_match() {
        let text = "Your going";
        let raw = m(0, 10, &[Some((0, 10)), Some((0, 4)), Some((5, 10))]);
        let strategy = ReplacementStrategy::LookupSwap { group: 1, lexicon: LexiconId::WordSwaps };
        assert_eq!(generate(&strategy, text, &raw), vec!["you're going"]);
    }

    #[test]
    fn lookup_table_returns_every_alternative() {
        let text = "with regard to";
        let raw = m(0, text.len(), &[Some((0, text.len()))]);
        let strategy = ReplacementStrategy::LookupTable { lexicon: LexiconId::WordyPhrases };
        assert_eq!(generate(&strategy, text, &raw), vec!["about", "regarding"]);
    }

    #[test]
    fn keep_groups_and_capitalize() {
        let text = "very unique";
        let raw = m(0, 11, &[Some((0, 11)), Some((0, 4)), Some((5, 11))]);
        let keep = ReplacementStrategy::KeepGroups { groups: vec![2] };
        assert_eq!(generate(&keep, text, &raw), vec!["unique"]);

        let raw = m(0, 4, &[Some((0, 4))]);
        assert_eq!(generate(&ReplacementStrategy::Capitalize, "very", &raw), vec!["Very"]);
    }

    #[test]
    fn flag_only_generates_nothing() {
        let raw = m(0, 4, &[Some((0, 4))]);
        assert!(generate(&ReplacementStrategy::FlagOnly, "text", &raw).is_empty());
    }
}
