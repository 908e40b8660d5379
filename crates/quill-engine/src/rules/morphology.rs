//! English verb inflection used by the agreement rules.

/// Third-person singular present form of a base verb ("run" → "runs").
pub fn third_person_singular(base: &str) -> String {
    let lower = base.to_lowercase();
    match lower.as_str() {
        "have" => return "has".to_string(),
        "be" => return "is".to_string(),
        "do" => return "does".to_string(),
        "go" => return "goes".to_string(),
        _ => {}
    }

    let sibilant = ["ss", "sh", "ch", "x", "z", "o"];
    if sibilant.iter().any(|end| lower.ends_with(end)) {
        return format!("{lower}es");
    }

    let mut chars = lower.chars().rev();
    if let (Some('y'), Some(prev)) = (chars.next(), chars.next()) {
        if !is_vowel(prev) {
            return format!("{}ies", &lower[..lower.len() - 1]);
        }
    }

    format!("{lower}s")
}

/// Base (plural) form of a third-person singular verb, when it is known.
///
/// Only verbs present in the base-verb lexicon are recognised; anything else
/// returns `None` so callers never invent a form.
pub fn base_form(third_person: &str) -> Option<String> {
    super::lexicon::LexiconId::ThirdPersonVerbs
        .lexicon()
        .get(third_person)
        .map(str::to_string)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_and_irregular_forms() {
        assert_eq!(third_person_singular("run"), "runs");
        assert_eq!(third_person_singular("have"), "has");
        assert_eq!(third_person_singular("watch"), "watches");
        assert_eq!(third_person_singular("fix"), "fixes");
        assert_eq!(third_person_singular("study"), "studies");
        assert_eq!(third_person_singular("play"), "plays");
        assert_eq!(third_person_singular("Go"), "goes");
    }

    #[test]
    fn base_form_only_for_known_verbs() {
        assert_eq!(base_form("runs").as_deref(), Some("run"));
        assert_eq!(base_form("worries").as_deref(), Some("worry"));
        assert_eq!(base_form("xyzzies"), None);
    }
}
