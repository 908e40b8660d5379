//! Carry the original's capitalization over to a candidate.

/// Uppercase the candidate if the original is all caps (two or more
/// letters); capitalize its first letter if the original starts with one.
/// Never lowercases.
pub fn preserve_case(original: &str, candidate: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase()) {
        return candidate.to_uppercase();
    }

    let starts_upper = original
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase);
    if starts_upper {
        return capitalize_first(candidate);
    }
    candidate.to_string()
}

/// Uppercase the first alphabetic character, leaving leading punctuation.
pub fn capitalize_first(s: &str) -> String {
    match s.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, c)) => {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..i]);
            out.extend(c.to_uppercase());
            out.push_str(&s[i + c.len_utf8()..]);
            out
        }
        None => s.to_string(),
    }
}
