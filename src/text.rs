//! Character helpers shared by the tokenizer and the shortener.
//!
//! All of these are total: empty input gives `None` or `false`, never a panic.

/// Split off the last character: `"string"` becomes `("strin", Some('g'))`.
pub fn split_last_char(s: &str) -> (&str, Option<char>) {
    match s.char_indices().next_back() {
        Some((idx, c)) => (&s[..idx], Some(c)),
        None => (s, None),
    }
}

pub fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// The first character as a string slice, borrowed from `s`.
pub fn first_char_str(s: &str) -> &str {
    match first_char(s) {
        Some(c) => &s[..c.len_utf8()],
        None => s,
    }
}

/// Number of characters, which is what length budgets are measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A leading capital that is not part of an acronym.
///
/// `"Abc"` and `"A"` are title case; `"ABC"`, `"abc"` and `"aBC"` are not.
pub fn is_title_case(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    match chars.next() {
        None => true,
        Some(_) => !s.chars().all(char::is_uppercase),
    }
}

/// Uppercase the first character, leaving the rest alone.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
