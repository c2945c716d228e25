//! @dose
//! purpose: Splits an identifier into segments: words found at letter-case transitions and
//!     runs of a repeated separator character. The shortener works segment by segment, so
//!     these boundaries decide what can be abbreviated.
//!
//! when-editing:
//!     - !Segments must concatenate back to the exact input
//!     - !A separator segment holds one repeated character ("--"), never a mix ("-_")
//!     - Acronyms keep together until a lowercase letter follows, then the last capital
//!       starts the next word ("HTTPServer" -> "HTTP", "Server")
//!
//! invariants:
//!     - Every returned segment is non-empty
//!     - Segments borrow from the input; nothing is allocated per segment
//!
//! gotchas:
//!     - Digits are separators, so "v2" is two segments
//!     - Letters without case (CJK, etc.) never create a boundary among themselves

use crate::text::split_last_char;

/// Split `input` into its segments, left to right.
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (i, c) in input.char_indices() {
        let Some(p) = prev else {
            prev = Some(c);
            continue;
        };

        if !c.is_alphabetic() {
            if p.is_alphabetic() || p != c {
                segments.push(&input[start..i]);
                start = i;
            }
        } else if !p.is_alphabetic() || (p.is_lowercase() && c.is_uppercase()) {
            segments.push(&input[start..i]);
            start = i;
        } else if p.is_uppercase() && c.is_lowercase() {
            // Acronym followed by a word: its last capital belongs to the word
            let (acronym, _) = split_last_char(&input[start..i]);
            if !acronym.is_empty() {
                segments.push(acronym);
                start += acronym.len();
            }
        }

        prev = Some(c);
    }

    if start < input.len() {
        segments.push(&input[start..]);
    }

    segments
}

/// Whether a segment is a separator run rather than a word
pub fn is_separator(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| !c.is_alphabetic())
}
