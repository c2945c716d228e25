//! @dose
//! purpose: Shortens an identifier to a character budget. Words are replaced with their
//!     dictionary abbreviation, or cut to their first letter, starting from the last word
//!     and moving toward the first until the result fits.
//!
//! when-editing:
//!     - !Separators are never touched, whatever the budget
//!     - !Shortening stops as soon as the budget is met; earlier words stay whole
//!     - An abbreviation is only used when it is strictly shorter than the word
//!
//! invariants:
//!     - The result is never longer than the input
//!     - An input already within budget is returned unchanged
//!     - max_length 0 shortens every word as far as possible
//!
//! gotchas:
//!     - The budget may be unreachable (e.g. "stg-ltd" for 6); the result is then the
//!       fully shortened form, still longer than max_length
//!     - Abbreviation wins over truncation even when the first letter alone would be shorter
//!
//! flows:
//!     - Tokenize: split into segments
//!     - Walk back to front: keep, abbreviate or truncate each word, prepend to the result
//!     - Join: concatenate the sequence

use crate::dictionary::Lookup;
use crate::sequence::Sequence;
use crate::text::{capitalize, char_len, first_char_str, is_title_case};
use crate::tokenizer::{is_separator, tokenize};
use std::borrow::Cow;

/// Shorten `original` so that it fits in `max_length` characters where possible.
pub fn shorten(lookup: &Lookup, original: &str, max_length: usize) -> String {
    let mut remaining = char_len(original);
    if remaining <= max_length {
        return original.to_string();
    }

    let mut result = Sequence::new();
    for segment in tokenize(original).into_iter().rev() {
        if remaining <= max_length || is_separator(segment) {
            result.push_front(segment);
            continue;
        }

        let short = shorten_word(lookup, segment);
        remaining -= char_len(segment) - char_len(&short);
        tracing::debug!(segment, short = %short, remaining, "shortened segment");
        result.push_front(short);
    }

    result.to_string()
}

/// The shortest form of a single word: its abbreviation, or else its first character.
pub fn shorten_word<'a>(lookup: &'a Lookup, word: &'a str) -> Cow<'a, str> {
    let len = char_len(word);
    match abbreviation(lookup, word) {
        Some(short) if char_len(&short) < len => short,
        _ => Cow::Borrowed(first_char_str(word)),
    }
}

/// Dictionary abbreviation for `word`.
///
/// Title-case words fall back to their lowercase entry, keeping the leading capital:
/// with `stg=strategy`, "Strategy" becomes "Stg".
fn abbreviation<'a>(lookup: &'a Lookup, word: &'a str) -> Option<Cow<'a, str>> {
    if let Some(short) = lookup.find(word) {
        return Some(Cow::Borrowed(short));
    }
    if is_title_case(word) {
        return lookup
            .find(&word.to_lowercase())
            .map(|short| Cow::Owned(capitalize(short)));
    }
    None
}
