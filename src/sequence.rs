//! Ordered list of segments that can grow at either end.
//!
//! The shortener walks an identifier back to front and prepends each result, so the
//! sequence needs cheap pushes on both sides.

use crate::text::char_len;
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence<'a> {
    segments: VecDeque<Cow<'a, str>>,
}

impl<'a> Sequence<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a segment before all others
    pub fn push_front(&mut self, segment: impl Into<Cow<'a, str>>) {
        self.segments.push_front(segment.into());
    }

    /// Insert a segment after all others
    pub fn push_back(&mut self, segment: impl Into<Cow<'a, str>>) {
        self.segments.push_back(segment.into());
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total length in characters of all segments
    pub fn char_len(&self) -> usize {
        self.segments.iter().map(|s| char_len(s)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_ref())
    }
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for Sequence<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for segment in iter {
            sequence.push_back(segment);
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front() {
        let mut seq = Sequence::new();
        seq.push_front("a");
        seq.push_front("b");
        seq.push_front("cd");

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["cd", "b", "a"]);
        assert_eq!(seq.to_string(), "cdba");
        assert_eq!(seq.char_len(), 4);
    }

    #[test]
    fn test_push_back() {
        let mut seq = Sequence::new();
        seq.push_back("a");
        seq.push_back("b");
        seq.push_back(String::from("cd"));

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!["a", "b", "cd"]);
        assert_eq!(seq.to_string(), "abcd");
    }

    #[test]
    fn test_empty() {
        let seq = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.char_len(), 0);
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_char_len_counts_chars() {
        let seq: Sequence = ["\u{e9}t\u{e9}", "-", "x"].into_iter().collect();
        assert_eq!(seq.char_len(), 5);
        assert_eq!(seq.len(), 3);
    }
}
