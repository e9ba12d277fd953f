//! Capture spans returned by a match.

use std::ops::Range;

/// A matched region as a byte offset and length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Result of a successful match call: slot 0 is the whole match, slots
/// `1..len()` are the capture groups in order of their opening parenthesis.
///
/// An empty `Captures` means "no match". Groups that did not take part in
/// the match are `None`, which is distinct from an empty span.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Captures {
    spans: Vec<Option<Span>>,
}

impl Captures {
    pub(crate) fn new(spans: Vec<Option<Span>>) -> Self {
        Self { spans }
    }

    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Number of slots; 0 when there was no match.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Span> {
        self.spans.get(index).copied().flatten()
    }

    /// The whole match.
    pub fn span(&self) -> Option<Span> {
        self.get(0)
    }

    pub fn position(&self, index: usize) -> Option<usize> {
        self.get(index).map(|s| s.start)
    }

    pub fn length(&self, index: usize) -> Option<usize> {
        self.get(index).map(|s| s.len)
    }

    /// Captured text of slot `index`.
    pub fn text<'t>(&self, text: &'t str, index: usize) -> Option<&'t str> {
        self.get(index).and_then(|s| text.get(s.range()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        self.spans.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = Option<Span>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Option<Span>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter().copied()
    }
}
