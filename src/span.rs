//! Source span utilities for precise diagnostic locations.
//!
//! Every token, AST node, and error carries a `SourceSpan` indicating its
//! position in the raw `$search` text. A `$search` value is a single decoded
//! query-option string, so byte offsets are all the location bookkeeping
//! the crate needs.

use serde::{Deserialize, Serialize};

/// A span in the source text, identified by byte offsets.
///
/// Spans are inclusive of start and exclusive of end: `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Byte offset of the start (inclusive)
    pub start: usize,
    /// Byte offset of the end (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new span from start to end byte offsets.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty span at a single position.
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// The length of this span in bytes.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether this span is empty.
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Create a span that covers both this span and another.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the substring covered by this span from the source.
    ///
    /// Returns an empty string if the span is out of range or invalid.
    /// Both start and end are clamped to the source length.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        let len = source.len();
        let start = self.start.min(len);
        let end = self.end.min(len);
        if start <= end {
            &source[start..end]
        } else {
            ""
        }
    }
}

impl From<std::ops::Range<usize>> for SourceSpan {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<SourceSpan> for std::ops::Range<usize> {
    fn from(span: SourceSpan) -> Self {
        span.start..span.end
    }
}
