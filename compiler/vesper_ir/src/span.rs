//! Source positions and spans.
//!
//! A [`Position`] is a point in a source unit, carrying both the
//! human-facing coordinates (1-based line and column) and the byte offset
//! used for slicing. Columns advance once per Unicode scalar value, so a
//! multi-byte character widens the byte offset by more than it widens the
//! column.
//!
//! A [`Span`] is a half-open interval `[start, end)` anchored by two
//! positions. Storing both ends means consumers never have to re-scan the
//! source to recover where a token stopped, and joining two spans is two
//! comparisons.

use std::fmt;

/// A point in a source unit.
///
/// `line` and `column` are 1-based; `offset` is the 0-based byte offset.
/// Sources are capped at `u32::MAX` bytes, enforced at buffer construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

crate::static_assert_size!(Position, 12);

impl Position {
    /// The start of a source unit: line 1, column 1, offset 0.
    pub const FIRST: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[must_use]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open source interval `[start, end)`.
///
/// `end` points one past the last byte of the spanned text, at the line
/// and column where scanning would resume.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

crate::static_assert_size!(Span, 24);

impl Span {
    /// Sentinel span for synthesized tokens with no source location.
    pub const DUMMY: Span = Span {
        start: Position::new(0, 0, u32::MAX),
        end: Position::new(0, 0, u32::MAX),
    };

    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// A zero-length span at `pos`.
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    #[must_use]
    pub fn is_dummy(&self) -> bool {
        self.start.offset == u32::MAX
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.end.offset.saturating_sub(self.start.offset)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordering and coordinate sanity: start before end, 1-based lines
    /// and columns. Dummy spans are not valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start.offset <= self.end.offset
            && self.start.line >= 1
            && self.start.column >= 1
            && self.end.line >= self.start.line
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };
        Span { start, end }
    }

    /// Whether `offset` falls inside the half-open interval.
    #[must_use]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }

    /// Byte range for slicing source text.
    #[must_use]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.offset, self.end.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
