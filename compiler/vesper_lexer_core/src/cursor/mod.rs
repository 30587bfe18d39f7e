//! Forward-only cursor over a source unit.
//!
//! The cursor iterates Unicode scalar values while maintaining the
//! 1-based line/column coordinates spans are built from. Columns advance
//! once per scalar value regardless of encoded width; `\n` ends a line,
//! and a `\r\n` pair ends exactly one line because the `\r` only widens
//! the column that the following `\n` resets.
//!
//! Hot skips (line comment bodies) go through `memchr` with the column
//! reconciled afterwards by counting the scalars that were jumped over.

use memchr::memchr;

/// A resumable point in the input. Also the raw material for positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

/// Iterates a source unit one scalar value at a time.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    text: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Cursor {
            text,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.offset < self.text.len()
    }

    /// Current byte offset.
    #[must_use]
    pub fn offset(&self) -> u32 {
        // the SourceBuffer constructor caps text length at u32::MAX
        self.offset as u32
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        CursorState {
            offset: self.offset(),
            line: self.line,
            column: self.column,
        }
    }

    /// Rewind to an earlier state. Only states produced by this cursor
    /// are meaningful.
    pub fn restore(&mut self, state: CursorState) {
        self.offset = state.offset as usize;
        self.line = state.line;
        self.column = state.column;
    }

    /// Unconsumed remainder of the input.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.text[self.offset..]
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[must_use]
    pub fn peek2(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume one scalar value, updating line/column bookkeeping.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume `count` scalar values. Stops quietly at end of input.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume the next scalar if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume scalars while `pred` holds, returning the eaten slice.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
        &self.text[start..self.offset]
    }

    /// Skip to the next line break (or end of input) without consuming
    /// it. Stops before the `\r` of a `\r\n` pair so the pair can be
    /// consumed as one break.
    pub fn eat_until_newline_or_eof(&mut self) -> &'src str {
        let start = self.offset;
        let rest = self.rest().as_bytes();
        let mut stop = match memchr(b'\n', rest) {
            Some(idx) => idx,
            None => rest.len(),
        };
        if stop > 0 && rest[stop.saturating_sub(1)] == b'\r' {
            stop -= 1;
        }
        let skipped = &self.text[start..start + stop];
        self.offset += stop;
        // no line breaks inside the skipped slice
        self.column += skipped.chars().count() as u32;
        skipped
    }

    /// Slice of the underlying text by byte offsets.
    #[must_use]
    pub fn slice(&self, start: u32, end: u32) -> &'src str {
        &self.text[start as usize..end as usize]
    }
}
