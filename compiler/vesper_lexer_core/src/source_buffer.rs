//! Validated source text.

use std::fmt;

use crate::Cursor;

/// A source unit ready for lexing.
///
/// Construction enforces the compiler-wide invariant that every byte
/// offset fits in a `u32`. Everything downstream (spans, cursor state)
/// relies on it.
#[derive(Debug, Clone, Copy)]
pub struct SourceBuffer<'src> {
    text: &'src str,
}

impl<'src> SourceBuffer<'src> {
    pub fn new(text: &'src str) -> Result<Self, SourceError> {
        if u32::try_from(text.len()).is_err() {
            return Err(SourceError::TooLarge { len: text.len() });
        }
        Ok(SourceBuffer { text })
    }

    #[must_use]
    pub fn as_str(&self) -> &'src str {
        self.text
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        // cast is guarded by the constructor
        self.text.len() as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A fresh cursor at the start of the buffer.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'src> {
        Cursor::new(self.text)
    }
}

/// Errors from [`SourceBuffer::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Source is too large for `u32` byte offsets.
    TooLarge { len: usize },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::TooLarge { len } => {
                write!(f, "source is {len} bytes; the limit is {} bytes", u32::MAX)
            }
        }
    }
}

impl std::error::Error for SourceError {}
