//! Lexer modes.
//!
//! The stack bottom is always `Normal`. `StringLiteral` and `Collection`
//! survive across `next_token` calls; the rest exist only while a single
//! call scans its construct, holding the nesting state that an
//! unterminated-input diagnostic reports.

use vesper_ir::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Normal,
    /// Inside `"..."`. `open` anchors unterminated-string diagnostics.
    /// While `in_interp` is set, tokens come from the `${...}` body and
    /// `brace_depth` counts plain `{`/`}` pairs so the closing `}` is
    /// recognized.
    StringLiteral {
        open: Position,
        in_interp: bool,
        brace_depth: u32,
    },
    Regex,
    EmbellishedText {
        backticks: u32,
    },
    BlockComment {
        depth: u32,
    },
    DocComment {
        depth: u32,
    },
    Collection(Collection),
}

/// State of an open `%w[`-style collection literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Collection {
    pub family: CollectionFamily,
    pub close: char,
    pub open: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CollectionFamily {
    Word,
    Symbol,
    Hex,
    Bin,
}
