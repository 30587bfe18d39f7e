//! Tokens and token kinds.
//!
//! [`TokenKind`] is a flat `#[repr(u8)]` enum whose discriminants are
//! arranged in contiguous bands, so every category predicate compiles to
//! a pair of integer comparisons instead of a jump table:
//!
//! | Range     | Band                         |
//! |-----------|------------------------------|
//! | 0-1       | control (`Error`, `Eof`)     |
//! | 2-3       | statement separators         |
//! | 4-18      | punctuation                  |
//! | 20-35     | assignment operators         |
//! | 40-64     | overridable operators        |
//! | 70-73     | identifiers                  |
//! | 74        | instance variable            |
//! | 80-85     | integer literals             |
//! | 86-96     | other literals               |
//! | 100-123   | collection delimiters        |
//! | 130-161   | keywords                     |
//!
//! The band boundaries are load-bearing: when adding a variant, place it
//! inside its band and keep the gaps between bands free.

use std::fmt;

use crate::Span;

/// Kind of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Control (0-1) ===
    /// Malformed input; the token's value holds the diagnostic message.
    Error = 0,
    /// End of input. Returned forever once the source is exhausted.
    Eof = 1,

    // === Statement separators (2-3) ===
    Newline = 2,
    Semicolon = 3,

    // === Punctuation (4-18) ===
    LParen = 4,
    RParen = 5,
    LBracket = 6,
    RBracket = 7,
    LBrace = 8,
    RBrace = 9,
    Comma = 10,
    Dot = 11,
    DotDot = 12,
    DotDotDot = 13,
    Colon = 14,
    ColonColon = 15,
    Question = 16,
    Arrow = 17,    // ->
    FatArrow = 18, // =>

    // === Assignment operators (20-35) ===
    Assign = 20,        // =
    PlusAssign = 21,    // +=
    MinusAssign = 22,   // -=
    StarAssign = 23,    // *=
    SlashAssign = 24,   // /=
    PercentAssign = 25, // %=
    PowAssign = 26,     // **=
    ShlAssign = 27,     // <<=
    ShrAssign = 28,     // >>=
    RolAssign = 29,     // <<<=
    AmpAssign = 30,     // &=
    PipeAssign = 31,    // |=
    CaretAssign = 32,   // ^=
    ColonAssign = 33,   // :=
    AndAssign = 34,     // &&=
    OrAssign = 35,      // ||=

    // === Overridable operators (40-64) ===
    Plus = 40,
    Minus = 41,
    Star = 42,
    Slash = 43,
    Percent = 44,
    Pow = 45, // **
    EqEq = 46,
    NotEq = 47,
    Lt = 48,
    LtEq = 49,
    Gt = 50,
    GtEq = 51,
    Spaceship = 52, // <=>
    Shl = 53,       // <<
    Shr = 54,       // >>
    Rol = 55,       // <<<
    Amp = 56,
    Pipe = 57,
    Caret = 58,
    Tilde = 59,
    Bang = 60,
    AndAnd = 61,
    OrOr = 62,
    ColonGt = 63,   // :>
    ColonGtGt = 64, // :>>

    // === Identifiers (70-74) ===
    /// Lowercase-led identifier, callable from anywhere.
    Ident = 70,
    /// `_`-led identifier, private to its defining scope.
    PrivateIdent = 71,
    /// Uppercase-led constant.
    Const = 72,
    /// `_` + uppercase, private constant.
    PrivateConst = 73,
    /// `@name`. Outside the identifier band: never keyword-retagged.
    InstanceVar = 74,

    // === Integer literals (80-85) ===
    HexInt = 80,  // 0x
    DuoInt = 81,  // 0d (duodecimal)
    DecInt = 82,  // plain decimal
    OctInt = 83,  // 0o
    QuatInt = 84, // 0q (quaternary)
    BinInt = 85,  // 0b

    // === Other literals (86-96) ===
    Float = 86,
    RawString = 87,
    StringBeg = 88,
    StringContent = 89,
    StringEnd = 90,
    InterpBeg = 91, // ${
    InterpEnd = 92, // }
    SymbolBeg = 93, // :
    Regex = 94,
    DocComment = 95,
    EmbelText = 96,

    // === Collection delimiters (100-123) ===
    WordListBeg = 100, // %w[
    WordListEnd = 101,
    WordSetBeg = 102, // %w{
    WordSetEnd = 103,
    WordTupleBeg = 104, // %w(
    WordTupleEnd = 105,
    SymbolListBeg = 106, // %s[
    SymbolListEnd = 107,
    SymbolSetBeg = 108, // %s{
    SymbolSetEnd = 109,
    SymbolTupleBeg = 110, // %s(
    SymbolTupleEnd = 111,
    HexListBeg = 112, // %x[
    HexListEnd = 113,
    HexSetBeg = 114, // %x{
    HexSetEnd = 115,
    HexTupleBeg = 116, // %x(
    HexTupleEnd = 117,
    BinListBeg = 118, // %b[
    BinListEnd = 119,
    BinSetBeg = 120, // %b{
    BinSetEnd = 121,
    BinTupleBeg = 122, // %b(
    BinTupleEnd = 123,

    // === Keywords (130-161) ===
    KwAnd = 130,
    KwBegin = 131,
    KwBreak = 132,
    KwCase = 133,
    KwClass = 134,
    KwDef = 135,
    KwDo = 136,
    KwElse = 137,
    KwElsif = 138,
    KwEnd = 139,
    KwEnsure = 140,
    KwFalse = 141,
    KwFor = 142,
    KwIf = 143,
    KwImport = 144,
    KwIn = 145,
    KwLoop = 146,
    KwModule = 147,
    KwNext = 148,
    KwNil = 149,
    KwNot = 150,
    KwOr = 151,
    KwReturn = 152,
    KwSelf = 153,
    KwSuper = 154,
    KwThen = 155,
    KwTrue = 156,
    KwUnless = 157,
    KwUntil = 158,
    KwWhen = 159,
    KwWhile = 160,
    KwYield = 161,
}

impl TokenKind {
    /// Maximum discriminant value across all variants.
    pub const MAX_DISCRIMINANT: u8 = Self::KwYield as u8;

    /// Reserved words.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        self as u8 >= Self::KwAnd as u8 && self as u8 <= Self::KwYield as u8
    }

    /// Every literal-producing kind: numbers, strings and string parts,
    /// symbols, regexes, doc comments, embellished text, and collection
    /// delimiters.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        self as u8 >= Self::HexInt as u8 && self as u8 <= Self::BinTupleEnd as u8
    }

    /// Integer literals of any base.
    #[must_use]
    pub const fn is_int_literal(self) -> bool {
        self as u8 >= Self::HexInt as u8 && self as u8 <= Self::BinInt as u8
    }

    /// Assignment and overridable operators together.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        self as u8 >= Self::Assign as u8 && self as u8 <= Self::ColonGtGt as u8
    }

    /// `=` and the compound assignment forms.
    #[must_use]
    pub const fn is_assignment_operator(self) -> bool {
        self as u8 >= Self::Assign as u8 && self as u8 <= Self::OrAssign as u8
    }

    /// Operators user types may redefine.
    #[must_use]
    pub const fn is_overridable_operator(self) -> bool {
        self as u8 >= Self::Plus as u8 && self as u8 <= Self::ColonGtGt as u8
    }

    /// The four name classifications. Excludes `InstanceVar`.
    #[must_use]
    pub const fn is_identifier(self) -> bool {
        self as u8 >= Self::Ident as u8 && self as u8 <= Self::PrivateConst as u8
    }

    /// Newline or semicolon.
    #[must_use]
    pub const fn is_statement_separator(self) -> bool {
        self as u8 >= Self::Newline as u8 && self as u8 <= Self::Semicolon as u8
    }

    /// Human-readable name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Eof => "end of input",
            Self::Newline => "newline",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::DotDot => "..",
            Self::DotDotDot => "...",
            Self::Colon => ":",
            Self::ColonColon => "::",
            Self::Question => "?",
            Self::Arrow => "->",
            Self::FatArrow => "=>",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::PercentAssign => "%=",
            Self::PowAssign => "**=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::RolAssign => "<<<=",
            Self::AmpAssign => "&=",
            Self::PipeAssign => "|=",
            Self::CaretAssign => "^=",
            Self::ColonAssign => ":=",
            Self::AndAssign => "&&=",
            Self::OrAssign => "||=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Pow => "**",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Spaceship => "<=>",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Rol => "<<<",
            Self::Amp => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::ColonGt => ":>",
            Self::ColonGtGt => ":>>",
            Self::Ident => "identifier",
            Self::PrivateIdent => "private identifier",
            Self::Const => "constant",
            Self::PrivateConst => "private constant",
            Self::InstanceVar => "instance variable",
            Self::HexInt => "hexadecimal integer",
            Self::DuoInt => "duodecimal integer",
            Self::DecInt => "integer",
            Self::OctInt => "octal integer",
            Self::QuatInt => "quaternary integer",
            Self::BinInt => "binary integer",
            Self::Float => "float",
            Self::RawString => "raw string",
            Self::StringBeg => "string start",
            Self::StringContent => "string content",
            Self::StringEnd => "string end",
            Self::InterpBeg => "interpolation start",
            Self::InterpEnd => "interpolation end",
            Self::SymbolBeg => "symbol",
            Self::Regex => "regex",
            Self::DocComment => "doc comment",
            Self::EmbelText => "embellished text",
            Self::WordListBeg => "%w[",
            Self::WordListEnd | Self::SymbolListEnd | Self::HexListEnd | Self::BinListEnd => "]",
            Self::WordSetBeg => "%w{",
            Self::WordSetEnd | Self::SymbolSetEnd | Self::HexSetEnd | Self::BinSetEnd => "}",
            Self::WordTupleBeg => "%w(",
            Self::WordTupleEnd | Self::SymbolTupleEnd | Self::HexTupleEnd | Self::BinTupleEnd => {
                ")"
            }
            Self::SymbolListBeg => "%s[",
            Self::SymbolSetBeg => "%s{",
            Self::SymbolTupleBeg => "%s(",
            Self::HexListBeg => "%x[",
            Self::HexSetBeg => "%x{",
            Self::HexTupleBeg => "%x(",
            Self::BinListBeg => "%b[",
            Self::BinSetBeg => "%b{",
            Self::BinTupleBeg => "%b(",
            Self::KwAnd => "and",
            Self::KwBegin => "begin",
            Self::KwBreak => "break",
            Self::KwCase => "case",
            Self::KwClass => "class",
            Self::KwDef => "def",
            Self::KwDo => "do",
            Self::KwElse => "else",
            Self::KwElsif => "elsif",
            Self::KwEnd => "end",
            Self::KwEnsure => "ensure",
            Self::KwFalse => "false",
            Self::KwFor => "for",
            Self::KwIf => "if",
            Self::KwImport => "import",
            Self::KwIn => "in",
            Self::KwLoop => "loop",
            Self::KwModule => "module",
            Self::KwNext => "next",
            Self::KwNil => "nil",
            Self::KwNot => "not",
            Self::KwOr => "or",
            Self::KwReturn => "return",
            Self::KwSelf => "self",
            Self::KwSuper => "super",
            Self::KwThen => "then",
            Self::KwTrue => "true",
            Self::KwUnless => "unless",
            Self::KwUntil => "until",
            Self::KwWhen => "when",
            Self::KwWhile => "while",
            Self::KwYield => "yield",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexed token.
///
/// `value` is populated only where the kind alone does not determine the
/// text: identifiers, literals, doc comments, and error messages. Fixed
/// spellings (operators, punctuation, keywords) carry `None`; the span
/// recovers the source text when needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            value: None,
            span,
        }
    }

    #[must_use]
    pub fn with_value(kind: TokenKind, value: String, span: Span) -> Self {
        Token {
            kind,
            value: Some(value),
            span,
        }
    }

    /// The carried text, or `""` for kinds with fixed spellings.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error)
    }
}

#[cfg(test)]
mod tests;
