//! Lexer for the Vesper compiler.
//!
//! A pull-based scanner: construct a [`Lexer`] over a
//! [`SourceBuffer`] and call [`Lexer::next_token`] until it yields
//! [`TokenKind::Eof`]. The lexer never panics and never fails to produce
//! a token; malformed input comes back as `TokenKind::Error` tokens whose
//! value carries the diagnostic message, and scanning continues after
//! them.
//!
//! Internally the lexer keeps a mode stack. Most tokens
//! are produced in `Normal` mode; double-quoted strings and collection
//! literals leave a mode on the stack between calls so that their parts
//! (`StringBeg`/`StringContent`/`InterpBeg`/.../`StringEnd`, or one token
//! per collection entry) come out across successive `next_token` calls.
//! Regexes, embellished text, and comments also run under their own
//! modes, but those are entered and left within a single call.

use vesper_ir::{Position, Span, Token, TokenKind};
use vesper_lexer_core::{Cursor, SourceBuffer};

pub use vesper_lexer_core::SourceError;

mod collections;
mod comment;
mod diagnostics;
mod escape;
mod ident;
mod keywords;
mod mode;
mod number;
mod operators;
mod string;

use mode::Mode;

/// Lex a whole source unit into a token list ending with `Eof`.
///
/// Convenience wrapper over [`Lexer`]; fails only if the source exceeds
/// the `u32` byte-offset cap.
pub fn lex(source: &str) -> Result<Vec<Token>, SourceError> {
    let buffer = SourceBuffer::new(source)?;
    let mut lexer = Lexer::new(buffer);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Pull-based tokenizer over a single source unit.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    modes: Vec<Mode>,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(buffer: SourceBuffer<'src>) -> Self {
        Lexer {
            cursor: buffer.cursor(),
            modes: vec![Mode::Normal],
        }
    }

    /// Whether another call can produce a non-`Eof` token.
    ///
    /// True while input remains or a suspended construct (string,
    /// collection) still owes a closing or error token.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.has_more() || self.modes.len() > 1
    }

    /// Produce the next token. Total: every input, including malformed
    /// input, yields a token, and `Eof` repeats forever afterwards.
    pub fn next_token(&mut self) -> Token {
        match self.current_mode() {
            Mode::StringLiteral {
                in_interp: false, ..
            } => self.scan_string_part(),
            Mode::StringLiteral {
                in_interp: true, ..
            } => self.scan_interpolation(),
            Mode::Collection(coll) => self.scan_collection_entry(coll),
            // transient modes are entered and left within one call,
            // so the stack top between calls is never one of them
            Mode::Normal
            | Mode::Regex
            | Mode::EmbellishedText { .. }
            | Mode::BlockComment { .. }
            | Mode::DocComment { .. } => self.scan_normal(),
        }
    }

    fn current_mode(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Normal)
    }

    fn scan_normal(&mut self) -> Token {
        loop {
            self.skip_blank();
            let start = self.position();
            let Some(ch) = self.cursor.peek() else {
                return Token::new(TokenKind::Eof, Span::point(start));
            };
            if ch == '#' {
                if let Some(token) = self.scan_comment(start) {
                    return token;
                }
                continue;
            }
            return self.dispatch(start, ch);
        }
    }

    /// One token for the construct starting at `ch`. Shared between
    /// normal mode and interpolation bodies; callers intercept the few
    /// characters that mean something different in their context.
    fn dispatch(&mut self, start: Position, ch: char) -> Token {
        match ch {
            '\n' => {
                self.cursor.advance();
                self.token(TokenKind::Newline, start)
            }
            // skip_blank leaves \r only in front of \n
            '\r' => {
                self.cursor.advance();
                self.cursor.advance();
                self.token(TokenKind::Newline, start)
            }
            '"' => {
                self.cursor.advance();
                self.modes.push(Mode::StringLiteral {
                    open: start,
                    in_interp: false,
                    brace_depth: 0,
                });
                self.token(TokenKind::StringBeg, start)
            }
            '\'' => self.scan_raw_string(start),
            '`' => self.scan_embellished(start),
            '%' => self.scan_percent(start),
            ':' => self.scan_colon(start),
            '@' => self.scan_instance_var(start),
            '0'..='9' => self.scan_number(start),
            '.' if self.cursor.peek2().is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_leading_dot_float(start)
            }
            '.' => self.scan_dots(start),
            c if ident::is_ident_start(c) => self.scan_ident(start),
            '(' => self.single(TokenKind::LParen, start),
            ')' => self.single(TokenKind::RParen, start),
            '[' => self.single(TokenKind::LBracket, start),
            ']' => self.single(TokenKind::RBracket, start),
            '{' => self.single(TokenKind::LBrace, start),
            '}' => self.single(TokenKind::RBrace, start),
            ',' => self.single(TokenKind::Comma, start),
            ';' => self.single(TokenKind::Semicolon, start),
            '?' => self.single(TokenKind::Question, start),
            '+' | '-' | '*' | '/' | '=' | '!' | '<' | '>' | '&' | '|' | '^' | '~' => {
                self.scan_operator(start, ch)
            }
            other => {
                self.cursor.advance();
                self.error(start, diagnostics::unexpected_char(other))
            }
        }
    }

    /// Skip spaces, tabs, and `\r` that is not part of a `\r\n` pair.
    fn skip_blank(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\t') => {
                    self.cursor.advance();
                }
                Some('\r') if self.cursor.peek2() != Some('\n') => {
                    self.cursor.advance();
                }
                _ => break,
            }
        }
    }

    // === Token construction ===

    fn position(&self) -> Position {
        let state = self.cursor.state();
        Position::new(state.line, state.column, state.offset)
    }

    fn token(&self, kind: TokenKind, start: Position) -> Token {
        Token::new(kind, Span::new(start, self.position()))
    }

    fn token_with(&self, kind: TokenKind, value: String, start: Position) -> Token {
        Token::with_value(kind, value, Span::new(start, self.position()))
    }

    fn error(&self, start: Position, message: String) -> Token {
        self.token_with(TokenKind::Error, message, start)
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        self.cursor.advance();
        self.token(kind, start)
    }
}
