//! Collection literals and regexes, both introduced by `%`.
//!
//! `%w` `%s` `%x` `%b` followed by `[`, `{`, or `(` open the word,
//! symbol, hex, and binary collection families; `%{` and `%(` are
//! shorthand for the word family. Entries are whitespace-separated and
//! come out one token per call: `RawString` for words and symbols,
//! `HexInt`/`BinInt` for the numeric families. A malformed numeric entry
//! becomes one error token and scanning moves on to the next entry, so
//! the closing delimiter still produces its end token.
//!
//! `%/pattern/` is a regex literal, verbatim except that `\/` escapes
//! the terminator.

use vesper_ir::{Position, Token, TokenKind};

use crate::mode::{Collection, CollectionFamily, Mode};
use crate::number::{strip_separators, Base};
use crate::{diagnostics, Lexer};

impl Lexer<'_> {
    pub(crate) fn scan_percent(&mut self, start: Position) -> Token {
        self.cursor.advance(); // %
        match self.cursor.peek() {
            Some('/') => {
                self.cursor.advance();
                self.scan_regex(start)
            }
            Some(letter @ ('w' | 's' | 'x' | 'b')) => match self.cursor.peek2() {
                Some(delim @ ('[' | '{' | '(')) => {
                    self.cursor.advance_by(2);
                    self.begin_collection(start, family_for(letter), delim)
                }
                _ => {
                    self.cursor.advance();
                    self.error(start, diagnostics::expected_collection_delim(letter))
                }
            },
            // bare %{ and %( are word-collection shorthand
            Some(delim @ ('{' | '(')) => {
                self.cursor.advance();
                self.begin_collection(start, CollectionFamily::Word, delim)
            }
            Some('=') => {
                self.cursor.advance();
                self.token(TokenKind::PercentAssign, start)
            }
            _ => self.token(TokenKind::Percent, start),
        }
    }

    fn begin_collection(&mut self, start: Position, family: CollectionFamily, delim: char) -> Token {
        let close = match delim {
            '[' => ']',
            '{' => '}',
            _ => ')',
        };
        self.modes.push(Mode::Collection(Collection {
            family,
            close,
            open: start,
        }));
        self.token(begin_kind(family, delim), start)
    }

    /// One step of an open collection: the next entry, the closing
    /// delimiter, or the unterminated error at end of input.
    pub(crate) fn scan_collection_entry(&mut self, coll: Collection) -> Token {
        // newlines separate entries here, they are not separator tokens
        self.cursor
            .eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
        let start = self.position();
        match self.cursor.peek() {
            None => {
                self.modes.pop();
                self.error(coll.open, diagnostics::unterminated_collection(coll.close))
            }
            Some(c) if c == coll.close => {
                self.cursor.advance();
                self.modes.pop();
                self.token(end_kind(coll.family, coll.close), start)
            }
            Some(_) => {
                let close = coll.close;
                let entry = self
                    .cursor
                    .eat_while(|c| !matches!(c, ' ' | '\t' | '\n' | '\r') && c != close);
                match coll.family {
                    CollectionFamily::Word | CollectionFamily::Symbol => {
                        self.token_with(TokenKind::RawString, entry.to_string(), start)
                    }
                    CollectionFamily::Hex => {
                        self.collection_int(start, entry, TokenKind::HexInt, Base::Hex)
                    }
                    CollectionFamily::Bin => {
                        self.collection_int(start, entry, TokenKind::BinInt, Base::Bin)
                    }
                }
            }
        }
    }

    fn collection_int(
        &mut self,
        start: Position,
        entry: &str,
        kind: TokenKind,
        base: Base,
    ) -> Token {
        let mut scalars = entry.chars();
        let valid = scalars.next().is_some_and(|c| base.is_digit(c))
            && scalars.all(|c| base.is_digit(c) || c == '_');
        if valid {
            let value = format!("{}{}", base.prefix(), strip_separators(entry));
            self.token_with(kind, value, start)
        } else {
            self.error(start, diagnostics::invalid_int_entry(base.name(), entry))
        }
    }

    fn scan_regex(&mut self, start: Position) -> Token {
        self.modes.push(Mode::Regex);
        let mut pattern = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    self.modes.pop();
                    return self.error(start, diagnostics::unterminated_regex());
                }
                Some('/') => {
                    self.cursor.advance();
                    self.modes.pop();
                    return self.token_with(TokenKind::Regex, pattern, start);
                }
                Some('\\') if self.cursor.peek2() == Some('/') => {
                    self.cursor.advance_by(2);
                    pattern.push('/');
                }
                Some(_) => {
                    if let Some(ch) = self.cursor.advance() {
                        pattern.push(ch);
                    }
                }
            }
        }
    }
}

fn family_for(letter: char) -> CollectionFamily {
    match letter {
        'w' => CollectionFamily::Word,
        's' => CollectionFamily::Symbol,
        'x' => CollectionFamily::Hex,
        _ => CollectionFamily::Bin,
    }
}

fn begin_kind(family: CollectionFamily, delim: char) -> TokenKind {
    match (family, delim) {
        (CollectionFamily::Word, '[') => TokenKind::WordListBeg,
        (CollectionFamily::Word, '{') => TokenKind::WordSetBeg,
        (CollectionFamily::Word, _) => TokenKind::WordTupleBeg,
        (CollectionFamily::Symbol, '[') => TokenKind::SymbolListBeg,
        (CollectionFamily::Symbol, '{') => TokenKind::SymbolSetBeg,
        (CollectionFamily::Symbol, _) => TokenKind::SymbolTupleBeg,
        (CollectionFamily::Hex, '[') => TokenKind::HexListBeg,
        (CollectionFamily::Hex, '{') => TokenKind::HexSetBeg,
        (CollectionFamily::Hex, _) => TokenKind::HexTupleBeg,
        (CollectionFamily::Bin, '[') => TokenKind::BinListBeg,
        (CollectionFamily::Bin, '{') => TokenKind::BinSetBeg,
        (CollectionFamily::Bin, _) => TokenKind::BinTupleBeg,
    }
}

fn end_kind(family: CollectionFamily, close: char) -> TokenKind {
    match (family, close) {
        (CollectionFamily::Word, ']') => TokenKind::WordListEnd,
        (CollectionFamily::Word, '}') => TokenKind::WordSetEnd,
        (CollectionFamily::Word, _) => TokenKind::WordTupleEnd,
        (CollectionFamily::Symbol, ']') => TokenKind::SymbolListEnd,
        (CollectionFamily::Symbol, '}') => TokenKind::SymbolSetEnd,
        (CollectionFamily::Symbol, _) => TokenKind::SymbolTupleEnd,
        (CollectionFamily::Hex, ']') => TokenKind::HexListEnd,
        (CollectionFamily::Hex, '}') => TokenKind::HexSetEnd,
        (CollectionFamily::Hex, _) => TokenKind::HexTupleEnd,
        (CollectionFamily::Bin, ']') => TokenKind::BinListEnd,
        (CollectionFamily::Bin, '}') => TokenKind::BinSetEnd,
        (CollectionFamily::Bin, _) => TokenKind::BinTupleEnd,
    }
}
