//! Identifiers, instance variables, and the colon family.
//!
//! Names follow Unicode: XID-start (or `_`) then XID-continue. The first
//! scalar decides the classification; uppercase means constant, a leading
//! underscore means private, and the two combine. A single trailing `?`
//! or `!` is part of the name for non-constant identifiers only, and is
//! left alone when an `=` follows so that `a != b` keeps its operator.

use unicode_ident::{is_xid_continue, is_xid_start};
use vesper_ir::{Position, Token, TokenKind};

use crate::{diagnostics, keywords, Lexer};

pub(crate) fn is_ident_start(ch: char) -> bool {
    ch == '_' || is_xid_start(ch)
}

fn is_ident_continue(ch: char) -> bool {
    is_xid_continue(ch)
}

fn classify(word: &str) -> TokenKind {
    let mut scalars = word.chars();
    match scalars.next() {
        Some('_') => match scalars.next() {
            Some(second) if second.is_uppercase() => TokenKind::PrivateConst,
            _ => TokenKind::PrivateIdent,
        },
        Some(first) if first.is_uppercase() => TokenKind::Const,
        _ => TokenKind::Ident,
    }
}

impl Lexer<'_> {
    pub(crate) fn scan_ident(&mut self, start: Position) -> Token {
        let word = self.cursor.eat_while(is_ident_continue);
        let kind = classify(word);
        let mut text = word.to_string();

        if matches!(kind, TokenKind::Ident | TokenKind::PrivateIdent)
            && matches!(self.cursor.peek(), Some('?' | '!'))
            && self.cursor.peek2() != Some('=')
        {
            if let Some(mark) = self.cursor.advance() {
                text.push(mark);
            }
        }

        if kind == TokenKind::Ident {
            if let Some(keyword) = keywords::lookup(&text) {
                return self.token(keyword, start);
            }
        }
        self.token_with(kind, text, start)
    }

    /// `@name`. The value is the bare name; the span covers the `@`.
    pub(crate) fn scan_instance_var(&mut self, start: Position) -> Token {
        self.cursor.advance(); // @
        match self.cursor.peek() {
            Some(ch) if is_ident_start(ch) => {
                let name = self.cursor.eat_while(is_ident_continue);
                self.token_with(TokenKind::InstanceVar, name.to_string(), start)
            }
            _ => self.error(start, diagnostics::expected_ident_after_at()),
        }
    }

    /// Everything led by `:`. A symbol begins when the very next scalar
    /// (no whitespace between) could start a name or a quoted string;
    /// the symbol's body is then lexed as its own following token.
    pub(crate) fn scan_colon(&mut self, start: Position) -> Token {
        self.cursor.advance(); // :
        match self.cursor.peek() {
            Some(':') => {
                self.cursor.advance();
                self.token(TokenKind::ColonColon, start)
            }
            Some('=') => {
                self.cursor.advance();
                self.token(TokenKind::ColonAssign, start)
            }
            Some('>') => {
                self.cursor.advance();
                if self.cursor.match_char('>') {
                    self.token(TokenKind::ColonGtGt, start)
                } else {
                    self.token(TokenKind::ColonGt, start)
                }
            }
            Some(ch) if is_ident_start(ch) || ch == '\'' || ch == '"' => {
                self.token(TokenKind::SymbolBeg, start)
            }
            _ => self.token(TokenKind::Colon, start),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lex;
    use pretty_assertions::assert_eq;
    use vesper_ir::TokenKind;

    fn first(source: &str) -> (TokenKind, String) {
        let Ok(tokens) = lex(source) else {
            panic!("lex failed for {source}");
        };
        (tokens[0].kind, tokens[0].text().to_string())
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        let Ok(tokens) = lex(source) else {
            panic!("lex failed for {source}");
        };
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn classification_by_first_scalar() {
        assert_eq!(first("count"), (TokenKind::Ident, "count".into()));
        assert_eq!(first("_count"), (TokenKind::PrivateIdent, "_count".into()));
        assert_eq!(first("Point"), (TokenKind::Const, "Point".into()));
        assert_eq!(first("_Point"), (TokenKind::PrivateConst, "_Point".into()));
        assert_eq!(first("__x"), (TokenKind::PrivateIdent, "__x".into()));
        assert_eq!(first("_"), (TokenKind::PrivateIdent, "_".into()));
    }

    #[test]
    fn unicode_identifiers() {
        assert_eq!(
            first("zażółć_gęślą_jaźń"),
            (TokenKind::Ident, "zażółć_gęślą_jaźń".into())
        );
        assert_eq!(first("Żółw"), (TokenKind::Const, "Żółw".into()));
    }

    #[test]
    fn trailing_marks_on_non_constants_only() {
        assert_eq!(first("empty?"), (TokenKind::Ident, "empty?".into()));
        assert_eq!(first("save!"), (TokenKind::Ident, "save!".into()));
        assert_eq!(first("_dirty?"), (TokenKind::PrivateIdent, "_dirty?".into()));
        // constants never take the mark
        assert_eq!(
            kinds("Point!"),
            vec![TokenKind::Const, TokenKind::Bang, TokenKind::Eof]
        );
    }

    #[test]
    fn trailing_bang_yields_to_not_equals() {
        assert_eq!(
            kinds("a != b"),
            vec![TokenKind::Ident, TokenKind::NotEq, TokenKind::Ident, TokenKind::Eof]
        );
        assert_eq!(
            kinds("a!= b"),
            vec![TokenKind::Ident, TokenKind::NotEq, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn keywords_retag_public_identifiers_only() {
        assert_eq!(first("while").0, TokenKind::KwWhile);
        assert_eq!(first("_while").0, TokenKind::PrivateIdent);
        assert_eq!(first("While").0, TokenKind::Const);
        // the mark makes it an ordinary identifier again
        assert_eq!(first("if?"), (TokenKind::Ident, "if?".into()));
    }

    #[test]
    fn keywords_carry_no_value() {
        let Ok(tokens) = crate::lex("return") else {
            panic!("lex failed");
        };
        assert_eq!(tokens[0].kind, TokenKind::KwReturn);
        assert_eq!(tokens[0].value, None);
    }

    #[test]
    fn instance_variables() {
        assert_eq!(first("@size"), (TokenKind::InstanceVar, "size".into()));
        let Ok(tokens) = crate::lex("@size") else {
            panic!("lex failed");
        };
        assert_eq!(tokens[0].span.len(), 5); // span covers the @
    }

    #[test]
    fn bare_at_is_an_error() {
        let kinds = kinds("@ x");
        assert_eq!(kinds[0], TokenKind::Error);
        assert_eq!(kinds[1], TokenKind::Ident);
    }

    #[test]
    fn colon_family() {
        assert_eq!(kinds("::")[0], TokenKind::ColonColon);
        assert_eq!(kinds(":=")[0], TokenKind::ColonAssign);
        assert_eq!(kinds(":>")[0], TokenKind::ColonGt);
        assert_eq!(kinds(":>>")[0], TokenKind::ColonGtGt);
        assert_eq!(kinds(": x")[0], TokenKind::Colon);
        assert_eq!(kinds(":5")[0], TokenKind::Colon);
    }

    #[test]
    fn symbols_are_a_begin_marker_plus_body() {
        assert_eq!(
            kinds(":ok"),
            vec![TokenKind::SymbolBeg, TokenKind::Ident, TokenKind::Eof]
        );
        assert_eq!(
            kinds(":Size"),
            vec![TokenKind::SymbolBeg, TokenKind::Const, TokenKind::Eof]
        );
        assert_eq!(
            kinds(":'raw text'"),
            vec![TokenKind::SymbolBeg, TokenKind::RawString, TokenKind::Eof]
        );
        assert_eq!(
            kinds(":\"a\""),
            vec![
                TokenKind::SymbolBeg,
                TokenKind::StringBeg,
                TokenKind::StringContent,
                TokenKind::StringEnd,
                TokenKind::Eof,
            ]
        );
    }
}
