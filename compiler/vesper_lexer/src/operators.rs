//! Operator scanning.
//!
//! Maximal munch over a static table per lead character, ordered longest
//! suffix first. The empty suffix at the end of each table is the
//! one-character fallback, so the loop always terminates with a token:
//! `<<<=` wins over `<<<` wins over `<<` wins over `<`.

use vesper_ir::{Position, Token, TokenKind};

use crate::{diagnostics, Lexer};

/// Suffixes tried after the lead character has been consumed.
fn table_for(lead: char) -> &'static [(&'static str, TokenKind)] {
    match lead {
        '+' => &[("=", TokenKind::PlusAssign), ("", TokenKind::Plus)],
        '-' => &[
            ("=", TokenKind::MinusAssign),
            (">", TokenKind::Arrow),
            ("", TokenKind::Minus),
        ],
        '*' => &[
            ("*=", TokenKind::PowAssign),
            ("*", TokenKind::Pow),
            ("=", TokenKind::StarAssign),
            ("", TokenKind::Star),
        ],
        '/' => &[("=", TokenKind::SlashAssign), ("", TokenKind::Slash)],
        '=' => &[
            ("=", TokenKind::EqEq),
            (">", TokenKind::FatArrow),
            ("", TokenKind::Assign),
        ],
        '!' => &[("=", TokenKind::NotEq), ("", TokenKind::Bang)],
        '<' => &[
            ("<<=", TokenKind::RolAssign),
            ("<<", TokenKind::Rol),
            ("<=", TokenKind::ShlAssign),
            ("=>", TokenKind::Spaceship),
            ("<", TokenKind::Shl),
            ("=", TokenKind::LtEq),
            ("", TokenKind::Lt),
        ],
        '>' => &[
            (">=", TokenKind::ShrAssign),
            (">", TokenKind::Shr),
            ("=", TokenKind::GtEq),
            ("", TokenKind::Gt),
        ],
        '&' => &[
            ("&=", TokenKind::AndAssign),
            ("&", TokenKind::AndAnd),
            ("=", TokenKind::AmpAssign),
            ("", TokenKind::Amp),
        ],
        '|' => &[
            ("|=", TokenKind::OrAssign),
            ("|", TokenKind::OrOr),
            ("=", TokenKind::PipeAssign),
            ("", TokenKind::Pipe),
        ],
        '^' => &[("=", TokenKind::CaretAssign), ("", TokenKind::Caret)],
        '~' => &[("", TokenKind::Tilde)],
        _ => &[],
    }
}

impl Lexer<'_> {
    pub(crate) fn scan_operator(&mut self, start: Position, lead: char) -> Token {
        self.cursor.advance(); // lead
        for (suffix, kind) in table_for(lead) {
            if self.cursor.starts_with(suffix) {
                self.cursor.advance_by(suffix.len());
                return self.token(*kind, start);
            }
        }
        self.error(start, diagnostics::unexpected_char(lead))
    }

    /// `.`, `..`, `...`. The float case is taken before this is reached.
    pub(crate) fn scan_dots(&mut self, start: Position) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('.') {
            if self.cursor.match_char('.') {
                self.token(TokenKind::DotDotDot, start)
            } else {
                self.token(TokenKind::DotDot, start)
            }
        } else {
            self.token(TokenKind::Dot, start)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lex;
    use pretty_assertions::assert_eq;
    use vesper_ir::TokenKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let Ok(tokens) = lex(source) else {
            panic!("lex failed for {source}");
        };
        tokens.into_iter().map(|t| t.kind).collect()
    }

    fn op(source: &str) -> TokenKind {
        kinds(source)[0]
    }

    #[test]
    fn assignment_operators() {
        let cases = [
            ("=", TokenKind::Assign),
            ("+=", TokenKind::PlusAssign),
            ("-=", TokenKind::MinusAssign),
            ("*=", TokenKind::StarAssign),
            ("/=", TokenKind::SlashAssign),
            ("**=", TokenKind::PowAssign),
            ("<<=", TokenKind::ShlAssign),
            (">>=", TokenKind::ShrAssign),
            ("<<<=", TokenKind::RolAssign),
            ("&=", TokenKind::AmpAssign),
            ("|=", TokenKind::PipeAssign),
            ("^=", TokenKind::CaretAssign),
            ("&&=", TokenKind::AndAssign),
            ("||=", TokenKind::OrAssign),
        ];
        for (source, expected) in cases {
            assert_eq!(op(source), expected, "{source}");
            assert!(expected.is_assignment_operator(), "{source}");
        }
    }

    #[test]
    fn overridable_operators() {
        let cases = [
            ("+", TokenKind::Plus),
            ("-", TokenKind::Minus),
            ("**", TokenKind::Pow),
            ("==", TokenKind::EqEq),
            ("!=", TokenKind::NotEq),
            ("<=>", TokenKind::Spaceship),
            ("<<", TokenKind::Shl),
            (">>", TokenKind::Shr),
            ("<<<", TokenKind::Rol),
            ("&&", TokenKind::AndAnd),
            ("||", TokenKind::OrOr),
            ("~", TokenKind::Tilde),
            ("!", TokenKind::Bang),
        ];
        for (source, expected) in cases {
            assert_eq!(op(source), expected, "{source}");
            assert!(expected.is_overridable_operator(), "{source}");
        }
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(
            kinds("a<<<=b"),
            vec![
                TokenKind::Ident,
                TokenKind::RolAssign,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
        // four < in a row: <<< then <
        assert_eq!(
            kinds("<<<<"),
            vec![TokenKind::Rol, TokenKind::Lt, TokenKind::Eof]
        );
        assert_eq!(
            kinds("<=>="),
            vec![TokenKind::Spaceship, TokenKind::Assign, TokenKind::Eof]
        );
    }

    #[test]
    fn arrows() {
        assert_eq!(op("->"), TokenKind::Arrow);
        assert_eq!(op("=>"), TokenKind::FatArrow);
        assert!(!TokenKind::Arrow.is_operator());
    }

    #[test]
    fn dots() {
        assert_eq!(op("."), TokenKind::Dot);
        assert_eq!(op(".."), TokenKind::DotDot);
        assert_eq!(op("..."), TokenKind::DotDotDot);
        assert_eq!(
            kinds("...."),
            vec![TokenKind::DotDotDot, TokenKind::Dot, TokenKind::Eof]
        );
    }

    #[test]
    fn adjacent_operators_split_greedily() {
        assert_eq!(
            kinds("a=-b"),
            vec![
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Minus,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }
}
