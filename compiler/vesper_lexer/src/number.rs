//! Numeric literals.
//!
//! A single leading `0` followed by a base marker selects the radix:
//! `0x` hex, `0o` octal, `0q` quaternary, `0b` binary, `0d` duodecimal.
//! The digits after the marker may be empty (`0x` is a valid literal)
//! and anything that stops matching is simply left for the next token,
//! so `0x21.36` is a hex integer followed by the float `.36`, and `00x21`
//! is the decimal `00` followed by the identifier `x21`.
//!
//! Only decimal literals can become floats: a `.` with a digit after it
//! promotes, and a promoted literal may take an `e`/`E` exponent.
//! Underscores group digits; they must follow a digit and are stripped
//! from the token value.

use vesper_ir::{Position, Token, TokenKind};

use crate::Lexer;

/// Radix of a based integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Base {
    Hex,
    Duo,
    Oct,
    Quat,
    Bin,
}

impl Base {
    fn from_marker(marker: char) -> Option<(Base, TokenKind)> {
        Some(match marker {
            'x' | 'X' => (Base::Hex, TokenKind::HexInt),
            'd' | 'D' => (Base::Duo, TokenKind::DuoInt),
            'o' | 'O' => (Base::Oct, TokenKind::OctInt),
            'q' | 'Q' => (Base::Quat, TokenKind::QuatInt),
            'b' | 'B' => (Base::Bin, TokenKind::BinInt),
            _ => return None,
        })
    }

    pub(crate) fn is_digit(self, ch: char) -> bool {
        match self {
            Base::Hex => ch.is_ascii_hexdigit(),
            // duodecimal: ten and eleven are written a/A and b/B
            Base::Duo => ch.is_ascii_digit() || matches!(ch, 'a' | 'b' | 'A' | 'B'),
            Base::Oct => matches!(ch, '0'..='7'),
            Base::Quat => matches!(ch, '0'..='3'),
            Base::Bin => matches!(ch, '0' | '1'),
        }
    }

    pub(crate) fn prefix(self) -> &'static str {
        match self {
            Base::Hex => "0x",
            Base::Duo => "0d",
            Base::Oct => "0o",
            Base::Quat => "0q",
            Base::Bin => "0b",
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Base::Hex => "hexadecimal",
            Base::Duo => "duodecimal",
            Base::Oct => "octal",
            Base::Quat => "quaternary",
            Base::Bin => "binary",
        }
    }
}

/// Drop digit-group underscores from a literal's value.
pub(crate) fn strip_separators(text: &str) -> String {
    if text.contains('_') {
        text.chars().filter(|&c| c != '_').collect()
    } else {
        text.to_string()
    }
}

impl Lexer<'_> {
    pub(crate) fn scan_number(&mut self, start: Position) -> Token {
        if self.cursor.peek() == Some('0') {
            if let Some((base, kind)) = self.cursor.peek2().and_then(Base::from_marker) {
                return self.scan_based_int(start, base, kind);
            }
        }
        self.scan_decimal(start)
    }

    fn scan_based_int(&mut self, start: Position, base: Base, kind: TokenKind) -> Token {
        self.cursor.advance(); // 0
        self.cursor.advance(); // base marker
        self.eat_digits(|c| base.is_digit(c));
        let text = self.cursor.slice(start.offset, self.cursor.offset());
        self.token_with(kind, strip_separators(text), start)
    }

    fn scan_decimal(&mut self, start: Position) -> Token {
        self.eat_digits(|c| c.is_ascii_digit());
        let mut kind = TokenKind::DecInt;
        if self.cursor.peek() == Some('.') && self.cursor.peek2().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance(); // .
            self.eat_digits(|c| c.is_ascii_digit());
            self.eat_exponent();
            kind = TokenKind::Float;
        }
        let text = self.cursor.slice(start.offset, self.cursor.offset());
        self.token_with(kind, strip_separators(text), start)
    }

    /// A float with no integer part, e.g. the `.36` left over after a
    /// hex literal. The dispatcher guarantees a digit after the dot.
    pub(crate) fn scan_leading_dot_float(&mut self, start: Position) -> Token {
        self.cursor.advance(); // .
        self.eat_digits(|c| c.is_ascii_digit());
        self.eat_exponent();
        let text = self.cursor.slice(start.offset, self.cursor.offset());
        self.token_with(TokenKind::Float, strip_separators(text), start)
    }

    /// Digits with underscore grouping. An underscore must sit between
    /// digits, so one before the first digit or without a digit after it
    /// ends the literal.
    fn eat_digits(&mut self, is_digit: impl Fn(char) -> bool) {
        let mut seen_digit = false;
        loop {
            match self.cursor.peek() {
                Some(c) if is_digit(c) => {
                    seen_digit = true;
                    self.cursor.advance();
                }
                Some('_') if seen_digit && self.cursor.peek2().is_some_and(&is_digit) => {
                    self.cursor.advance();
                }
                _ => break,
            }
        }
    }

    /// `e`/`E` exponent on a promoted float. Consumed only when digits
    /// actually follow, so `1.5e` stays a float plus identifier.
    fn eat_exponent(&mut self) {
        if !matches!(self.cursor.peek(), Some('e' | 'E')) {
            return;
        }
        match self.cursor.peek2() {
            Some(d) if d.is_ascii_digit() => {
                self.cursor.advance_by(2);
            }
            Some('+' | '-') if self.cursor.peek_nth(2).is_some_and(|c| c.is_ascii_digit()) => {
                self.cursor.advance_by(3);
            }
            _ => return,
        }
        self.eat_digits(|c| c.is_ascii_digit());
    }
}

#[cfg(test)]
mod tests {
    use crate::lex;
    use pretty_assertions::assert_eq;
    use vesper_ir::TokenKind;

    fn tokens(source: &str) -> Vec<(TokenKind, String)> {
        let Ok(tokens) = lex(source) else {
            panic!("lex failed for {source}");
        };
        tokens
            .into_iter()
            .map(|t| (t.kind, t.text().to_string()))
            .collect()
    }

    fn first(source: &str) -> (TokenKind, String) {
        tokens(source).swap_remove(0)
    }

    #[test]
    fn decimal_integers() {
        assert_eq!(first("0"), (TokenKind::DecInt, "0".into()));
        assert_eq!(first("42"), (TokenKind::DecInt, "42".into()));
        assert_eq!(first("1_000_000"), (TokenKind::DecInt, "1000000".into()));
    }

    #[test]
    fn based_integers() {
        assert_eq!(first("0x21"), (TokenKind::HexInt, "0x21".into()));
        assert_eq!(first("0XFF"), (TokenKind::HexInt, "0XFF".into()));
        assert_eq!(first("0o755"), (TokenKind::OctInt, "0o755".into()));
        assert_eq!(first("0q123"), (TokenKind::QuatInt, "0q123".into()));
        assert_eq!(first("0b1010"), (TokenKind::BinInt, "0b1010".into()));
        assert_eq!(first("0d9ab"), (TokenKind::DuoInt, "0d9ab".into()));
        assert_eq!(first("0xdead_beef"), (TokenKind::HexInt, "0xdeadbeef".into()));
    }

    #[test]
    fn empty_base_body_is_valid() {
        assert_eq!(first("0x"), (TokenKind::HexInt, "0x".into()));
        assert_eq!(first("0b"), (TokenKind::BinInt, "0b".into()));
    }

    #[test]
    fn double_zero_is_not_a_base_prefix() {
        let toks = tokens("00x21");
        assert_eq!(toks[0], (TokenKind::DecInt, "00".into()));
        assert_eq!(toks[1], (TokenKind::Ident, "x21".into()));
    }

    #[test]
    fn based_literal_does_not_swallow_a_dot() {
        let toks = tokens("0x21.36");
        assert_eq!(toks[0], (TokenKind::HexInt, "0x21".into()));
        assert_eq!(toks[1], (TokenKind::Float, ".36".into()));
    }

    #[test]
    fn out_of_radix_digits_end_the_literal() {
        let toks = tokens("0b12");
        assert_eq!(toks[0], (TokenKind::BinInt, "0b1".into()));
        assert_eq!(toks[1], (TokenKind::DecInt, "2".into()));
    }

    #[test]
    fn floats() {
        assert_eq!(first("3.25"), (TokenKind::Float, "3.25".into()));
        assert_eq!(first("0.5"), (TokenKind::Float, "0.5".into()));
        assert_eq!(first("1_0.2_5"), (TokenKind::Float, "10.25".into()));
    }

    #[test]
    fn dot_without_digit_stays_a_dot() {
        let toks = tokens("1.x");
        assert_eq!(toks[0], (TokenKind::DecInt, "1".into()));
        assert_eq!(toks[1].0, TokenKind::Dot);
        assert_eq!(toks[2], (TokenKind::Ident, "x".into()));
    }

    #[test]
    fn range_after_integer() {
        let toks = tokens("1..9");
        assert_eq!(toks[0], (TokenKind::DecInt, "1".into()));
        assert_eq!(toks[1].0, TokenKind::DotDot);
        assert_eq!(toks[2], (TokenKind::DecInt, "9".into()));
    }

    #[test]
    fn exponents() {
        assert_eq!(first("1.5e3"), (TokenKind::Float, "1.5e3".into()));
        assert_eq!(first("1.5E+3"), (TokenKind::Float, "1.5E+3".into()));
        assert_eq!(first("2.0e-10"), (TokenKind::Float, "2.0e-10".into()));
    }

    #[test]
    fn exponent_needs_digits() {
        let toks = tokens("1.5e");
        assert_eq!(toks[0], (TokenKind::Float, "1.5".into()));
        assert_eq!(toks[1], (TokenKind::Ident, "e".into()));

        let toks = tokens("1.5e+");
        assert_eq!(toks[0], (TokenKind::Float, "1.5".into()));
        assert_eq!(toks[1], (TokenKind::Ident, "e".into()));
        assert_eq!(toks[2].0, TokenKind::Plus);
    }

    #[test]
    fn exponent_only_after_promotion() {
        let toks = tokens("1e5");
        assert_eq!(toks[0], (TokenKind::DecInt, "1".into()));
        assert_eq!(toks[1], (TokenKind::Ident, "e5".into()));
    }

    #[test]
    fn trailing_underscore_ends_the_literal() {
        let toks = tokens("1_000_");
        assert_eq!(toks[0], (TokenKind::DecInt, "1000".into()));
        assert_eq!(toks[1], (TokenKind::PrivateIdent, "_".into()));
    }

    #[test]
    fn underscore_cannot_open_a_base_body() {
        let toks = tokens("0x_1");
        assert_eq!(toks[0], (TokenKind::HexInt, "0x".into()));
        assert_eq!(toks[1], (TokenKind::PrivateIdent, "_1".into()));

        let toks = tokens("0b_0");
        assert_eq!(toks[0], (TokenKind::BinInt, "0b".into()));
        assert_eq!(toks[1], (TokenKind::PrivateIdent, "_0".into()));
    }
}
