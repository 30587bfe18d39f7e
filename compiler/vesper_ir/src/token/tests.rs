use super::*;
use crate::Position;

// === Band predicate tests ===

#[test]
fn keyword_band() {
    assert!(TokenKind::KwAnd.is_keyword());
    assert!(TokenKind::KwIf.is_keyword());
    assert!(TokenKind::KwYield.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::KwAnd.is_literal());
}

#[test]
fn int_literal_band() {
    for kind in [
        TokenKind::HexInt,
        TokenKind::DuoInt,
        TokenKind::DecInt,
        TokenKind::OctInt,
        TokenKind::QuatInt,
        TokenKind::BinInt,
    ] {
        assert!(kind.is_int_literal(), "{kind:?}");
        assert!(kind.is_literal(), "{kind:?}");
    }
    assert!(!TokenKind::Float.is_int_literal());
    assert!(TokenKind::Float.is_literal());
}

#[test]
fn literal_band_covers_string_parts_and_collections() {
    for kind in [
        TokenKind::RawString,
        TokenKind::StringBeg,
        TokenKind::StringContent,
        TokenKind::StringEnd,
        TokenKind::InterpBeg,
        TokenKind::InterpEnd,
        TokenKind::SymbolBeg,
        TokenKind::Regex,
        TokenKind::DocComment,
        TokenKind::EmbelText,
        TokenKind::WordListBeg,
        TokenKind::BinTupleEnd,
    ] {
        assert!(kind.is_literal(), "{kind:?}");
    }
    assert!(!TokenKind::Ident.is_literal());
    assert!(!TokenKind::Plus.is_literal());
}

#[test]
fn operator_bands() {
    assert!(TokenKind::Assign.is_operator());
    assert!(TokenKind::Assign.is_assignment_operator());
    assert!(!TokenKind::Assign.is_overridable_operator());

    assert!(TokenKind::RolAssign.is_assignment_operator());
    assert!(TokenKind::OrAssign.is_assignment_operator());

    assert!(TokenKind::Plus.is_operator());
    assert!(TokenKind::Plus.is_overridable_operator());
    assert!(!TokenKind::Plus.is_assignment_operator());

    assert!(TokenKind::Spaceship.is_overridable_operator());
    assert!(TokenKind::ColonGtGt.is_overridable_operator());

    // punctuation is not in the operator bands
    assert!(!TokenKind::Arrow.is_operator());
    assert!(!TokenKind::Colon.is_operator());
    assert!(!TokenKind::ColonColon.is_operator());
}

#[test]
fn identifier_band_excludes_instance_var() {
    assert!(TokenKind::Ident.is_identifier());
    assert!(TokenKind::PrivateIdent.is_identifier());
    assert!(TokenKind::Const.is_identifier());
    assert!(TokenKind::PrivateConst.is_identifier());
    assert!(!TokenKind::InstanceVar.is_identifier());
    assert!(!TokenKind::KwSelf.is_identifier());
}

#[test]
fn statement_separators() {
    assert!(TokenKind::Newline.is_statement_separator());
    assert!(TokenKind::Semicolon.is_statement_separator());
    assert!(!TokenKind::Comma.is_statement_separator());
    assert!(!TokenKind::Eof.is_statement_separator());
}

#[test]
fn bands_are_disjoint() {
    let all = [
        TokenKind::Error,
        TokenKind::Newline,
        TokenKind::LParen,
        TokenKind::Assign,
        TokenKind::OrAssign,
        TokenKind::Plus,
        TokenKind::ColonGtGt,
        TokenKind::Ident,
        TokenKind::InstanceVar,
        TokenKind::HexInt,
        TokenKind::BinInt,
        TokenKind::Float,
        TokenKind::EmbelText,
        TokenKind::WordListBeg,
        TokenKind::BinTupleEnd,
        TokenKind::KwAnd,
        TokenKind::KwYield,
    ];
    for kind in all {
        let categories = usize::from(kind.is_keyword())
            + usize::from(kind.is_literal())
            + usize::from(kind.is_operator())
            + usize::from(kind.is_identifier())
            + usize::from(kind.is_statement_separator());
        assert!(categories <= 1, "{kind:?} is in {categories} bands");
    }
}

#[test]
fn max_discriminant() {
    assert_eq!(TokenKind::MAX_DISCRIMINANT, 161);
}

// === Token tests ===

fn span(start: u32, end: u32) -> Span {
    Span::new(
        Position::new(1, start + 1, start),
        Position::new(1, end + 1, end),
    )
}

#[test]
fn token_without_value() {
    let token = Token::new(TokenKind::Plus, span(0, 1));
    assert_eq!(token.value, None);
    assert_eq!(token.text(), "");
    assert!(!token.is_eof());
    assert!(!token.is_error());
}

#[test]
fn token_with_value() {
    let token = Token::with_value(TokenKind::Ident, "count".to_string(), span(0, 5));
    assert_eq!(token.text(), "count");
    assert_eq!(token.span.len(), 5);
}

#[test]
fn kind_display_uses_name() {
    assert_eq!(TokenKind::Spaceship.to_string(), "<=>");
    assert_eq!(TokenKind::KwUnless.to_string(), "unless");
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
}
