//! Reserved word lookup.
//!
//! Bucketed by length first: a single integer match eliminates most
//! identifiers before any string comparison happens. Only public
//! identifiers are ever looked up; `_`-led and uppercase-led names can
//! never be keywords.

use vesper_ir::TokenKind;

/// Map a public identifier spelling to its keyword kind, if reserved.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let kind = match text.len() {
        2 => match text {
            "do" => TokenKind::KwDo,
            "if" => TokenKind::KwIf,
            "in" => TokenKind::KwIn,
            "or" => TokenKind::KwOr,
            _ => return None,
        },
        3 => match text {
            "and" => TokenKind::KwAnd,
            "def" => TokenKind::KwDef,
            "end" => TokenKind::KwEnd,
            "for" => TokenKind::KwFor,
            "nil" => TokenKind::KwNil,
            "not" => TokenKind::KwNot,
            _ => return None,
        },
        4 => match text {
            "case" => TokenKind::KwCase,
            "else" => TokenKind::KwElse,
            "loop" => TokenKind::KwLoop,
            "next" => TokenKind::KwNext,
            "self" => TokenKind::KwSelf,
            "then" => TokenKind::KwThen,
            "true" => TokenKind::KwTrue,
            "when" => TokenKind::KwWhen,
            _ => return None,
        },
        5 => match text {
            "begin" => TokenKind::KwBegin,
            "break" => TokenKind::KwBreak,
            "class" => TokenKind::KwClass,
            "elsif" => TokenKind::KwElsif,
            "false" => TokenKind::KwFalse,
            "super" => TokenKind::KwSuper,
            "until" => TokenKind::KwUntil,
            "while" => TokenKind::KwWhile,
            "yield" => TokenKind::KwYield,
            _ => return None,
        },
        6 => match text {
            "ensure" => TokenKind::KwEnsure,
            "import" => TokenKind::KwImport,
            "module" => TokenKind::KwModule,
            "return" => TokenKind::KwReturn,
            "unless" => TokenKind::KwUnless,
            _ => return None,
        },
        _ => return None,
    };
    Some(kind)
}
