//! Escape sequence decoding for double-quoted strings.

use vesper_lexer_core::Cursor;

use crate::diagnostics;

/// Consume and decode one escape sequence. The cursor must sit on the
/// backslash. On error, exactly the malformed escape has been consumed,
/// so the caller's span covers it and nothing else.
pub(crate) fn scan_escape(cursor: &mut Cursor<'_>) -> Result<char, String> {
    cursor.advance(); // backslash
    let Some(marker) = cursor.advance() else {
        return Err(diagnostics::escape_at_end());
    };
    if let Some(simple) = resolve_simple(marker) {
        return Ok(simple);
    }
    match marker {
        'x' => hex_escape(cursor, 'x', 2),
        'u' => hex_escape(cursor, 'u', 4),
        'U' => hex_escape(cursor, 'U', 8),
        other => Err(diagnostics::invalid_escape(other)),
    }
}

fn resolve_simple(marker: char) -> Option<char> {
    Some(match marker {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '\\' => '\\',
        '"' => '"',
        '\'' => '\'',
        'b' => '\u{8}',
        'v' => '\u{b}',
        'f' => '\u{c}',
        'a' => '\u{7}',
        _ => return None,
    })
}

/// `\xHH`, `\uXXXX`, `\UXXXXXXXX`: exactly `needed` hex digits. Stops at
/// the first non-digit, leaving it unconsumed.
fn hex_escape(cursor: &mut Cursor<'_>, marker: char, needed: usize) -> Result<char, String> {
    let mut value: u32 = 0;
    for _ in 0..needed {
        match cursor.peek().and_then(|c| c.to_digit(16)) {
            Some(digit) => {
                cursor.advance();
                value = value * 16 + digit;
            }
            None => return Err(diagnostics::truncated_escape(marker, needed)),
        }
    }
    char::from_u32(value).ok_or_else(|| diagnostics::escape_out_of_range(value))
}
