//! Error token messages.
//!
//! Every diagnostic string the lexer emits is built here, keeping the
//! wording (and the value preview cap) out of the scanners. All factories
//! are `#[cold]`: error tokens are off the hot path.

/// Longest slice of offending input quoted in a message, in scalars.
const PREVIEW_LIMIT: usize = 24;

/// Quote `text`, truncating long input with a trailing `...`.
fn preview(text: &str) -> String {
    let mut scalars = text.char_indices();
    match scalars.nth(PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cold]
pub(crate) fn unexpected_char(ch: char) -> String {
    format!("unexpected character `{ch}`")
}

#[cold]
pub(crate) fn unterminated_string() -> String {
    "unterminated string literal".to_string()
}

#[cold]
pub(crate) fn unterminated_raw_string() -> String {
    "unterminated raw string literal".to_string()
}

#[cold]
pub(crate) fn unterminated_regex() -> String {
    "unterminated regex literal".to_string()
}

#[cold]
pub(crate) fn unterminated_embellished(backticks: u32) -> String {
    format!("unterminated embellished text: expected a closing run of {backticks} backtick(s)")
}

#[cold]
pub(crate) fn unterminated_comment(depth: u32, closer: &str) -> String {
    format!("unterminated comment: expected {depth} more `{closer}` ending(s)")
}

#[cold]
pub(crate) fn unterminated_collection(close: char) -> String {
    format!("unterminated collection literal: expected `{close}`")
}

#[cold]
pub(crate) fn invalid_int_entry(base: &str, entry: &str) -> String {
    format!("invalid {base} integer literal `{}`", preview(entry))
}

#[cold]
pub(crate) fn expected_collection_delim(letter: char) -> String {
    format!("expected `[`, `{{`, or `(` after `%{letter}`")
}

#[cold]
pub(crate) fn nested_string_in_interp() -> String {
    "double-quoted string inside interpolation; use a raw string instead".to_string()
}

#[cold]
pub(crate) fn expected_ident_after_at() -> String {
    "expected an identifier after `@`".to_string()
}

#[cold]
pub(crate) fn invalid_escape(ch: char) -> String {
    format!("invalid escape sequence `\\{ch}`")
}

#[cold]
pub(crate) fn truncated_escape(marker: char, needed: usize) -> String {
    format!("invalid escape: expected {needed} hex digit(s) after `\\{marker}`")
}

#[cold]
pub(crate) fn escape_out_of_range(value: u32) -> String {
    format!("escape sequence does not encode a valid character: {value:#x}")
}

#[cold]
pub(crate) fn escape_at_end() -> String {
    "incomplete escape sequence at end of string".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_input_is_quoted_whole() {
        assert_eq!(invalid_int_entry("binary", "2abc"), "invalid binary integer literal `2abc`");
    }

    #[test]
    fn long_input_is_truncated_at_scalar_boundary() {
        let entry = "ż".repeat(40);
        let message = invalid_int_entry("hexadecimal", &entry);
        assert!(message.ends_with("...`"));
        // 24 scalars quoted, plus the ellipsis
        let quoted: String = entry.chars().take(24).collect();
        assert!(message.contains(&quoted));
        assert!(!message.contains(&entry));
    }

    #[test]
    fn comment_message_counts_missing_endings() {
        assert_eq!(
            unterminated_comment(2, "]#"),
            "unterminated comment: expected 2 more `]#` ending(s)"
        );
    }
}
