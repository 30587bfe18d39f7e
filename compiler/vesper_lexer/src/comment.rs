//! Comments: line, nested block, and doc.
//!
//! `#` discards the rest of the line (the following newline still becomes
//! its own separator token). `#[` opens a block comment and `##[` a doc
//! comment; each nests on further occurrences of its own opener and
//! closes on `]#` / `]##` when the depth returns to zero. Block comments
//! produce no token; doc comments produce one `DocComment` token whose
//! value is the dedented text between the delimiters.

use vesper_ir::{Position, Token, TokenKind};

use crate::{diagnostics, mode::Mode, Lexer};

impl Lexer<'_> {
    /// Dispatch on what follows `#`. Returns `None` for the token-less
    /// comment forms.
    pub(crate) fn scan_comment(&mut self, start: Position) -> Option<Token> {
        self.cursor.advance(); // #
        if self.cursor.peek() == Some('#') && self.cursor.peek2() == Some('[') {
            self.cursor.advance_by(2);
            Some(self.scan_doc_comment(start))
        } else if self.cursor.peek() == Some('[') {
            self.cursor.advance();
            self.scan_block_comment(start)
        } else {
            self.cursor.eat_until_newline_or_eof();
            None
        }
    }

    fn scan_block_comment(&mut self, start: Position) -> Option<Token> {
        self.modes.push(Mode::BlockComment { depth: 1 });
        loop {
            if self.cursor.starts_with("#[") {
                self.cursor.advance_by(2);
                self.comment_depth_add(1);
            } else if self.cursor.starts_with("]#") {
                self.cursor.advance_by(2);
                if self.comment_depth_add(-1) == 0 {
                    self.modes.pop();
                    return None;
                }
            } else if self.cursor.advance().is_none() {
                let missing = self.comment_depth_add(0);
                self.modes.pop();
                return Some(self.error(start, diagnostics::unterminated_comment(missing, "]#")));
            }
        }
    }

    fn scan_doc_comment(&mut self, start: Position) -> Token {
        self.modes.push(Mode::DocComment { depth: 1 });
        let content_start = self.cursor.offset();
        loop {
            if self.cursor.starts_with("##[") {
                self.cursor.advance_by(3);
                self.comment_depth_add(1);
            } else if self.cursor.starts_with("]##") {
                let content_end = self.cursor.offset();
                self.cursor.advance_by(3);
                if self.comment_depth_add(-1) == 0 {
                    self.modes.pop();
                    let raw = self.cursor.slice(content_start, content_end);
                    return self.token_with(TokenKind::DocComment, trim_doc_text(raw), start);
                }
            } else if self.cursor.advance().is_none() {
                let missing = self.comment_depth_add(0);
                self.modes.pop();
                return self.error(start, diagnostics::unterminated_comment(missing, "]##"));
            }
        }
    }

    /// Adjust the depth of the comment mode on top of the stack and
    /// return the new value.
    fn comment_depth_add(&mut self, delta: i32) -> u32 {
        if let Some(Mode::BlockComment { depth } | Mode::DocComment { depth }) =
            self.modes.last_mut()
        {
            *depth = depth.saturating_add_signed(delta);
            *depth
        } else {
            0
        }
    }
}

/// Normalize doc comment text: trim single-line content outright; for
/// multi-line content, strip the common leading whitespace of the
/// non-blank continuation lines (the first line sits right after the
/// opener and keeps only a simple trim), then drop blank edges.
fn trim_doc_text(raw: &str) -> String {
    if !raw.contains('\n') {
        return raw.trim().to_string();
    }

    let mut lines = raw.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));
    let first = lines.next().unwrap_or("").trim();
    let rest: Vec<&str> = lines.collect();

    // Indentation is measured in scalars, not bytes; a line may be
    // indented with multi-byte whitespace such as U+3000.
    let indent = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let mut out = Vec::new();
    if !first.is_empty() {
        out.push(first.to_string());
    }
    for line in rest {
        if line.trim().is_empty() {
            out.push(String::new());
        } else {
            out.push(strip_leading_scalars(line, indent).trim_end().to_string());
        }
    }
    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }
    while out.first().is_some_and(String::is_empty) {
        out.remove(0);
    }
    out.join("\n")
}

/// The rest of `line` after its first `count` scalars.
fn strip_leading_scalars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}
