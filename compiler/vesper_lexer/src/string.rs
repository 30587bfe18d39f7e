//! Strings: raw, double-quoted with interpolation, and embellished text.
//!
//! Raw strings are verbatim: no escape decoding, and `\'` keeps both
//! characters without closing the literal. Double-quoted strings come out
//! as a `StringBeg`/`StringContent`/`StringEnd` sequence, with
//! `InterpBeg`/`InterpEnd` bracketing each `${...}` body. Content tokens
//! carry the escape-decoded text and are never empty; adjacent structure
//! tokens simply touch.

use vesper_ir::{Position, Token, TokenKind};

use crate::{diagnostics, escape, mode::Mode, Lexer};

impl Lexer<'_> {
    pub(crate) fn scan_raw_string(&mut self, start: Position) -> Token {
        self.cursor.advance(); // '
        let content_start = self.cursor.offset();
        loop {
            match self.cursor.peek() {
                None => return self.error(start, diagnostics::unterminated_raw_string()),
                Some('\'') => {
                    let content = self.cursor.slice(content_start, self.cursor.offset());
                    self.cursor.advance();
                    return self.token_with(TokenKind::RawString, content.to_string(), start);
                }
                Some('\\') if self.cursor.peek2() == Some('\'') => self.cursor.advance_by(2),
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// One step of a suspended double-quoted string: the closing quote,
    /// an interpolation opener, a content run, or the unterminated-string
    /// error at end of input.
    pub(crate) fn scan_string_part(&mut self) -> Token {
        let start = self.position();
        match self.cursor.peek() {
            None => {
                let open = self.string_open();
                self.modes.pop();
                self.error(open, diagnostics::unterminated_string())
            }
            Some('"') => {
                self.cursor.advance();
                self.modes.pop();
                self.token(TokenKind::StringEnd, start)
            }
            Some('$') if self.cursor.peek2() == Some('{') => {
                self.cursor.advance_by(2);
                self.set_interp(true);
                self.token(TokenKind::InterpBeg, start)
            }
            Some(_) => self.scan_string_content(start),
        }
    }

    /// A maximal run of decoded content. Stops before the closing quote,
    /// before `${`, and before a malformed escape once something has been
    /// collected, so the escape gets its own error token on the next call.
    fn scan_string_content(&mut self, start: Position) -> Token {
        let mut decoded = String::new();
        loop {
            match self.cursor.peek() {
                None | Some('"') => break,
                Some('$') if self.cursor.peek2() == Some('{') => break,
                Some('\\') => {
                    let checkpoint = self.cursor.state();
                    match escape::scan_escape(&mut self.cursor) {
                        Ok(ch) => decoded.push(ch),
                        Err(message) => {
                            if decoded.is_empty() {
                                return self.error(start, message);
                            }
                            self.cursor.restore(checkpoint);
                            break;
                        }
                    }
                }
                Some(_) => {
                    if let Some(ch) = self.cursor.advance() {
                        decoded.push(ch);
                    }
                }
            }
        }
        self.token_with(TokenKind::StringContent, decoded, start)
    }

    /// One token from a `${...}` body. Behaves like normal mode except
    /// that newlines are plain whitespace, a bare `}` closes the body,
    /// plain braces are depth-counted, and a nested double-quoted string
    /// is rejected as a unit.
    pub(crate) fn scan_interpolation(&mut self) -> Token {
        loop {
            self.skip_blank();
            if self.cursor.peek() == Some('\n') {
                self.cursor.advance();
                continue;
            }
            if self.cursor.peek() == Some('\r') {
                self.cursor.advance();
                continue;
            }
            let start = self.position();
            return match self.cursor.peek() {
                None => {
                    let open = self.string_open();
                    self.modes.pop();
                    self.error(open, diagnostics::unterminated_string())
                }
                Some('}') => {
                    self.cursor.advance();
                    if self.interp_brace_depth() == 0 {
                        self.set_interp(false);
                        self.token(TokenKind::InterpEnd, start)
                    } else {
                        self.adjust_interp_braces(-1);
                        self.token(TokenKind::RBrace, start)
                    }
                }
                Some('{') => {
                    self.cursor.advance();
                    self.adjust_interp_braces(1);
                    self.token(TokenKind::LBrace, start)
                }
                Some('"') => self.scan_nested_string_error(start),
                Some('#') => {
                    if let Some(token) = self.scan_comment(start) {
                        return token;
                    }
                    continue;
                }
                Some(ch) => self.dispatch(start, ch),
            };
        }
    }

    /// A double-quoted string inside interpolation: consume the whole
    /// literal (escape-aware, so `\"` does not close it) and reject it
    /// as one error token. Its braces never touch the interpolation
    /// depth. Hitting end of input instead folds into the enclosing
    /// unterminated-string error.
    fn scan_nested_string_error(&mut self, start: Position) -> Token {
        self.cursor.advance(); // "
        loop {
            match self.cursor.peek() {
                None => {
                    let open = self.string_open();
                    self.modes.pop();
                    return self.error(open, diagnostics::unterminated_string());
                }
                Some('\\') => self.cursor.advance_by(2),
                Some('"') => {
                    self.cursor.advance();
                    return self.error(start, diagnostics::nested_string_in_interp());
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Embellished text: a run of N backticks opens, the next run of
    /// exactly N closes. Longer and shorter runs are content.
    pub(crate) fn scan_embellished(&mut self, start: Position) -> Token {
        let opener = count_scalars(self.cursor.eat_while(|c| c == '`'));
        self.modes.push(Mode::EmbellishedText { backticks: opener });
        let content_start = self.cursor.offset();
        loop {
            match self.cursor.peek() {
                None => {
                    self.modes.pop();
                    return self.error(start, diagnostics::unterminated_embellished(opener));
                }
                Some('`') => {
                    let run_start = self.cursor.offset();
                    let run = count_scalars(self.cursor.eat_while(|c| c == '`'));
                    if run == opener {
                        self.modes.pop();
                        let content = self.cursor.slice(content_start, run_start);
                        return self.token_with(TokenKind::EmbelText, content.to_string(), start);
                    }
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    // === StringLiteral mode field access ===

    fn string_open(&self) -> Position {
        match self.modes.last() {
            Some(Mode::StringLiteral { open, .. }) => *open,
            _ => self.position(),
        }
    }

    fn set_interp(&mut self, active: bool) {
        if let Some(Mode::StringLiteral {
            in_interp,
            brace_depth,
            ..
        }) = self.modes.last_mut()
        {
            *in_interp = active;
            *brace_depth = 0;
        }
    }

    fn interp_brace_depth(&self) -> u32 {
        match self.modes.last() {
            Some(Mode::StringLiteral { brace_depth, .. }) => *brace_depth,
            _ => 0,
        }
    }

    fn adjust_interp_braces(&mut self, delta: i32) {
        if let Some(Mode::StringLiteral { brace_depth, .. }) = self.modes.last_mut() {
            *brace_depth = brace_depth.saturating_add_signed(delta);
        }
    }
}

fn count_scalars(text: &str) -> u32 {
    text.chars().count() as u32
}
