//! Hand-written JSON scanner producing one [`Token`] per call.
//!
//! The scanner works on a [`Cursor`] and allocates nothing per token:
//! token text borrows from the input. It does not build values, decode
//! escapes, or check numeric grammar. Malformed input is reported through
//! `Illegal` tokens, never through `Result::Err` or a panic.
//!
//! # Design
//!
//! Dispatch looks at one character. Every sub-scan leaves the cursor on
//! the last character of its lexeme, and [`Scanner::scan_token`] advances one
//! more position before returning, so each call resumes right after the
//! previous lexeme. The two early returns (keyword mismatch and string
//! downgrade) bypass that shared advance:
//! - a keyword mismatch consumes the mismatching character itself;
//! - a downgraded string leaves the cursor on the character that stopped
//!   it, which the next call scans on its own.

use crate::char_class::{
    is_backslash, is_control, is_double_quote, is_number_continue, is_number_lead, is_string_char,
};
use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenKind};

/// Why a token was scanned as [`TokenKind::Illegal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fault {
    /// A run led by `n`, `t`, or `f` did not spell the keyword.
    MalformedKeyword { expected: &'static str },
    /// The input ended before the closing `"`.
    UnterminatedString,
    /// A control character appeared inside a string.
    ControlCharInString,
    /// A backslash inside a string was not followed by an escapable letter.
    InvalidEscape,
    /// The character cannot start any token.
    UnexpectedChar,
}

/// A token with its byte span and, for illegal tokens, the reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanned<'a> {
    pub token: Token<'a>,
    /// Input consumed for this token (leading whitespace excluded).
    pub span: Span,
    /// Set exactly when `token.kind` is `Illegal`.
    pub fault: Option<Fault>,
}

impl<'a> Scanned<'a> {
    fn clean(token: Token<'a>, span: Span) -> Self {
        Self {
            token,
            span,
            fault: None,
        }
    }

    fn illegal(text: &'a str, span: Span, fault: Fault) -> Self {
        Self {
            token: Token::new(TokenKind::Illegal, text),
            span,
            fault: Some(fault),
        }
    }
}

/// Pull-based JSON scanner.
///
/// Produces one token per [`next_token`](Self::next_token) call. Once the
/// input is exhausted every further call returns `EndOfInput`. Scanning
/// again from the start needs a fresh scanner.
///
/// ```
/// use jsonlex_core::{Fault, Scanner, SourceBuffer, Span, TokenKind};
///
/// let buf = SourceBuffer::new("[nul]");
/// let mut scanner = Scanner::new(buf.cursor());
/// assert_eq!(scanner.scan_token().token.kind, TokenKind::LeftBracket);
///
/// let bad = scanner.scan_token();
/// assert_eq!(bad.token.kind, TokenKind::Illegal);
/// assert_eq!(bad.token.text, "]");
/// assert_eq!(bad.span, Span::new(1, 5));
/// assert_eq!(bad.fault, Some(Fault::MalformedKeyword { expected: "null" }));
///
/// assert!(scanner.scan_token().token.is_end());
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next token.
    #[inline]
    pub fn next_token(&mut self) -> Token<'a> {
        self.scan_token().token
    }

    /// Produce the next token together with its span and fault.
    pub fn scan_token(&mut self) -> Scanned<'a> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        let Some(c) = self.cursor.current() else {
            return Scanned::clean(Token::end_of_input(), Span::point(start));
        };

        let (kind, fault) = if let Some(delimiter) = TokenKind::delimiter_for(c) {
            (delimiter, None)
        } else if let Some(keyword) = TokenKind::keyword_for(c) {
            if let Err(mismatch) = self.keyword(start, keyword) {
                return mismatch;
            }
            (keyword, None)
        } else if is_double_quote(c) {
            if let Err(fault) = self.string() {
                let span = Span::new(start, self.cursor.pos());
                return Scanned::illegal(self.cursor.slice_from(start), span, fault);
            }
            (TokenKind::String, None)
        } else if is_number_lead(c) {
            self.number();
            (TokenKind::Number, None)
        } else {
            (TokenKind::Illegal, Some(Fault::UnexpectedChar))
        };

        // Step past the last character of the lexeme.
        self.cursor.advance();
        let span = Span::new(start, self.cursor.pos());
        debug_assert!(!span.is_empty(), "token at {start} consumed no input");
        debug_assert!(!kind.is_reserved(), "scanner produced {kind}");

        let text = match (fault, kind.lexeme()) {
            (Some(_), _) => "",
            (None, Some(fixed)) => fixed,
            (None, None) => self.cursor.slice(span.start, span.end),
        };
        Scanned {
            token: Token::new(kind, text),
            span,
            fault,
        }
    }

    /// Collect tokens until (not including) `EndOfInput`.
    pub fn generate_tokens(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            if tok.is_end() {
                break;
            }
            tokens.push(tok);
        }
        tokens
    }

    // ─── Keywords ──────────────────────────────────────────────────

    /// Match the rest of `kind`'s keyword one character at a time.
    ///
    /// The cursor starts on the lead letter and ends on the last letter.
    /// On the first mismatch, returns an `Illegal` token carrying the
    /// mismatching character (empty at end of input), already consumed.
    fn keyword(&mut self, start: usize, kind: TokenKind) -> Result<(), Scanned<'a>> {
        let word = kind.lexeme().unwrap_or_default();
        for expected in word.chars().skip(1) {
            self.cursor.advance();
            if self.cursor.current() != Some(expected) {
                let at = self.cursor.pos();
                self.cursor.advance();
                let span = Span::new(start, self.cursor.pos());
                let text = self.cursor.slice_from(at);
                return Err(Scanned::illegal(
                    text,
                    span,
                    Fault::MalformedKeyword { expected: word },
                ));
            }
        }
        Ok(())
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// Scan a string lexeme from its opening quote.
    ///
    /// On success the cursor rests on the closing quote. On failure it
    /// rests on the character that ended the scan (or at end of input),
    /// which is not part of the lexeme.
    fn string(&mut self) -> Result<(), Fault> {
        let mut escaped = false;
        loop {
            self.cursor.advance();
            let Some(c) = self.cursor.current() else {
                return Err(Fault::UnterminatedString);
            };
            if !is_string_char(c, self.cursor.peek(), escaped) {
                return if is_double_quote(c) {
                    Ok(())
                } else if is_control(c) {
                    Err(Fault::ControlCharInString)
                } else {
                    Err(Fault::InvalidEscape)
                };
            }
            escaped = !escaped && is_backslash(c);
        }
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Scan the maximal run of number characters.
    ///
    /// The cursor starts on the lead digit or sign and ends on the last
    /// character of the run. No ordering is checked: `1--2e+e3` is one run.
    fn number(&mut self) {
        while self.cursor.peek().is_some_and(is_number_continue) {
            self.cursor.advance();
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let tok = self.next_token();
        if tok.is_end() {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: scan a source string and collect every token.
///
/// Returns all tokens except the final `EndOfInput`. For incremental
/// access, construct a [`SourceBuffer`](crate::SourceBuffer) and a
/// [`Scanner`] directly.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let buf = crate::SourceBuffer::new(source);
    Scanner::new(buf.cursor()).generate_tokens()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
