//! Drives the core scanner and turns faults into [`LexError`]s.
//!
//! An `UnexpectedChar` fault at the position of a recorded encoding issue
//! (byte order mark, NUL) is reported as that encoding issue instead, since
//! the buffer already knows the more specific cause.

use jsonlex_core::{Fault, Scanned, Scanner, SourceBuffer, Token};

use crate::LexError;

/// Token stream paired with the error each illegal token maps to.
#[derive(Clone, Debug)]
pub(crate) struct Lexer<'a> {
    buf: SourceBuffer<'a>,
    scanner: Scanner<'a>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let buf = SourceBuffer::new(source);
        let scanner = Scanner::new(buf.cursor());
        Self { buf, scanner }
    }

    /// Returns `true` if any token remains after the current position.
    pub(crate) fn has_more(&self) -> bool {
        !self.scanner.clone().next_token().is_end()
    }

    /// Scan the next token and map its fault, if any. `None` at end of input.
    pub(crate) fn next_lexeme(&mut self) -> Option<(Token<'a>, Option<LexError>)> {
        let scanned = self.scanner.scan_token();
        if scanned.token.is_end() {
            return None;
        }
        let error = self.error_for(&scanned);
        debug_assert_eq!(error.is_some(), scanned.token.is_illegal());
        Some((scanned.token, error))
    }

    fn error_for(&self, scanned: &Scanned<'a>) -> Option<LexError> {
        let fault = scanned.fault?;
        let span = scanned.span;
        let source = self.buf.as_str();
        // The character the scanner stopped on, right after the span.
        let stopped_on = source[span.end..].chars().next();

        let error = match fault {
            Fault::MalformedKeyword { expected } => {
                LexError::malformed_keyword(span, expected, scanned.token.text.chars().next())
            }
            Fault::UnterminatedString => LexError::unterminated_string(span),
            Fault::ControlCharInString => LexError::control_char_in_string(
                span,
                stopped_on.unwrap_or(char::REPLACEMENT_CHARACTER),
            ),
            // `stopped_on` is the backslash; report what follows it.
            Fault::InvalidEscape => {
                LexError::invalid_escape(span, source[span.end..].chars().nth(1))
            }
            Fault::UnexpectedChar => match self.buf.encoding_issue_at(span.start) {
                Some(issue) => LexError::from_encoding_issue(issue),
                None => LexError::unexpected_char(
                    span,
                    source[span.start..]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER),
                ),
            },
        };
        Some(error)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (Token<'a>, Option<LexError>);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}
