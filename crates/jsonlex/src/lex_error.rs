//! Lexer error types.
//!
//! Errors follow a WHERE+WHAT+WHY+HOW shape:
//! - WHERE: `span` locating the error in the source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` describing what the scanner was doing
//! - HOW: `suggestions` with actionable fixes

use jsonlex_core::{EncodingIssue, EncodingIssueKind, Span};
use thiserror::Error;

/// A lexer error with full context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred (byte offsets).
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were checking.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Keyword Errors ===
    /// A run led by `n`, `t`, or `f` did not spell `null`, `true`, or `false`.
    /// `found` is `None` when the input ended mid-keyword.
    #[error("malformed keyword: expected `{expected}`, found {}", describe(.found))]
    MalformedKeyword {
        expected: &'static str,
        found: Option<char>,
    },

    // === String Errors ===
    /// Missing closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// Control character inside a string; it must be escaped.
    #[error("control character {found:?} in string")]
    ControlCharInString { found: char },
    /// Backslash not followed by `" \ / b f n r t u`.
    #[error("invalid escape sequence in string")]
    InvalidEscape { found: Option<char> },

    // === Character Errors ===
    /// Character that cannot start any token.
    #[error("unexpected character {found:?}")]
    UnexpectedChar { found: char },

    // === Encoding Errors ===
    /// UTF-8 byte order mark at the start of the input.
    #[error("byte order mark at start of input")]
    ByteOrderMark,
    /// NUL character (U+0000) in the input.
    #[error("NUL character in input")]
    InteriorNull,
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes fields to format arguments by reference"
)]
fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_owned(),
    }
}

/// Scanning context at the point of error.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Top-level scanning (between tokens).
    #[default]
    TopLevel,
    /// Inside a string lexeme opened at `start`.
    InsideString { start: usize },
    /// Matching a keyword.
    InsideKeyword { expected: &'static str },
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// Concrete text replacement, if one applies.
    pub replacement: Option<LexReplacement>,
    /// Lower is more likely relevant.
    pub priority: u8,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    pub span: Span,
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion.
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Create a suggestion that deletes `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, String::new())
    }

    /// Create a suggestion that replaces `span` with `text`.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

impl LexError {
    #[cold]
    pub fn malformed_keyword(span: Span, expected: &'static str, found: Option<char>) -> Self {
        Self {
            span,
            kind: LexErrorKind::MalformedKeyword { expected, found },
            context: LexErrorContext::InsideKeyword { expected },
            suggestions: vec![LexSuggestion::replace(
                format!("write `{expected}`"),
                span,
                expected,
            )],
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedString,
            context: LexErrorContext::InsideString { start: span.start },
            suggestions: vec![LexSuggestion::text("add closing `\"`", 0)],
        }
    }

    /// `span` covers the accepted part of the string; `found` sits right after it.
    #[cold]
    pub fn control_char_in_string(span: Span, found: char) -> Self {
        let at = Span::new(span.end, span.end + found.len_utf8());
        Self {
            span,
            kind: LexErrorKind::ControlCharInString { found },
            context: LexErrorContext::InsideString { start: span.start },
            suggestions: vec![LexSuggestion::replace(
                "escape the control character",
                at,
                escape_control(found),
            )],
        }
    }

    #[cold]
    pub fn invalid_escape(span: Span, found: Option<char>) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidEscape { found },
            context: LexErrorContext::InsideString { start: span.start },
            suggestions: vec![LexSuggestion::text(
                r#"valid escapes are: \", \\, \/, \b, \f, \n, \r, \t, \uXXXX"#,
                1,
            )],
        }
    }

    #[cold]
    pub fn unexpected_char(span: Span, found: char) -> Self {
        let suggestions = match found {
            ';' => vec![LexSuggestion::replace("use `:` between key and value", span, ":")],
            '\'' => vec![LexSuggestion::text("JSON strings use double quotes", 0)],
            _ => vec![LexSuggestion::removal("remove this character", span)],
        };
        Self {
            span,
            kind: LexErrorKind::UnexpectedChar { found },
            context: LexErrorContext::TopLevel,
            suggestions,
        }
    }

    #[cold]
    pub fn from_encoding_issue(issue: EncodingIssue) -> Self {
        let span = Span::new(issue.pos, issue.pos + issue.len);
        let (kind, message) = match issue.kind {
            EncodingIssueKind::Utf8Bom => (LexErrorKind::ByteOrderMark, "remove the byte order mark"),
            EncodingIssueKind::InteriorNull => (LexErrorKind::InteriorNull, "remove the NUL character"),
        };
        Self {
            span,
            kind,
            context: LexErrorContext::TopLevel,
            suggestions: vec![LexSuggestion::removal(message, span)],
        }
    }
}

/// JSON escape for a control character.
fn escape_control(c: char) -> String {
    match c {
        '\u{8}' => r"\b".to_owned(),
        '\u{c}' => r"\f".to_owned(),
        '\n' => r"\n".to_owned(),
        '\r' => r"\r".to_owned(),
        '\t' => r"\t".to_owned(),
        _ => format!("\\u{:04x}", u32::from(c)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
