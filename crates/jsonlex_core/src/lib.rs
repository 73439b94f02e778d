//! Low-level JSON scanner.
//!
//! Turns JSON text into a flat sequence of [`Token`] values without
//! building any value tree. The scanner is lexical only: it finds lexeme
//! boundaries, classifies them, and marks malformed input with
//! [`TokenKind::Illegal`] tokens instead of failing.
//!
//! # Layers
//!
//! - [`SourceBuffer`] wraps the input and records encoding issues.
//! - [`Cursor`] is a `Copy` read position over the input's code points.
//! - [`Scanner`] dispatches on the current character and produces one
//!   token per call.
//! - [`char_class`] holds the pure character predicates the scanner is
//!   built from.
//!
//! # Example
//!
//! ```
//! use jsonlex_core::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize(r#"{"a": [1, true]}"#)
//!     .iter()
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(kinds[0], TokenKind::LeftBrace);
//! assert_eq!(kinds[1], TokenKind::String);
//! assert_eq!(kinds[2], TokenKind::Colon);
//! ```

pub mod char_class;
mod cursor;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Fault, Scanned, Scanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token::{Span, Token, TokenKind};
