//! JSON tokenizer with structured lexical diagnostics.
//!
//! Wraps the [`jsonlex_core`] scanner: every `Illegal` token it produces is
//! turned into a [`LexError`] carrying a span, a kind, the scanning
//! context, and fix suggestions. Whether one error aborts lexing or all of
//! them are collected is up to the caller ([`LexOptions`]).
//!
//! ```
//! use jsonlex::{lex, LexErrorKind, TokenKind};
//!
//! let lexed = lex(r#"{"a": nul}"#);
//! assert_eq!(lexed.tokens[3].kind, TokenKind::Illegal);
//! assert!(matches!(
//!     lexed.errors[0].kind,
//!     LexErrorKind::MalformedKeyword { expected: "null", .. }
//! ));
//! ```

mod lex_error;
mod lexer;
mod options;

use std::sync::Once;

use tracing::{debug, trace};

pub use jsonlex_core::{tokenize, Span, Token, TokenKind};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion};
pub use options::{IllegalPolicy, LexOptions};

use lexer::Lexer;

/// Output of a collecting lex run.
///
/// `tokens` holds every scanned token, `Illegal` ones included, in source
/// order. `errors` holds one entry per illegal token, also in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub errors: Vec<LexError>,
    /// `true` if scanning stopped at the error limit with input left over.
    pub truncated: bool,
}

impl<'a> Lexed<'a> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens if lexing was clean, otherwise the first error.
    pub fn into_result(self) -> Result<Vec<Token<'a>>, LexError> {
        match self.errors.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(self.tokens),
        }
    }
}

/// Lex `source`, collecting every error.
pub fn lex(source: &str) -> Lexed<'_> {
    collect(source, &LexOptions::default())
}

/// Lex `source` under `options`.
///
/// With [`IllegalPolicy::FailFast`] the first error is returned as `Err`;
/// with [`IllegalPolicy::Collect`] this always returns `Ok`.
pub fn lex_with<'a>(source: &'a str, options: &LexOptions) -> Result<Lexed<'a>, LexError> {
    match options.policy {
        IllegalPolicy::Collect => Ok(collect(source, options)),
        IllegalPolicy::FailFast => lex_strict(source).map(|tokens| Lexed {
            tokens,
            ..Lexed::default()
        }),
    }
}

/// Lex `source`, stopping at the first illegal token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_strict(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    for (token, error) in Lexer::new(source) {
        if let Some(error) = error {
            debug!(%error, "lexing aborted");
            return Err(error);
        }
        tokens.push(token);
    }
    debug!(tokens = tokens.len(), "lexing complete");
    Ok(tokens)
}

#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
fn collect<'a>(source: &'a str, options: &LexOptions) -> Lexed<'a> {
    let mut lexed = Lexed::default();
    let mut lexer = Lexer::new(source);
    while let Some((token, error)) = lexer.next_lexeme() {
        lexed.tokens.push(token);
        let Some(error) = error else {
            continue;
        };
        trace!(kind = ?error.kind, span = %error.span, "illegal token");
        lexed.errors.push(error);
        if options.limit_reached(lexed.errors.len()) {
            lexed.truncated = lexer.has_more();
            break;
        }
    }
    debug!(
        tokens = lexed.tokens.len(),
        errors = lexed.errors.len(),
        truncated = lexed.truncated,
        "lexing complete"
    );
    lexed
}

/// Route lexer spans and events to stderr, filtered by `RUST_LOG`.
///
/// `RUST_LOG=jsonlex=debug` shows one summary per lex call,
/// `RUST_LOG=jsonlex=trace` adds one event per illegal token. Does nothing
/// when `RUST_LOG` is unset or unparsable, or when the host program already
/// installed a global subscriber. Later calls are no-ops.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time();
        if tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init()
            .is_err()
        {
            debug!("global subscriber already set; keeping it");
        }
    });
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
