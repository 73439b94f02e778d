//! Token kinds and the `(kind, text)` token pair.

use std::fmt;

/// Closed set of token kinds.
///
/// `Object` and `Array` are reserved for consumers that group tokens into
/// values. The scanner has no notion of nesting and never produces them.
///
/// Discriminants are stable and exposed through [`index()`](Self::index).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // === Values ===
    /// Quoted string, quotes included in the text.
    String = 0,
    /// Numeric run of digits, signs, exponent markers, and points.
    Number = 1,
    /// Reserved: never produced by the scanner.
    Object = 2,
    /// Reserved: never produced by the scanner.
    Array = 3,
    True = 4,
    False = 5,
    Null = 6,

    // === Delimiters ===
    LeftBrace = 7,
    RightBrace = 8,
    LeftBracket = 9,
    RightBracket = 10,
    Comma = 11,
    Colon = 12,

    // === Control ===
    /// End of input. Always carries empty text.
    EndOfInput = 13,
    /// Malformed or unrecognized input.
    Illegal = 14,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 15] = [
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Object,
        TokenKind::Array,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::EndOfInput,
        TokenKind::Illegal,
    ];

    /// Stable ordinal of this kind.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Object => "object",
            TokenKind::Array => "array",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::LeftBrace => "leftBrace",
            TokenKind::RightBrace => "rightBrace",
            TokenKind::LeftBracket => "leftBracket",
            TokenKind::RightBracket => "rightBracket",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Illegal => "illegal",
        }
    }

    /// Fixed source text for delimiters and keywords.
    ///
    /// Returns `None` for kinds whose text depends on the input.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::String
            | TokenKind::Number
            | TokenKind::Object
            | TokenKind::Array
            | TokenKind::EndOfInput
            | TokenKind::Illegal => None,
        }
    }

    /// Keyword kind led by `c` (`n`, `t`, `f`).
    pub fn keyword_for(c: char) -> Option<TokenKind> {
        match c {
            'n' => Some(TokenKind::Null),
            't' => Some(TokenKind::True),
            'f' => Some(TokenKind::False),
            _ => None,
        }
    }

    /// Delimiter kind for `c`.
    pub fn delimiter_for(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            _ => None,
        }
    }

    /// `true` for `Object` and `Array`.
    pub fn is_reserved(self) -> bool {
        matches!(self, TokenKind::Object | TokenKind::Array)
    }

}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: its kind and the text it was scanned from.
///
/// The text borrows from the scanner input. Positions are not part of the
/// token; see [`Scanned`](crate::Scanned) for spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token (empty text).
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// Half-open byte range `start..end` in the scanner input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Empty span at `pos`.
    pub fn point(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
