//! Code-point cursor over the scanner input.
//!
//! The cursor holds a byte position into a borrowed `&str` and always sits
//! on a character boundary. Characters are decoded on demand as Unicode
//! scalar values, so multi-byte UTF-8 sequences advance as one step.
//!
//! End of input is reported as `None` rather than a sentinel character.
//! A NUL (U+0000) inside the source is an ordinary character and is never
//! mistaken for the end.

/// Copyable read position over the scanner input.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// Copying a cursor snapshots the position; nothing is shared.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the current character. Always a char boundary.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns the character after the current one, or `None` if the
    /// current character is the last one (or the cursor is at the end).
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next()?;
        chars.next()
    }

    /// Advance past the current character.
    ///
    /// Does nothing at the end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Extract a source substring by byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Offsets taken from [`pos()`](Self::pos) always are.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Stops at the end of input regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance past JSON whitespace (space, tab, line feed, carriage return).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(crate::char_class::is_whitespace);
    }
}
