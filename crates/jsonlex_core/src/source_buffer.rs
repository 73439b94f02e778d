//! Source buffer wrapping the scanner input.
//!
//! The buffer borrows the input text and hands out [`Cursor`]s over it.
//! During construction it scans for encoding issues that JSON text should
//! not carry:
//! - a UTF-8 byte order mark (U+FEFF) at the very start
//! - NUL characters (U+0000) anywhere in the input
//!
//! Issues are recorded as [`EncodingIssue`] values. The scanner itself
//! ignores them (a BOM or NUL simply scans as an illegal character); the
//! integration layer (`jsonlex`) turns them into diagnostics.

use crate::Cursor;

/// UTF-8 encoding of U+FEFF.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Borrowed scanner input plus encoding issues found at construction.
#[derive(Clone, Debug)]
pub struct SourceBuffer<'a> {
    source: &'a str,
    /// Encoding issues detected during construction, in source order.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
///
/// Carries the kind, byte position, and byte length of the offending
/// character, so the integration layer can build a span without knowing
/// per-kind widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: usize,
    /// Byte length of the offending character.
    pub len: usize,
}

/// Kind of encoding issue detected in the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`EF BB BF`) at the start. JSON text must not begin with one.
    Utf8Bom,
    /// NUL character (U+0000) in the source.
    InteriorNull,
}

impl<'a> SourceBuffer<'a> {
    /// Wrap `source` and scan it for encoding issues.
    pub fn new(source: &'a str) -> Self {
        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source.as_bytes(), &mut encoding_issues);
        Self {
            source,
            encoding_issues,
        }
    }

    /// Returns the wrapped source text.
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Create a [`Cursor`] positioned at the first character.
    ///
    /// The cursor borrows the source text, not the buffer, so tokens
    /// produced from it may outlive the buffer.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.source)
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }

    /// Returns the encoding issue starting at byte `pos`, if any.
    pub fn encoding_issue_at(&self, pos: usize) -> Option<EncodingIssue> {
        self.encoding_issues
            .binary_search_by_key(&pos, |issue| issue.pos)
            .ok()
            .map(|i| self.encoding_issues[i])
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_bom(source, issues);
    detect_interior_nulls(source, issues);
}

fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(UTF8_BOM) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: UTF8_BOM.len(),
        });
    }
}

/// Detect NUL characters using `memchr` instead of a byte-at-a-time loop.
///
/// A `0x00` byte never occurs inside a multi-byte UTF-8 sequence, so every
/// hit is a real U+0000.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for pos in memchr::memchr_iter(0, source) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::InteriorNull,
            pos,
            len: 1,
        });
    }
}
