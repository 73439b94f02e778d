use super::*;

#[test]
fn malformed_keyword_construction() {
    let span = Span::new(0, 3);
    let err = LexError::malformed_keyword(span, "null", Some('x'));
    assert_eq!(err.span, span);
    assert_eq!(
        err.kind,
        LexErrorKind::MalformedKeyword {
            expected: "null",
            found: Some('x')
        }
    );
    assert_eq!(err.context, LexErrorContext::InsideKeyword { expected: "null" });
    let fix = err.suggestions[0].replacement.as_ref().unwrap();
    assert_eq!(fix.text, "null");
    assert_eq!(fix.span, span);
}

#[test]
fn unterminated_string_construction() {
    let span = Span::new(10, 15);
    let err = LexError::unterminated_string(span);
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.context, LexErrorContext::InsideString { start: 10 });
    assert!(!err.suggestions.is_empty());
}

#[test]
fn control_char_suggests_escape() {
    let err = LexError::control_char_in_string(Span::new(0, 3), '\n');
    let fix = err.suggestions[0].replacement.as_ref().unwrap();
    assert_eq!(fix.span, Span::new(3, 4));
    assert_eq!(fix.text, r"\n");
}

#[test]
fn control_char_without_short_escape_uses_unicode_escape() {
    assert_eq!(escape_control('\u{1}'), r"\u0001");
    assert_eq!(escape_control('\u{7f}'), r"\u007f");
    assert_eq!(escape_control('\u{85}'), r"\u0085");
    assert_eq!(escape_control('\t'), r"\t");
    assert_eq!(escape_control('\u{8}'), r"\b");
}

#[test]
fn unexpected_semicolon_suggests_colon() {
    let span = Span::new(4, 5);
    let err = LexError::unexpected_char(span, ';');
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { found: ';' });
    let fix = err.suggestions[0].replacement.as_ref().unwrap();
    assert_eq!(fix.text, ":");
}

#[test]
fn unexpected_char_suggests_removal() {
    let span = Span::new(0, 1);
    let err = LexError::unexpected_char(span, 'x');
    assert_eq!(err.context, LexErrorContext::TopLevel);
    let fix = err.suggestions[0].replacement.as_ref().unwrap();
    assert_eq!(fix.text, "");
    assert_eq!(fix.span, span);
}

#[test]
fn encoding_issue_conversion() {
    let bom = LexError::from_encoding_issue(EncodingIssue {
        kind: EncodingIssueKind::Utf8Bom,
        pos: 0,
        len: 3,
    });
    assert_eq!(bom.kind, LexErrorKind::ByteOrderMark);
    assert_eq!(bom.span, Span::new(0, 3));

    let nul = LexError::from_encoding_issue(EncodingIssue {
        kind: EncodingIssueKind::InteriorNull,
        pos: 7,
        len: 1,
    });
    assert_eq!(nul.kind, LexErrorKind::InteriorNull);
    assert_eq!(nul.span, Span::new(7, 8));
}

// === Display ===

#[test]
fn display_messages() {
    let err = LexError::malformed_keyword(Span::new(0, 3), "true", Some('x'));
    assert_eq!(
        err.to_string(),
        "malformed keyword: expected `true`, found 'x' at 0..3"
    );

    let err = LexError::malformed_keyword(Span::new(0, 3), "null", None);
    assert_eq!(
        err.kind.to_string(),
        "malformed keyword: expected `null`, found end of input"
    );

    let err = LexError::unexpected_char(Span::new(2, 3), '@');
    assert_eq!(err.to_string(), "unexpected character '@' at 2..3");
}

#[test]
fn is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = LexError::unterminated_string(Span::new(0, 1));
    assert_error(&err);
    assert_error(&err.kind);
}
