//! Character classification predicates.
//!
//! Pure functions of one or more characters. These are the leaf building
//! blocks of the scanner; none of them look at scanner state.

/// Opening and closing delimiter of a string lexeme.
pub const DOUBLE_QUOTE: char = '"';
/// Escape introducer inside a string lexeme.
pub const BACKSLASH: char = '\\';
/// Decimal point inside a number lexeme.
pub const FRACTION_POINT: char = '.';

/// Returns `true` for the ASCII digits `0` through `9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` for `+` and `-`.
#[inline]
pub fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Returns `true` for the exponent markers `e` and `E`.
#[inline]
pub fn is_exponent(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

/// Returns `true` for the decimal point.
#[inline]
pub fn is_fraction_point(c: char) -> bool {
    c == FRACTION_POINT
}

/// Returns `true` for the four JSON whitespace characters: space, tab,
/// line feed, and carriage return.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[inline]
pub fn is_double_quote(c: char) -> bool {
    c == DOUBLE_QUOTE
}

#[inline]
pub fn is_backslash(c: char) -> bool {
    c == BACKSLASH
}

/// Returns `true` for control characters: the C0 range (U+0000 to U+001F),
/// DEL (U+007F), and the C1 range (U+0080 to U+009F).
#[inline]
pub fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}')
}

/// Returns `true` for the letters that may follow a backslash in a string:
/// `"`, `\`, `/`, `b`, `f`, `n`, `r`, `t`, and `u`.
#[inline]
pub fn is_escapable(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')
}

/// Returns `true` if `c` starts a number lexeme.
#[inline]
pub fn is_number_lead(c: char) -> bool {
    is_digit(c) || is_sign(c)
}

/// Returns `true` if `c` continues a number lexeme.
///
/// Accepts digits, signs, exponent markers, and the decimal point in any
/// order. Positional validation belongs to whoever parses the number.
#[inline]
pub fn is_number_continue(c: char) -> bool {
    is_digit(c) || is_sign(c) || is_exponent(c) || is_fraction_point(c)
}

/// Returns `true` if `current` is still part of a string lexeme.
///
/// `next` is the character after `current` (`None` at end of input).
/// `escaped` is `true` when the previous character was a backslash that
/// started an escape sequence, which makes `current` the escaped letter.
///
/// A character ends the string when it is a control character, an
/// unescaped `"`, or a backslash that is not followed by an escapable
/// letter.
pub fn is_string_char(current: char, next: Option<char>, escaped: bool) -> bool {
    if is_control(current) {
        return false;
    }
    if escaped {
        return true;
    }
    if is_double_quote(current) {
        return false;
    }
    if is_backslash(current) {
        return next.is_some_and(is_escapable);
    }
    true
}
