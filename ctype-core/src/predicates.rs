//! Classification predicates
//!
//! Each predicate accepts any [`CharValue`] and is total: negative values,
//! values at or above 0x80, and values beyond the Unicode range all return
//! `false`. For `const` contexts use the matching methods on
//! [`CharClass`](crate::CharClass).

use crate::CharValue;

/// Recognises a value in 0x00-0x7F.
#[inline]
pub fn is_ascii<C: CharValue>(ch: C) -> bool {
    ch.ascii().is_some()
}

/// Recognises a lowercase letter, `a-z`.
#[inline]
pub fn is_lower<C: CharValue>(ch: C) -> bool {
    ch.class().is_lower()
}

/// Recognises an uppercase letter, `A-Z`.
#[inline]
pub fn is_upper<C: CharValue>(ch: C) -> bool {
    ch.class().is_upper()
}

/// Recognises an alphabetic character, `a-zA-Z`.
#[inline]
pub fn is_alpha<C: CharValue>(ch: C) -> bool {
    ch.class().is_alpha()
}

/// Recognises a decimal digit, `0-9`.
#[inline]
pub fn is_digit<C: CharValue>(ch: C) -> bool {
    ch.class().is_digit()
}

/// Recognises a hexadecimal digit, `0-9a-fA-F`.
#[inline]
pub fn is_xdigit<C: CharValue>(ch: C) -> bool {
    ch.class().is_xdigit()
}

/// Recognises an alphanumeric character, `a-zA-Z0-9`.
#[inline]
pub fn is_alnum<C: CharValue>(ch: C) -> bool {
    ch.class().is_alnum()
}

/// Recognises space, tab, line feed, vertical tab, form feed, or carriage return.
#[inline]
pub fn is_space<C: CharValue>(ch: C) -> bool {
    ch.class().is_space()
}

/// Recognises whitespace that does not end a line.
///
/// Unlike C's `isblank`, which only accepts space and tab, this accepts every
/// [`is_space`] character except `'\n'`. Skipping blanks therefore consumes
/// all formatting whitespace on a line, `'\r'` included, and stops at the line
/// terminator.
#[inline]
pub fn is_blank<C: CharValue>(ch: C) -> bool {
    ch.class().is_blank()
}

/// Recognises a printable character that is neither alphanumeric nor space.
#[inline]
pub fn is_punct<C: CharValue>(ch: C) -> bool {
    ch.class().is_punct()
}

/// Recognises a control character, 0x00-0x1F or 0x7F.
#[inline]
pub fn is_cntrl<C: CharValue>(ch: C) -> bool {
    ch.class().is_cntrl()
}

/// Recognises a printable character other than space.
#[inline]
pub fn is_graph<C: CharValue>(ch: C) -> bool {
    ch.class().is_graph()
}

/// Recognises a printable character, space included.
#[inline]
pub fn is_print<C: CharValue>(ch: C) -> bool {
    ch.class().is_print()
}

/// Recognises an identifier character, `a-zA-Z0-9_`.
#[inline]
pub fn is_ident<C: CharValue>(ch: C) -> bool {
    ch.class().is_ident()
}

/// Recognises a character that may start an identifier, `a-zA-Z_`.
#[inline]
pub fn is_ident_start<C: CharValue>(ch: C) -> bool {
    ch.class().is_ident_start()
}

/// Recognises the line feed, `'\n'`.
#[inline]
pub fn is_endline<C: CharValue>(ch: C) -> bool {
    ch.class().is_endline()
}

/// Recognises whitespace or punctuation.
#[inline]
pub fn is_space_or_punct<C: CharValue>(ch: C) -> bool {
    ch.class().is_space_or_punct()
}
