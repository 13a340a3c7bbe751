//! Digit value extraction and ASCII case conversion

use crate::{CharClass, CharValue, CtypeError, NarrowChar, Result};

/// Numeric value of a hex digit byte, 0 for anything else
const fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Value of a decimal or hexadecimal digit
///
/// Returns 0-9 for `0`-`9` and 10-15 for `a`-`f` / `A`-`F`. Every other input,
/// including negative and non-ASCII values, returns 0. Guard with
/// [`is_digit`](crate::is_digit) or [`is_xdigit`](crate::is_xdigit) first when
/// 0 must be told apart from a non-digit, or use [`checked_digit_value`].
#[inline]
pub fn digit_value<C: CharValue>(ch: C) -> u8 {
    match ch.ascii() {
        Some(b) => hex_value(b),
        None => 0,
    }
}

/// `const` form of [`digit_value`] for bytes
pub const fn digit_value_byte(b: u8) -> u8 {
    hex_value(b)
}

/// Value of a digit in the given radix
///
/// Radix must be between 2 and 16. Letters are accepted in either case.
pub fn checked_digit_value<C: CharValue>(ch: C, radix: u32) -> Result<u8> {
    if !(2..=16).contains(&radix) {
        return Err(CtypeError::InvalidRadix);
    }

    let b = match ch.ascii() {
        Some(b) if CharClass::of_byte(b).is_xdigit() => b,
        _ => return Err(CtypeError::NotADigit),
    };

    let value = hex_value(b);
    if u32::from(value) >= radix {
        return Err(CtypeError::NotADigit);
    }

    Ok(value)
}

/// `const` lowercase mapping for bytes
#[inline]
pub const fn to_lower_byte(b: u8) -> u8 {
    if CharClass::of_byte(b).is_upper() {
        b | 0x20
    } else {
        b
    }
}

/// `const` uppercase mapping for bytes
#[inline]
pub const fn to_upper_byte(b: u8) -> u8 {
    if CharClass::of_byte(b).is_lower() {
        b & !0x20
    } else {
        b
    }
}

/// Map `A`-`Z` to `a`-`z`; identity for every other value
///
/// Only narrow types are accepted, see [`NarrowChar`].
///
/// ```
/// use ctype_core::to_lower;
///
/// assert_eq!(to_lower(b'A'), b'a');
/// assert_eq!(to_lower(b'A' as i8), b'a' as i8);
/// assert_eq!(to_lower(0xC1u8), 0xC1);
/// ```
///
/// Wide codepoints are rejected at compile time:
///
/// ```compile_fail
/// use ctype_core::to_lower;
///
/// let _ = to_lower(0x41u32);
/// ```
///
/// ```compile_fail
/// use ctype_core::to_lower;
///
/// let _ = to_lower('A');
/// ```
#[inline]
pub fn to_lower<C: NarrowChar>(ch: C) -> C {
    ch.to_lower()
}

/// Map `a`-`z` to `A`-`Z`; identity for every other value
///
/// Only narrow types are accepted, see [`NarrowChar`].
///
/// ```
/// use ctype_core::to_upper;
///
/// assert_eq!(to_upper(b'a'), b'A');
/// assert_eq!(to_upper(b'a' as i8), b'A' as i8);
/// assert_eq!(to_upper(-1i8), -1);
/// ```
///
/// Wide codepoints are rejected at compile time:
///
/// ```compile_fail
/// use ctype_core::to_upper;
///
/// let _ = to_upper('a');
/// ```
///
/// ```compile_fail
/// use ctype_core::to_upper;
///
/// let _ = to_upper(0x61u16);
/// ```
#[inline]
pub fn to_upper<C: NarrowChar>(ch: C) -> C {
    ch.to_upper()
}
