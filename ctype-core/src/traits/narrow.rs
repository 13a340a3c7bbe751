//! Case conversion for narrow character types
//!
//! Only byte-wide types implement [`NarrowChar`]. Wide codepoints are left
//! out on purpose: a codepoint above 0x7F must never be case-mapped, and
//! without an implementation the mistake is a compile error instead of
//! corrupted text.

use crate::convert::{to_lower_byte, to_upper_byte};

/// Trait for byte-wide character types that support ASCII case mapping
///
/// Implemented for `u8` and `i8` only.
///
/// ```compile_fail
/// use ctype_core::NarrowChar;
///
/// let _ = 0x41u32.to_lower();
/// ```
pub trait NarrowChar: Copy {
    /// Map `A`-`Z` to `a`-`z`, leaving every other value unchanged
    fn to_lower(self) -> Self;

    /// Map `a`-`z` to `A`-`Z`, leaving every other value unchanged
    fn to_upper(self) -> Self;
}

impl NarrowChar for u8 {
    #[inline]
    fn to_lower(self) -> Self {
        to_lower_byte(self)
    }

    #[inline]
    fn to_upper(self) -> Self {
        to_upper_byte(self)
    }
}

impl NarrowChar for i8 {
    #[inline]
    fn to_lower(self) -> Self {
        if self < 0 {
            self
        } else {
            to_lower_byte(self as u8) as i8
        }
    }

    #[inline]
    fn to_upper(self) -> Self {
        if self < 0 {
            self
        } else {
            to_upper_byte(self as u8) as i8
        }
    }
}
