//! Input representations accepted by the classification functions
//!
//! Any primitive integer or `char` can be classified. Conversion to a
//! codepoint goes through `u32::try_from`, so negative values are rejected
//! before any widening happens and never alias an ASCII byte.

use crate::CharClass;

/// Trait for values that can be classified as characters
///
/// Implemented for every primitive integer type and for `char`. A value has
/// a codepoint when it is non-negative and fits in a `u32`; only codepoints
/// below 0x80 belong to any class.
pub trait CharValue: Copy {
    /// Codepoint of this value, or `None` if it is negative or wider than `u32`
    fn code(self) -> Option<u32>;

    /// The value as an ASCII byte, or `None` outside 0x00-0x7F
    #[inline]
    fn ascii(self) -> Option<u8> {
        match self.code() {
            Some(code) if code < 0x80 => Some(code as u8),
            _ => None,
        }
    }

    /// Class bits of this value; empty outside ASCII
    #[inline]
    fn class(self) -> CharClass {
        match self.code() {
            Some(code) => CharClass::of_u32(code),
            None => CharClass::EMPTY,
        }
    }
}

macro_rules! impl_char_value_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CharValue for $ty {
                #[inline]
                fn code(self) -> Option<u32> {
                    u32::try_from(self).ok()
                }
            }
        )*
    };
}

impl_char_value_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl CharValue for char {
    #[inline]
    fn code(self) -> Option<u32> {
        Some(self as u32)
    }

    #[inline]
    fn class(self) -> CharClass {
        CharClass::of_char(self)
    }
}
