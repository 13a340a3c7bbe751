//! Type-level character sets
//!
//! A [`CharSet`] names a fixed, ordered list of characters at the type
//! level, so membership tests can be specialized per set without passing
//! the list around. Declare one with [`char_set!`](crate::char_set).

use crate::CharValue;

/// A fixed set of characters known at compile time
pub trait CharSet {
    /// Members of the set, scanned in order
    const CHARS: &'static [char];

    /// Check if `ch` is a member of this set
    #[inline]
    fn contains<C: CharValue>(ch: C) -> bool {
        crate::is_any_of(ch, Self::CHARS)
    }
}

/// Declare a unit type implementing [`CharSet`]
///
/// ```
/// use ctype_core::{char_set, is_any_of_set};
///
/// char_set! {
///     /// Characters that open a bracket
///     pub struct OpenBrackets = ['(', '[', '{'];
/// }
///
/// assert!(is_any_of_set::<OpenBrackets, _>(b'['));
/// assert!(!is_any_of_set::<OpenBrackets, _>(b')'));
/// ```
#[macro_export]
macro_rules! char_set {
    ($(#[$meta:meta])* $vis:vis struct $name:ident = [$($ch:expr),* $(,)?];) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $name;

        impl $crate::CharSet for $name {
            const CHARS: &'static [char] = &[$($ch),*];
        }
    };
}
