#![no_std]

//! ctype core - total ASCII character classification
//!
//! This crate provides C `<ctype.h>`-style predicates that are safe for any
//! input. Every function accepts any primitive integer or `char`; values that
//! are negative or outside 0x00-0x7F belong to no class instead of invoking
//! undefined behavior. Classification is backed by a compile-time table and
//! is available as `const fn` through [`CharClass`].
//!
//! ```
//! use ctype_core::{is_blank, is_punct_and_none_of, digit_value, to_upper};
//!
//! assert!(is_blank('\r'));
//! assert!(!is_blank('\n'));
//! assert!(is_punct_and_none_of('!', &['#', '&']));
//! assert_eq!(digit_value('b'), 11);
//! assert_eq!(to_upper(b'x'), b'X');
//! assert!(!ctype_core::is_alpha(-63i8));
//! ```

#[cfg(feature = "std")]
extern crate std;

pub mod class;
pub mod combinators;
pub mod convert;
pub mod error;
pub mod predicates;
pub mod traits;

pub use class::CharClass;
pub use combinators::*;
pub use convert::*;
pub use error::*;
pub use predicates::*;
pub use traits::{CharSet, CharValue, NarrowChar};
