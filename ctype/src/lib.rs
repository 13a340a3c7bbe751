//! ctype - Total ASCII character classification
//!
//! This library provides `<ctype.h>`-style character predicates that are
//! defined for every input, plus tools for partitioning text into
//! categories.
//!
//! ## Architecture
//!
//! ctype follows a core/layer separation:
//!
//! - **ctype-core**: `no_std` predicates, the compile-time class table,
//!   combinators and conversions (no allocation, no I/O)
//! - **ctype**: categories, configurable classification of strings, the
//!   ASCII reference table and string helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use ctype::{Category, Classifier, ClassifyConfig, is_blank, is_any_of};
//!
//! let classifier = Classifier::new(ClassifyConfig::default());
//! let categories = classifier.classify_str("Hi, 42\n");
//! assert_eq!(categories[0], Category::Upper);
//! assert_eq!(categories[6], Category::Endline);
//!
//! assert!(is_blank('\r'));
//! assert!(!is_blank('\n'));
//! assert!(is_any_of('l', &['l', 'o']));
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: negative values and values at or above 0x80 belong to no
//!   class; nothing panics
//! - **No sign extension**: a negative `i8` never aliases an ASCII byte
//! - **Const**: [`CharClass`] queries are `const fn`
//! - **Narrow case mapping**: [`to_lower`]/[`to_upper`] only accept byte types

// Re-export the core classification surface
pub use ctype_core::{
    // Inputs
    CharSet, CharValue, NarrowChar,
    // Class table
    CharClass,
    // Predicates
    is_alnum, is_alpha, is_ascii, is_blank, is_cntrl, is_digit, is_endline, is_graph, is_ident,
    is_ident_start, is_lower, is_print, is_punct, is_space, is_space_or_punct, is_upper,
    is_xdigit,
    // Combinators
    and, any_of, equal_to, is_alnum_or_any_of, is_always_false, is_any_of, is_any_of_set,
    is_digit_or_any_of, is_equal_to, is_float, is_none_of, is_none_of_set, is_punct_and_none_of,
    is_space_or_any_of, none_of, not, or, set_contains, FLOAT_EXTRA,
    // Conversions
    checked_digit_value, digit_value, digit_value_byte, to_lower, to_lower_byte, to_upper,
    to_upper_byte,
    // Error handling
    CtypeError, Result,
    // Macros
    char_set,
};

pub mod category;
pub mod classifier;
pub mod reference;
pub mod text;

pub use category::Category;
pub use classifier::{CategoryCounts, Classifier, ClassifyConfig};
pub use reference::{ClassRow, ReferenceTable};
pub use text::{is_ident_str, parse_hex_u32, trim_blank_end, trim_blank_start};
