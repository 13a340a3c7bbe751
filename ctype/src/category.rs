//! Primary character categories
//!
//! Where the predicates overlap (a tab is both space and control, `_` is both
//! punctuation and identifier), a [`Category`] picks exactly one class per
//! value so that text can be partitioned.

use core::str::FromStr;

use ctype_core::{CharValue, CtypeError};

/// The single primary class of a character value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum Category {
    /// `a`-`z`
    Lower = 0,
    /// `A`-`Z`
    Upper = 1,
    /// Any letter; only produced when case folding is enabled
    Alpha = 2,
    /// `0`-`9`
    Digit = 3,
    /// Printable, not alphanumeric, not space
    Punct = 4,
    /// Control characters that are not whitespace
    Cntrl = 5,
    /// Whitespace, and line feed when endlines are not split out
    Space = 6,
    /// Line feed
    Endline = 7,
    /// Negative values and values at or above 0x80
    NonAscii = 8,
}

impl Category {
    /// Number of categories
    pub const COUNT: usize = 9;

    /// Every category in discriminant order
    pub const ALL: [Category; Self::COUNT] = [
        Category::Lower,
        Category::Upper,
        Category::Alpha,
        Category::Digit,
        Category::Punct,
        Category::Cntrl,
        Category::Space,
        Category::Endline,
        Category::NonAscii,
    ];

    /// Category of a value with line feed split out and case kept
    pub fn of<C: CharValue>(ch: C) -> Self {
        let class = ch.class();
        if class.is_empty() {
            Category::NonAscii
        } else if class.is_endline() {
            Category::Endline
        } else if class.is_space() {
            Category::Space
        } else if class.is_lower() {
            Category::Lower
        } else if class.is_upper() {
            Category::Upper
        } else if class.is_digit() {
            Category::Digit
        } else if class.is_cntrl() {
            Category::Cntrl
        } else {
            Category::Punct
        }
    }

    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Category::Lower),
            1 => Some(Category::Upper),
            2 => Some(Category::Alpha),
            3 => Some(Category::Digit),
            4 => Some(Category::Punct),
            5 => Some(Category::Cntrl),
            6 => Some(Category::Space),
            7 => Some(Category::Endline),
            8 => Some(Category::NonAscii),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Lower => "lower",
            Category::Upper => "upper",
            Category::Alpha => "alpha",
            Category::Digit => "digit",
            Category::Punct => "punct",
            Category::Cntrl => "cntrl",
            Category::Space => "space",
            Category::Endline => "endline",
            Category::NonAscii => "non_ascii",
        }
    }

    /// Check if a value belongs to this category under the default rules
    pub fn matches<C: CharValue>(self, ch: C) -> bool {
        match self {
            Category::Alpha => ch.class().is_alpha(),
            other => Category::of(ch) == other,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = CtypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or(CtypeError::UnknownCategory)
    }
}
