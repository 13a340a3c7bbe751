//! Error types for the fallible conversion helpers
//!
//! Classification itself is total and never produces an error. Only the
//! checked digit conversions and category name parsing report failures.

/// Errors that can occur in checked conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtypeError {
    /// Name does not match any known category
    UnknownCategory,
    /// Character is not a digit in the requested radix
    NotADigit,
    /// Radix outside of 2..=16
    InvalidRadix,
    /// Accumulated value does not fit the target integer
    Overflow,
}

impl core::fmt::Display for CtypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            CtypeError::UnknownCategory => "Unknown character category",
            CtypeError::NotADigit => "Character is not a digit in the given radix",
            CtypeError::InvalidRadix => "Radix must be between 2 and 16",
            CtypeError::Overflow => "Numeric value overflow",
        };
        write!(f, "{msg}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CtypeError {}

/// Result type for checked conversions
pub type Result<T> = core::result::Result<T, CtypeError>;
