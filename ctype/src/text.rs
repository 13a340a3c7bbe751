//! Helpers over whole strings built on the predicates
//!
//! These operate on complete `&str` values only; splitting text into tokens
//! is left to callers.

use ctype_core::{checked_digit_value, is_blank, is_ident, is_ident_start, CtypeError, Result};

/// Strip leading line-internal whitespace, never consuming a line feed
pub fn trim_blank_start(text: &str) -> &str {
    text.trim_start_matches(is_blank::<char>)
}

/// Strip trailing line-internal whitespace, never consuming a line feed
pub fn trim_blank_end(text: &str) -> &str {
    text.trim_end_matches(is_blank::<char>)
}

/// Check if `text` is a non-empty identifier, `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn is_ident_str(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => is_ident_start(first) && chars.all(is_ident::<char>),
        None => false,
    }
}

/// Parse a hexadecimal number without prefix or sign
pub fn parse_hex_u32(text: &str) -> Result<u32> {
    if text.is_empty() {
        return Err(CtypeError::NotADigit);
    }

    let mut result: u32 = 0;

    for ch in text.chars() {
        let digit = u32::from(checked_digit_value(ch, 16)?);

        result = result
            .checked_mul(16)
            .and_then(|value| value.checked_add(digit))
            .ok_or(CtypeError::Overflow)?;
    }

    Ok(result)
}
