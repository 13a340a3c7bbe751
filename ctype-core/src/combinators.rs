//! Set membership and predicate combinators
//!
//! Sets are small, fixed, ordered lists of `char` and membership is a
//! short-circuiting linear scan. Membership compares codepoints exactly; it
//! is not limited to ASCII. A negative input has no codepoint and belongs to
//! no set.
//!
//! The derived combinators evaluate their base predicate first and only scan
//! the set when it fails (or, for [`is_punct_and_none_of`], when it holds).

use crate::{is_alnum, is_digit, is_punct, is_space, CharSet, CharValue};

/// Characters accepted by [`is_float`] in addition to digits
pub const FLOAT_EXTRA: &[char] = &['+', '-', '.', 'E', 'e'];

/// Always returns `false`
///
/// Identity element for an optional predicate: pass it where a predicate is
/// required but nothing should match.
#[inline]
pub fn is_always_false<C: CharValue>(_ch: C) -> bool {
    false
}

/// Check if `ch` has the same codepoint as `value`
#[inline]
pub fn is_equal_to<C: CharValue>(ch: C, value: char) -> bool {
    ch.code() == Some(value as u32)
}

/// Check if `code` appears in `set`
///
/// Usable in `const` contexts.
pub const fn set_contains(set: &[char], code: u32) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] as u32 == code {
            return true;
        }
        i += 1;
    }
    false
}

/// Check if `ch` is one of the characters in `set`
#[inline]
pub fn is_any_of<C: CharValue>(ch: C, set: &[char]) -> bool {
    match ch.code() {
        Some(code) => set_contains(set, code),
        None => false,
    }
}

/// Check if `ch` is none of the characters in `set`
#[inline]
pub fn is_none_of<C: CharValue>(ch: C, set: &[char]) -> bool {
    !is_any_of(ch, set)
}

/// [`is_any_of`] with the set fixed by a [`CharSet`] type
#[inline]
pub fn is_any_of_set<S: CharSet, C: CharValue>(ch: C) -> bool {
    S::contains(ch)
}

/// [`is_none_of`] with the set fixed by a [`CharSet`] type
#[inline]
pub fn is_none_of_set<S: CharSet, C: CharValue>(ch: C) -> bool {
    !S::contains(ch)
}

/// Whitespace, or one of `set`; [`is_space`] is checked first
#[inline]
pub fn is_space_or_any_of<C: CharValue>(ch: C, set: &[char]) -> bool {
    is_space(ch) || is_any_of(ch, set)
}

/// Alphanumeric, or one of `set`; [`is_alnum`] is checked first
#[inline]
pub fn is_alnum_or_any_of<C: CharValue>(ch: C, set: &[char]) -> bool {
    is_alnum(ch) || is_any_of(ch, set)
}

/// Decimal digit, or one of `set`; [`is_digit`] is checked first
#[inline]
pub fn is_digit_or_any_of<C: CharValue>(ch: C, set: &[char]) -> bool {
    is_digit(ch) || is_any_of(ch, set)
}

/// Punctuation that is not in `set`; `set` is only scanned when [`is_punct`] holds
#[inline]
pub fn is_punct_and_none_of<C: CharValue>(ch: C, set: &[char]) -> bool {
    is_punct(ch) && is_none_of(ch, set)
}

/// Recognises a character that can appear in a floating point literal,
/// `0-9+-.Ee`.
#[inline]
pub fn is_float<C: CharValue>(ch: C) -> bool {
    is_digit_or_any_of(ch, FLOAT_EXTRA)
}

/// Negate a predicate
pub fn not<C, P>(p: P) -> impl Fn(C) -> bool
where
    C: CharValue,
    P: Fn(C) -> bool,
{
    move |ch| !p(ch)
}

/// Conjunction of two predicates, `p` evaluated first
pub fn and<C, P, Q>(p: P, q: Q) -> impl Fn(C) -> bool
where
    C: CharValue,
    P: Fn(C) -> bool,
    Q: Fn(C) -> bool,
{
    move |ch| p(ch) && q(ch)
}

/// Disjunction of two predicates, `p` evaluated first
pub fn or<C, P, Q>(p: P, q: Q) -> impl Fn(C) -> bool
where
    C: CharValue,
    P: Fn(C) -> bool,
    Q: Fn(C) -> bool,
{
    move |ch| p(ch) || q(ch)
}

/// Predicate form of [`is_equal_to`]
pub fn equal_to<C: CharValue>(value: char) -> impl Fn(C) -> bool {
    move |ch| is_equal_to(ch, value)
}

/// Predicate form of [`is_any_of`]
pub fn any_of<C: CharValue>(set: &[char]) -> impl Fn(C) -> bool + '_ {
    move |ch| is_any_of(ch, set)
}

/// Predicate form of [`is_none_of`]
pub fn none_of<C: CharValue>(set: &[char]) -> impl Fn(C) -> bool + '_ {
    move |ch| is_none_of(ch, set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_alpha, is_ident};

    #[test]
    fn test_always_false() {
        assert!(!is_always_false('a'));
        assert!(!is_always_false(0u8));
        assert!(!is_always_false(-1i64));
    }

    #[test]
    fn test_equal_to() {
        assert!(is_equal_to('#', '#'));
        assert!(is_equal_to(b'#', '#'));
        assert!(!is_equal_to('#', '&'));
        assert!(is_equal_to('é', 'é'));
        assert!(!is_equal_to(-35i32, '#'));
    }

    #[test]
    fn test_any_of() {
        assert!(is_any_of('l', &['l', 'o']));
        assert!(is_any_of(b'o', &['l', 'o']));
        assert!(!is_any_of('x', &['l', 'o']));
        assert!(!is_any_of('l', &[]));
        assert!(!is_any_of(-1i32, &['l', 'o']));
    }

    #[test]
    fn test_none_of() {
        assert!(is_none_of('x', &['l', 'o']));
        assert!(!is_none_of('l', &['l', 'o']));
        assert!(is_none_of(-1i32, &['l', 'o']));
    }

    #[test]
    fn test_derived() {
        assert!(!is_punct_and_none_of('#', &['#', '&']));
        assert!(!is_punct_and_none_of('&', &['#', '&']));
        assert!(is_punct_and_none_of('!', &['#', '&']));
        assert!(!is_punct_and_none_of('a', &['#', '&']));

        assert!(is_space_or_any_of('\n', &['#']));
        assert!(is_space_or_any_of('#', &['#']));
        assert!(!is_space_or_any_of('a', &['#']));

        assert!(is_alnum_or_any_of('z', &['-']));
        assert!(is_alnum_or_any_of('-', &['-']));
        assert!(!is_alnum_or_any_of('+', &['-']));

        assert!(is_digit_or_any_of('3', &['.']));
        assert!(is_digit_or_any_of('.', &['.']));
        assert!(!is_digit_or_any_of('a', &['.']));
    }

    #[test]
    fn test_float_is_digit_based() {
        for ch in "0123456789+-.Ee".chars() {
            assert!(is_float(ch), "{ch:?}");
        }
        // Letters other than the exponent marker are rejected.
        assert!(!is_float('a'));
        assert!(!is_float('x'));
        assert!(!is_float('_'));
    }

    crate::char_set! {
        struct HashAmp = ['#', '&'];
    }

    #[test]
    fn test_type_level_sets() {
        assert!(is_any_of_set::<HashAmp, _>('#'));
        assert!(!is_any_of_set::<HashAmp, _>('!'));
        assert!(is_none_of_set::<HashAmp, _>('!'));
        assert!(!is_none_of_set::<HashAmp, _>(b'&'));
    }

    #[test]
    fn test_closure_combinators() {
        let ident_or_dash = or(is_ident::<u8>, equal_to::<u8>('-'));
        assert!(ident_or_dash(b'a'));
        assert!(ident_or_dash(b'-'));
        assert!(!ident_or_dash(b'+'));

        let consonant = and(is_alpha::<char>, none_of::<char>(&['a', 'e', 'i', 'o', 'u']));
        assert!(consonant('b'));
        assert!(!consonant('e'));
        assert!(!consonant('1'));

        let not_space = not(is_space::<char>);
        assert!(not_space('x'));
        assert!(!not_space(' '));

        let brackets = any_of::<char>(&['(', ')']);
        assert!(brackets('(') && !brackets('['));
    }

    const HASH_IN_SET: bool = set_contains(&['#', '&'], '#' as u32);

    #[test]
    fn test_const_set_contains() {
        assert!(HASH_IN_SET);
        assert!(!set_contains(&[], 0));
    }
}
