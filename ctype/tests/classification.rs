use ctype::{
    digit_value, is_alnum, is_alpha, is_ascii, is_blank, is_cntrl, is_digit, is_endline, is_graph,
    is_ident, is_lower, is_print, is_punct, is_space, is_space_or_punct, is_upper, is_xdigit,
    to_lower, to_upper, Category, CharValue, Classifier,
};
use rand::Rng;

/// One letter per ASCII value, 16 values per line:
/// c = cntrl, s = space, n = endline, p = punct, d = digit, u = upper, l = lower
const REFERENCE: [&str; 8] = [
    "cccccccccsnssscc",
    "cccccccccccccccc",
    "sppppppppppppppp",
    "ddddddddddpppppp",
    "puuuuuuuuuuuuuuu",
    "uuuuuuuuuuuppppp",
    "plllllllllllllll",
    "lllllllllllppppc",
];

fn reference_category(code: u8) -> Category {
    let line = REFERENCE[(code / 16) as usize].as_bytes();
    match line[(code % 16) as usize] {
        b'c' => Category::Cntrl,
        b's' => Category::Space,
        b'n' => Category::Endline,
        b'p' => Category::Punct,
        b'd' => Category::Digit,
        b'u' => Category::Upper,
        b'l' => Category::Lower,
        other => panic!("bad reference entry {other}"),
    }
}

fn assert_no_class<C: CharValue + std::fmt::Debug>(ch: C) {
    assert!(!is_ascii(ch), "{ch:?}");
    assert!(!is_lower(ch), "{ch:?}");
    assert!(!is_upper(ch), "{ch:?}");
    assert!(!is_alpha(ch), "{ch:?}");
    assert!(!is_digit(ch), "{ch:?}");
    assert!(!is_xdigit(ch), "{ch:?}");
    assert!(!is_alnum(ch), "{ch:?}");
    assert!(!is_space(ch), "{ch:?}");
    assert!(!is_blank(ch), "{ch:?}");
    assert!(!is_punct(ch), "{ch:?}");
    assert!(!is_cntrl(ch), "{ch:?}");
    assert!(!is_graph(ch), "{ch:?}");
    assert!(!is_print(ch), "{ch:?}");
    assert!(!is_ident(ch), "{ch:?}");
    assert!(!is_endline(ch), "{ch:?}");
    assert!(!is_space_or_punct(ch), "{ch:?}");
    assert_eq!(Category::of(ch), Category::NonAscii);
    assert_eq!(digit_value(ch), 0);
}

#[test]
fn test_partition_matches_reference_table() {
    for code in 0..0x80u8 {
        let expected = reference_category(code);
        assert_eq!(Category::of(code), expected, "code {code:#04x}");
        assert_eq!(Category::of(code as char), expected, "char {code:#04x}");
        assert_eq!(Category::of(code as i8), expected, "i8 {code:#04x}");
        assert_eq!(Category::of(u32::from(code)), expected, "u32 {code:#04x}");

        let exclusive = [
            is_lower(code),
            is_upper(code),
            is_digit(code),
            is_punct(code),
            is_endline(code),
            is_blank(code),
            is_cntrl(code) && !is_space(code),
        ];
        assert_eq!(
            exclusive.iter().filter(|&&hit| hit).count(),
            1,
            "code {code:#04x}"
        );
    }
}

#[test]
fn test_predicates_agree_with_core_ascii_methods() {
    for b in 0..=0xffu8 {
        assert_eq!(is_lower(b), b.is_ascii_lowercase(), "{b:#04x}");
        assert_eq!(is_upper(b), b.is_ascii_uppercase(), "{b:#04x}");
        assert_eq!(is_alpha(b), b.is_ascii_alphabetic(), "{b:#04x}");
        assert_eq!(is_digit(b), b.is_ascii_digit(), "{b:#04x}");
        assert_eq!(is_xdigit(b), b.is_ascii_hexdigit(), "{b:#04x}");
        assert_eq!(is_alnum(b), b.is_ascii_alphanumeric(), "{b:#04x}");
        assert_eq!(is_punct(b), b.is_ascii_punctuation(), "{b:#04x}");
        assert_eq!(is_graph(b), b.is_ascii_graphic(), "{b:#04x}");
        assert_eq!(is_cntrl(b), b.is_ascii_control(), "{b:#04x}");
        assert_eq!(is_print(b), b.is_ascii_graphic() || b == b' ', "{b:#04x}");
        // `is_ascii_whitespace` leaves out vertical tab, so spell the set out.
        assert_eq!(
            is_space(b),
            matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'),
            "{b:#04x}"
        );
        assert_eq!(is_blank(b), is_space(b) && b != b'\n', "{b:#04x}");
        assert_eq!(is_ident(b), b.is_ascii_alphanumeric() || b == b'_', "{b:#04x}");
        assert_eq!(is_space_or_punct(b), is_space(b) || is_punct(b), "{b:#04x}");
    }
}

#[test]
fn test_out_of_range_boundaries() {
    assert_no_class(0x80u8);
    assert_no_class(0xffu8);
    assert_no_class(-1i8);
    assert_no_class(i8::MIN);
    assert_no_class(-1i32);
    assert_no_class(0x110000u32);
    assert_no_class(u32::MAX);
    assert_no_class(u64::MAX);
    assert_no_class(i64::MIN);
    assert_no_class('\u{80}');
    assert_no_class(char::MAX);
}

#[test]
fn test_random_out_of_range_values() {
    let mut rng = rand::thread_rng();
    for _ in 0..2_000 {
        assert_no_class(rng.gen_range(0x80..=0xffu8));
        assert_no_class(rng.gen_range(i8::MIN..0));
        assert_no_class(rng.gen_range(0x80..=u32::MAX));
        assert_no_class(rng.gen_range(i32::MIN..0));
        assert_no_class(rng.gen_range(0x80..=u64::MAX));
        assert_no_class(rng.gen_range(i64::MIN..0));
        assert_no_class(rng.gen_range(0x80u16..=u16::MAX));
    }
}

#[test]
fn test_hello_world_scenario() {
    use Category::*;

    let categories = Classifier::default().classify_str("Hello, 123 \n");
    assert_eq!(
        categories,
        vec![Upper, Lower, Lower, Lower, Lower, Punct, Space, Digit, Digit, Digit, Space, Endline]
    );
    assert!(is_space('\n') && is_endline('\n'));
}

#[test]
fn test_digit_values_through_every_width() {
    for (value, ch) in "0123456789abcdef".chars().enumerate() {
        let value = value as u8;
        assert_eq!(digit_value(ch), value);
        assert_eq!(digit_value(ch as u8), value);
        assert_eq!(digit_value(ch as u32 as i64), value);
        assert_eq!(digit_value(ch.to_ascii_uppercase()), value);
    }
    for b in 0..=0xffu8 {
        if !b.is_ascii_hexdigit() {
            assert_eq!(digit_value(b), 0, "{b:#04x}");
        }
    }
}

#[test]
fn test_case_conversion_round_trip() {
    for b in 0..=0xffu8 {
        if b.is_ascii_alphabetic() {
            assert_eq!(to_lower(to_upper(b)), to_lower(b));
            assert_eq!(to_lower(b), b.to_ascii_lowercase());
            assert_eq!(to_upper(b), b.to_ascii_uppercase());
        } else {
            assert_eq!(to_lower(b), b);
            assert_eq!(to_upper(b), b);
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_char_class_deserialize_drops_unknown_bits() {
    let class: ctype::CharClass = serde_json::from_str("65535").unwrap();
    assert_eq!(class.bits(), 0x03ff);

    let digit = ctype::CharClass::of_char('7');
    let json = serde_json::to_string(&digit).unwrap();
    assert_eq!(json, digit.bits().to_string());
    assert_eq!(serde_json::from_str::<ctype::CharClass>(&json).unwrap(), digit);
}
