//! Compile-time ASCII class table
//!
//! Every byte maps to a [`CharClass`] bitset through a 256-entry table that
//! is computed by a `const fn`. The upper half of the table is empty, so a
//! byte lookup needs no range check. All queries are `const fn` and fold
//! into constants when their input is known at build time.

/// Bitset of primitive character classes for one ASCII value
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u16", into = "u16")
)]
pub struct CharClass(u16);

// SAFETY: `CharClass` is a transparent wrapper over `u16`; every bit pattern
// is a valid value and there is no padding.
unsafe impl bytemuck::Zeroable for CharClass {}
unsafe impl bytemuck::Pod for CharClass {}

const LOWER: u16 = 1 << 0;
const UPPER: u16 = 1 << 1;
const DIGIT: u16 = 1 << 2;
const HEX_LETTER: u16 = 1 << 3;
const BLANK: u16 = 1 << 4;
const ENDLINE: u16 = 1 << 5;
const PUNCT: u16 = 1 << 6;
const CNTRL: u16 = 1 << 7;
const UNDERSCORE: u16 = 1 << 8;
const SPACE_CHAR: u16 = 1 << 9;

const fn classify_byte(b: u8) -> u16 {
    match b {
        b'a'..=b'f' => LOWER | HEX_LETTER,
        b'g'..=b'z' => LOWER,
        b'A'..=b'F' => UPPER | HEX_LETTER,
        b'G'..=b'Z' => UPPER,
        b'0'..=b'9' => DIGIT,
        b'_' => PUNCT | UNDERSCORE,
        b' ' => BLANK | SPACE_CHAR,
        b'\n' => ENDLINE | CNTRL,
        b'\t' | 0x0b | 0x0c | b'\r' => BLANK | CNTRL,
        0x00..=0x1f | 0x7f => CNTRL,
        0x21..=0x7e => PUNCT,
        _ => 0,
    }
}

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::EMPTY; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = CharClass(classify_byte(i as u8));
        i += 1;
    }
    table
}

const TABLE: [CharClass; 256] = build_table();

// Single addressable copy backing `table_bits`.
static TABLE_STATIC: [CharClass; 256] = TABLE;

impl CharClass {
    /// No class bits set; the class of every non-ASCII value
    pub const EMPTY: Self = Self(0);
    /// `a`-`z`
    pub const LOWER: Self = Self(LOWER);
    /// `A`-`Z`
    pub const UPPER: Self = Self(UPPER);
    /// `0`-`9`
    pub const DIGIT: Self = Self(DIGIT);
    /// `a`-`f` and `A`-`F`
    pub const HEX_LETTER: Self = Self(HEX_LETTER);
    /// Line-internal whitespace: space, tab, vertical tab, form feed, carriage return
    pub const BLANK: Self = Self(BLANK);
    /// Line feed
    pub const ENDLINE: Self = Self(ENDLINE);
    /// Printable characters that are neither alphanumeric nor space
    pub const PUNCT: Self = Self(PUNCT);
    /// 0x00-0x1F and 0x7F
    pub const CNTRL: Self = Self(CNTRL);
    /// `_`
    pub const UNDERSCORE: Self = Self(UNDERSCORE);
    /// The space character itself
    pub const SPACE_CHAR: Self = Self(SPACE_CHAR);

    /// Letters, lower or upper
    pub const ALPHA: Self = Self(LOWER | UPPER);
    /// Letters and decimal digits
    pub const ALNUM: Self = Self(LOWER | UPPER | DIGIT);
    /// Hexadecimal digits
    pub const XDIGIT: Self = Self(DIGIT | HEX_LETTER);
    /// All whitespace, line feed included
    pub const SPACE: Self = Self(BLANK | ENDLINE);
    /// Printable characters other than space
    pub const GRAPH: Self = Self(LOWER | UPPER | DIGIT | PUNCT);
    /// Printable characters, space included
    pub const PRINT: Self = Self(LOWER | UPPER | DIGIT | PUNCT | SPACE_CHAR);
    /// Identifier characters, letters digits and underscore
    pub const IDENT: Self = Self(LOWER | UPPER | DIGIT | UNDERSCORE);
    /// Characters that may start an identifier
    pub const IDENT_START: Self = Self(LOWER | UPPER | UNDERSCORE);
    /// Whitespace or punctuation
    pub const SPACE_OR_PUNCT: Self = Self(BLANK | ENDLINE | PUNCT);

    /// Class of a byte; bytes 0x80 and above are [`CharClass::EMPTY`]
    #[inline]
    pub const fn of_byte(b: u8) -> Self {
        TABLE[b as usize]
    }

    /// Class of a codepoint; values 0x80 and above are [`CharClass::EMPTY`]
    #[inline]
    pub const fn of_u32(code: u32) -> Self {
        if code < 0x80 {
            TABLE[code as usize]
        } else {
            Self::EMPTY
        }
    }

    /// Class of a `char`
    #[inline]
    pub const fn of_char(ch: char) -> Self {
        Self::of_u32(ch as u32)
    }

    /// Raw bits of this class
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Build a class from raw bits, dropping bits with no meaning
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & 0x03ff)
    }

    /// Union of two classes
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if any bit of `mask` is set
    #[inline]
    pub const fn intersects(self, mask: Self) -> bool {
        self.0 & mask.0 != 0
    }

    /// True if every bit of `mask` is set
    pub const fn contains(self, mask: Self) -> bool {
        self.0 & mask.0 == mask.0
    }

    /// True for values outside ASCII
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `a`-`z`
    pub const fn is_lower(self) -> bool {
        self.intersects(Self::LOWER)
    }

    /// `A`-`Z`
    pub const fn is_upper(self) -> bool {
        self.intersects(Self::UPPER)
    }

    /// Any ASCII letter
    pub const fn is_alpha(self) -> bool {
        self.intersects(Self::ALPHA)
    }

    /// `0`-`9`
    pub const fn is_digit(self) -> bool {
        self.intersects(Self::DIGIT)
    }

    /// `0`-`9`, `a`-`f`, `A`-`F`
    pub const fn is_xdigit(self) -> bool {
        self.intersects(Self::XDIGIT)
    }

    /// Letter or decimal digit
    pub const fn is_alnum(self) -> bool {
        self.intersects(Self::ALNUM)
    }

    /// Any whitespace, line feed included
    pub const fn is_space(self) -> bool {
        self.intersects(Self::SPACE)
    }

    /// Whitespace other than line feed
    pub const fn is_blank(self) -> bool {
        self.intersects(Self::BLANK)
    }

    /// Printable, not alphanumeric, not space
    pub const fn is_punct(self) -> bool {
        self.intersects(Self::PUNCT)
    }

    /// 0x00-0x1F or 0x7F
    pub const fn is_cntrl(self) -> bool {
        self.intersects(Self::CNTRL)
    }

    /// Printable and not space
    pub const fn is_graph(self) -> bool {
        self.intersects(Self::GRAPH)
    }

    /// Printable, space included
    pub const fn is_print(self) -> bool {
        self.intersects(Self::PRINT)
    }

    /// Letter, digit or underscore
    pub const fn is_ident(self) -> bool {
        self.intersects(Self::IDENT)
    }

    /// Letter or underscore
    pub const fn is_ident_start(self) -> bool {
        self.intersects(Self::IDENT_START)
    }

    /// Line feed only
    pub const fn is_endline(self) -> bool {
        self.intersects(Self::ENDLINE)
    }

    /// Whitespace or punctuation
    pub const fn is_space_or_punct(self) -> bool {
        self.intersects(Self::SPACE_OR_PUNCT)
    }

    /// The full 256-entry table as raw bits, indexed by byte value
    pub fn table_bits() -> &'static [u16; 256] {
        bytemuck::cast_ref(&TABLE_STATIC)
    }
}

impl From<u16> for CharClass {
    fn from(bits: u16) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl From<CharClass> for u16 {
    fn from(class: CharClass) -> Self {
        class.bits()
    }
}

impl core::ops::BitOr for CharClass {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl core::ops::BitAnd for CharClass {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
