//! Literal reference table of every ASCII value
//!
//! One row per value 0x00-0x7F listing the result of every predicate. The
//! table is the canonical record used to check the classification and can
//! be exported as JSON.

use ctype_core::{
    is_alnum, is_alpha, is_blank, is_cntrl, is_digit, is_endline, is_graph, is_ident, is_lower,
    is_print, is_punct, is_space, is_upper, is_xdigit, CharClass,
};

use crate::Category;

/// Predicate results for a single ASCII value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassRow {
    /// ASCII value
    pub code: u8,
    /// Primary category
    pub category: Category,
    /// Raw `CharClass` bits
    pub bits: u16,
    /// `is_lower`
    pub lower: bool,
    /// `is_upper`
    pub upper: bool,
    /// `is_alpha`
    pub alpha: bool,
    /// `is_digit`
    pub digit: bool,
    /// `is_xdigit`
    pub xdigit: bool,
    /// `is_alnum`
    pub alnum: bool,
    /// `is_space`
    pub space: bool,
    /// `is_blank`
    pub blank: bool,
    /// `is_punct`
    pub punct: bool,
    /// `is_cntrl`
    pub cntrl: bool,
    /// `is_graph`
    pub graph: bool,
    /// `is_print`
    pub print: bool,
    /// `is_ident`
    pub ident: bool,
    /// `is_endline`
    pub endline: bool,
}

impl ClassRow {
    /// Evaluate every predicate for `code`
    pub fn new(code: u8) -> Self {
        Self {
            code,
            category: Category::of(code),
            bits: CharClass::of_byte(code).bits(),
            lower: is_lower(code),
            upper: is_upper(code),
            alpha: is_alpha(code),
            digit: is_digit(code),
            xdigit: is_xdigit(code),
            alnum: is_alnum(code),
            space: is_space(code),
            blank: is_blank(code),
            punct: is_punct(code),
            cntrl: is_cntrl(code),
            graph: is_graph(code),
            print: is_print(code),
            ident: is_ident(code),
            endline: is_endline(code),
        }
    }
}

/// The 128-row ASCII reference table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceTable {
    rows: Vec<ClassRow>,
}

impl ReferenceTable {
    /// Build the table by evaluating every predicate on 0x00-0x7F
    pub fn build() -> Self {
        Self {
            rows: (0..0x80u8).map(ClassRow::new).collect(),
        }
    }

    /// All rows in code order
    pub fn rows(&self) -> &[ClassRow] {
        &self.rows
    }

    /// Row for one code, `None` outside ASCII
    pub fn row(&self, code: u8) -> Option<&ClassRow> {
        self.rows.get(code as usize)
    }

    /// Rows whose primary category is `category`
    pub fn rows_in(&self, category: Category) -> impl Iterator<Item = &ClassRow> + '_ {
        self.rows.iter().filter(move |row| row.category == category)
    }

    /// Serialize the table as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rows)
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::build()
    }
}
