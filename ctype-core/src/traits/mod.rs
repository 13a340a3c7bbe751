//! Traits describing the inputs of the classification functions

pub mod char_set;
pub mod char_value;
pub mod narrow;

pub use char_set::CharSet;
pub use char_value::CharValue;
pub use narrow::NarrowChar;
