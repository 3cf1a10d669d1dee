//! Unicode support shared by the lexer and the diagnostic renderer.
//!
//! - [`utf8`] - a narrow UTF-8 codec for single codepoints
//! - [`interval`] - closed codepoint intervals and membership tests
//! - [`width`] - terminal display width of codepoints and byte strings

pub mod interval;
pub mod utf8;
pub mod width;

pub use interval::{is_in_range, is_in_sorted_range, is_sorted, Interval};
pub use utf8::{decode, encode, encoded_len, MAX_CODEPOINT};
pub use width::{codepoint_width, display_width};
