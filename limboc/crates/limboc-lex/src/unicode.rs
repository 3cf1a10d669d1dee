//! Character classification for the Limbo lexer.
//!
//! Identifiers are ASCII only: a letter or underscore followed by letters,
//! digits and underscores. The classes are interval tables so that they go
//! through the same checked binary search as the display-width tables.

use limboc_util::unicode::{decode, is_in_sorted_range};

limboc_util::interval_table! {
    /// Codepoints that may start an identifier.
    pub const IDENTIFIER_START = [
        (0x41, 0x5A), // A-Z
        (0x5F, 0x5F), // _
        (0x61, 0x7A), // a-z
    ];
}

limboc_util::interval_table! {
    /// Codepoints that may continue an identifier.
    pub const IDENTIFIER_REST = [
        (0x30, 0x39), // 0-9
        (0x41, 0x5A),
        (0x5F, 0x5F),
        (0x61, 0x7A),
    ];
}

/// Checks if a codepoint is valid as the start of an identifier.
///
/// # Example
///
/// ```
/// use limboc_lex::unicode::is_identifier_start;
///
/// assert!(is_identifier_start('a' as u32));
/// assert!(is_identifier_start('_' as u32));
/// assert!(!is_identifier_start('1' as u32));
/// assert!(!is_identifier_start('α' as u32));
/// ```
#[inline]
pub fn is_identifier_start(codepoint: u32) -> bool {
    is_in_sorted_range(codepoint, IDENTIFIER_START)
}

/// Checks if a codepoint is valid after the first one in an identifier.
#[inline]
pub fn is_identifier_rest(codepoint: u32) -> bool {
    is_in_sorted_range(codepoint, IDENTIFIER_REST)
}

/// Checks if a whole byte string is one identifier.
///
/// Returns false for an empty string or malformed UTF-8.
///
/// # Example
///
/// ```
/// use limboc_lex::unicode::is_identifier;
///
/// assert!(is_identifier(b"Command"));
/// assert!(is_identifier(b"_tmp2"));
/// assert!(!is_identifier(b"2fast"));
/// assert!(!is_identifier(b""));
/// assert!(!is_identifier(&[b'a', 0xFF]));
/// ```
pub fn is_identifier(bytes: &[u8]) -> bool {
    let mut position = 0;
    while position < bytes.len() {
        let Ok((codepoint, len)) = decode(&bytes[position..]) else {
            return false;
        };
        let valid = if position == 0 {
            is_identifier_start(codepoint)
        } else {
            is_identifier_rest(codepoint)
        };
        if !valid {
            return false;
        }
        position += len;
    }
    position > 0
}

/// Value of an ASCII digit or letter in the given radix.
///
/// Letters are case-insensitive, `a` through `z` standing for 10 through
/// 35. Returns `None` if the byte is not a digit of the radix.
///
/// # Example
///
/// ```
/// use limboc_lex::unicode::digit_value;
///
/// assert_eq!(digit_value(b'7', 8), Some(7));
/// assert_eq!(digit_value(b'8', 8), None);
/// assert_eq!(digit_value(b'F', 16), Some(15));
/// assert_eq!(digit_value(b'z', 36), Some(35));
/// assert_eq!(digit_value(b'g', 16), None);
/// ```
pub fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => u32::from(byte - b'0'),
        b'a'..=b'z' => u32::from(byte - b'a') + 10,
        b'A'..=b'Z' => u32::from(byte - b'A') + 10,
        _ => return None,
    };
    (value < radix).then_some(value)
}
