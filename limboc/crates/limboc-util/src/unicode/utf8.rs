//! UTF-8 encoding and decoding of single codepoints.
//!
//! This is deliberately a narrow codec. The decoder classifies a sequence by
//! its lead byte and checks that every continuation byte has the
//! `10xxxxxx` shape, and nothing more: overlong encodings, encoded
//! surrogates (U+D800..U+DFFF) and lead bytes `0xF8..=0xFF` are decoded as
//! if they were well formed. The encoder likewise encodes surrogates like
//! any other three-byte codepoint. Callers that need full validation should
//! use [`std::str::from_utf8`].

use crate::error::{Utf8Error, Utf8Result};

/// The largest Unicode codepoint
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// The first byte of a two-byte codepoint is 110xxxxx
const TWO_BYTE_MASK: u8 = 0b1100_0000;
/// The first byte of a three-byte codepoint is 1110xxxx
const THREE_BYTE_MASK: u8 = 0b1110_0000;
/// The first byte of a four-byte codepoint is 11110xxx
const FOUR_BYTE_MASK: u8 = 0b1111_0000;
/// The later bytes of a codepoint are 10xxxxxx
const REST_MASK: u8 = 0b1000_0000;
/// The payload bits of a continuation byte
const DATA_MASK: u32 = 0b0011_1111;

/// Decode one codepoint from the start of `bytes`.
///
/// Returns the codepoint and the number of bytes it occupies. On failure
/// nothing is consumed; the caller's position stays where it was.
///
/// # Examples
///
/// ```
/// use limboc_util::unicode::decode;
///
/// assert_eq!(decode(b"A"), Ok((0x41, 1)));
/// assert_eq!(decode("é".as_bytes()), Ok((0xE9, 2)));
/// assert_eq!(decode("中".as_bytes()), Ok((0x4E2D, 3)));
/// assert_eq!(decode("😀".as_bytes()), Ok((0x1F600, 4)));
/// assert!(decode(&[0x80]).is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Utf8Result<(u32, usize)> {
    let lead = *bytes.first().ok_or(Utf8Error::Empty)?;

    if lead <= 0x7F {
        return Ok((u32::from(lead), 1));
    }

    let (len, mut codepoint) = if lead >= FOUR_BYTE_MASK {
        (4, u32::from(lead & 0b111))
    } else if lead >= THREE_BYTE_MASK {
        (3, u32::from(lead & 0b1111))
    } else if lead >= TWO_BYTE_MASK {
        (2, u32::from(lead & 0b1_1111))
    } else {
        return Err(Utf8Error::InvalidLeadByte { byte: lead });
    };

    for index in 1..len {
        let byte = *bytes.get(index).ok_or(Utf8Error::Truncated {
            expected: len,
            found: index,
        })?;
        if byte >> 6 != 0b10 {
            return Err(Utf8Error::InvalidContinuation { byte, index });
        }
        codepoint = (codepoint << 6) | (u32::from(byte) & DATA_MASK);
    }

    Ok((codepoint, len))
}

/// Number of bytes needed to encode a codepoint.
///
/// # Examples
///
/// ```
/// use limboc_util::unicode::encoded_len;
///
/// assert_eq!(encoded_len(0x7F), Ok(1));
/// assert_eq!(encoded_len(0x7FF), Ok(2));
/// assert_eq!(encoded_len(0xFFFF), Ok(3));
/// assert_eq!(encoded_len(0x10FFFF), Ok(4));
/// assert!(encoded_len(0x110000).is_err());
/// ```
pub fn encoded_len(codepoint: u32) -> Utf8Result<usize> {
    match codepoint {
        0..=0x7F => Ok(1),
        0x80..=0x7FF => Ok(2),
        0x800..=0xFFFF => Ok(3),
        0x10000..=MAX_CODEPOINT => Ok(4),
        _ => Err(Utf8Error::CodepointOutOfRange(codepoint)),
    }
}

/// Encode a codepoint into the front of `buffer`.
///
/// Returns the number of bytes written. Fails without writing anything if
/// the codepoint is above U+10FFFF or the buffer is too short to hold it.
///
/// # Examples
///
/// ```
/// use limboc_util::unicode::encode;
///
/// let mut buffer = [0u8; 4];
/// assert_eq!(encode(0x20AC, &mut buffer), Ok(3));
/// assert_eq!(&buffer[..3], "€".as_bytes());
///
/// assert!(encode(0x20AC, &mut [0u8; 2]).is_err());
/// ```
pub fn encode(codepoint: u32, buffer: &mut [u8]) -> Utf8Result<usize> {
    let len = encoded_len(codepoint)?;
    if buffer.len() < len {
        return Err(Utf8Error::BufferTooSmall {
            needed: len,
            available: buffer.len(),
        });
    }

    let continuation = |shift: u32| REST_MASK | ((codepoint >> shift) & DATA_MASK) as u8;

    match len {
        1 => buffer[0] = codepoint as u8,
        2 => {
            buffer[0] = TWO_BYTE_MASK | (codepoint >> 6) as u8;
            buffer[1] = continuation(0);
        }
        3 => {
            buffer[0] = THREE_BYTE_MASK | (codepoint >> 12) as u8;
            buffer[1] = continuation(6);
            buffer[2] = continuation(0);
        }
        _ => {
            buffer[0] = FOUR_BYTE_MASK | (codepoint >> 18) as u8;
            buffer[1] = continuation(12);
            buffer[2] = continuation(6);
            buffer[3] = continuation(0);
        }
    }

    Ok(len)
}
