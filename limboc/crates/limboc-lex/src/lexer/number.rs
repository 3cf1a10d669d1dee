//! Number literal lexing.
//!
//! This module handles integer, radix and real literals:
//!
//! - Decimal integer: `621`
//! - Radix integer: `16r20`, `2r1010`, `36rZZ` (the base is 2 to 36)
//! - Real: `420.69`, `.5`, `1e10`, `2.5e-3`
//! - Radix real: `16r1.8`, `8r1.4e1` (exponent digits are decimal)
//!
//! The scanner is a state machine that consumes bytes while they extend the
//! current state. The first byte that cannot is left for the next token, so
//! `16r1g` is the integer `1` followed by the identifier `g`.

use crate::error::{LexError, LexResult};
use crate::token::TokenValue;
use crate::unicode::digit_value;
use crate::Lexer;

/// Where the number scanner is within a literal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NumberState {
    /// Decimal digits
    Integer,
    /// Just after the `r` of a radix literal
    RadixChar,
    /// Digits of a radix literal
    Radix,
    /// Decimal digits after `.`
    Fraction,
    /// Radix digits after `.`
    FractionB,
    /// Just after `e`
    ExponentChar,
    /// Just after the sign of an exponent
    ExponentSign,
    /// Exponent digits
    Exponent,
}

impl Lexer<'_> {
    /// Lexes a number literal.
    ///
    /// A number starts with a digit, or with `.` followed by a digit.
    ///
    /// # Returns
    ///
    /// `None` if no number starts here, otherwise `TokenValue::Int` or
    /// `TokenValue::Real`.
    pub fn lex_number(&mut self) -> LexResult<Option<TokenValue>> {
        use NumberState::*;

        let start = self.cursor.position();
        let input = self.cursor.remaining();
        let (mut state, mut len) = match input {
            [b'0'..=b'9', ..] => (Integer, 1),
            [b'.', b'0'..=b'9', ..] => (Fraction, 1),
            _ => return Ok(None),
        };

        let mut radix: Option<u32> = None;
        let mut radix_char = 0;

        while let Some(&byte) = input.get(len) {
            let is_digit = radix.is_some_and(|radix| digit_value(byte, radix).is_some());
            state = match (state, byte) {
                (Integer, b'0'..=b'9') => Integer,
                (Integer, b'r' | b'R') => {
                    radix = Some(parse_radix(&input[..len]).ok_or(LexError::InvalidRadix {
                        span: self.span_at(start, start + len + 1),
                    })?);
                    radix_char = len;
                    RadixChar
                },
                (Integer, b'.') => Fraction,
                (RadixChar | Radix, b'.') => FractionB,
                (RadixChar | Radix, _) if is_digit => Radix,
                (Fraction, b'0'..=b'9') => Fraction,
                (FractionB, _) if is_digit => FractionB,
                (Integer | Fraction | FractionB, b'e' | b'E') => ExponentChar,
                (ExponentChar, b'+' | b'-') => ExponentSign,
                (ExponentChar | ExponentSign | Exponent, b'0'..=b'9') => Exponent,
                _ => break,
            };
            len += 1;
        }

        self.cursor.advance_bytes(len);
        let text = &input[..len];
        let span = self.token_span();

        let value = match (state, radix) {
            (Integer, None) => {
                TokenValue::Int(integer_value(text, 10).ok_or(LexError::IntegerOutOfRange { span })?)
            },
            (Radix, Some(radix)) => TokenValue::Int(
                integer_value(&text[radix_char + 1..], radix)
                    .ok_or(LexError::IntegerOutOfRange { span })?,
            ),
            (Fraction | Exponent, None) => TokenValue::Real(
                std::str::from_utf8(text)
                    .ok()
                    .and_then(|text| text.parse::<f64>().ok())
                    .ok_or(LexError::MalformedNumber { span })?,
            ),
            (FractionB | Exponent, Some(radix)) => {
                TokenValue::Real(radix_real(&text[radix_char + 1..], radix))
            },
            (RadixChar | ExponentChar | ExponentSign, _) => {
                return Err(LexError::MalformedNumber { span });
            },
            (state, radix) => {
                return Err(LexError::Internal(format!(
                    "number scanner stopped in state {:?} with radix {:?}",
                    state, radix
                )));
            },
        };

        Ok(Some(value))
    }
}

/// Parses the decimal base in front of `r`, accepting 2 through 36.
fn parse_radix(digits: &[u8]) -> Option<u32> {
    let radix = digits.iter().try_fold(0u32, |acc, &byte| {
        acc.checked_mul(10)?.checked_add(digit_value(byte, 10)?)
    })?;
    (2..=36).contains(&radix).then_some(radix)
}

/// Parses digits in `radix` as a 64-bit signed integer.
///
/// Returns `None` on overflow.
fn integer_value(digits: &[u8], radix: u32) -> Option<i64> {
    digits.iter().try_fold(0i64, |acc, &byte| {
        acc.checked_mul(i64::from(radix))?
            .checked_add(i64::from(digit_value(byte, radix)?))
    })
}

/// Evaluates the part of a radix real after `r`.
///
/// Integer and fraction digits accumulate into one mantissa, digit by
/// digit. The result is `mantissa * radix^(exponent - fraction_digits)`,
/// applied as repeated multiplication or division by the radix.
fn radix_real(digits: &[u8], radix: u32) -> f64 {
    let base = f64::from(radix);
    let mut mantissa = 0.0;
    let mut fraction_digits: i64 = 0;
    let mut in_fraction = false;
    let mut exponent: i64 = 0;
    let mut exponent_sign: i64 = 1;
    let mut in_exponent = false;

    for &byte in digits {
        if in_exponent {
            match byte {
                b'-' => exponent_sign = -1,
                b'+' => {},
                _ => {
                    let digit = i64::from(byte.wrapping_sub(b'0'));
                    exponent = exponent.saturating_mul(10).saturating_add(digit);
                },
            }
        } else if byte == b'.' {
            in_fraction = true;
        } else if let Some(digit) = digit_value(byte, radix) {
            mantissa = mantissa * base + f64::from(digit);
            if in_fraction {
                fraction_digits += 1;
            }
        } else {
            in_exponent = true;
        }
    }

    let scale = exponent.saturating_mul(exponent_sign).saturating_sub(fraction_digits);
    let mut value = mantissa;
    if scale >= 0 {
        for _ in 0..scale {
            if value == 0.0 || value.is_infinite() {
                break;
            }
            value *= base;
        }
    } else {
        for _ in 0..scale.unsigned_abs() {
            if value == 0.0 || value.is_infinite() {
                break;
            }
            value /= base;
        }
    }
    value
}
