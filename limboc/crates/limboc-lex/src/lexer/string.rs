//! String and character literal lexing.
//!
//! Both literal forms share one escape table:
//!
//! | escape | byte |
//! |--------|------|
//! | `\\`   | 0x5C |
//! | `\'`   | 0x27 |
//! | `\"`   | 0x22 |
//! | `\a`   | 0x07 |
//! | `\b`   | 0x08 |
//! | `\t`   | 0x09 |
//! | `\n`   | 0x0A |
//! | `\v`   | 0x0B |
//! | `\f`   | 0x0C |
//! | `\r`   | 0x0D |
//! | `\0`   | 0x00 |
//!
//! `\u` is rejected as not yet supported; any other escape is invalid.

use limboc_util::unicode::decode;

use crate::error::{LexError, LexResult};
use crate::token::TokenValue;
use crate::Lexer;

/// The byte an escape character stands for.
fn escape_byte(escape: u8) -> Option<u8> {
    Some(match escape {
        b'\\' => b'\\',
        b'\'' => b'\'',
        b'"' => b'"',
        b'a' => 0x07,
        b'b' => 0x08,
        b't' => b'\t',
        b'n' => b'\n',
        b'v' => 0x0B,
        b'f' => 0x0C,
        b'r' => b'\r',
        b'0' => 0x00,
        _ => return None,
    })
}

impl Lexer<'_> {
    /// Lexes a string literal.
    ///
    /// The closing quote is found first, skipping the byte after each
    /// backslash, and the body is then decoded into a new buffer. The body
    /// is kept as bytes; it need not be valid UTF-8.
    ///
    /// # Returns
    ///
    /// `None` if no string starts here, otherwise `TokenValue::Str`.
    pub fn lex_string(&mut self) -> LexResult<Option<TokenValue>> {
        let input = self.cursor.remaining();
        if input.first() != Some(&b'"') {
            return Ok(None);
        }

        let mut end = 1;
        loop {
            match input.get(end) {
                None | Some(b'\n') => {
                    return Err(LexError::UnterminatedString {
                        span: self.span_at(self.token_start, self.token_start),
                    });
                },
                Some(b'"') => break,
                // An escaped newline still ends the line
                Some(b'\\') if input.get(end + 1).is_some_and(|&next| next != b'\n') => end += 2,
                Some(b'\\') => end += 1,
                Some(_) => end += 1,
            }
        }

        let body = &input[1..end];
        let mut decoded = Vec::with_capacity(body.len());
        let mut i = 0;
        while i < body.len() {
            if body[i] == b'\\' {
                // The delimiter search guarantees a byte after the backslash
                decoded.push(self.decode_escape(body[i + 1], self.token_start + 1 + i)?);
                i += 2;
            } else {
                decoded.push(body[i]);
                i += 1;
            }
        }

        self.cursor.advance_bytes(end + 1);
        Ok(Some(TokenValue::Str(decoded)))
    }

    /// Lexes a character literal.
    ///
    /// The literal holds exactly one escape or one UTF-8 codepoint.
    ///
    /// # Returns
    ///
    /// `None` if no character literal starts here, otherwise
    /// `TokenValue::Int` with the codepoint.
    pub fn lex_char(&mut self) -> LexResult<Option<TokenValue>> {
        let input = self.cursor.remaining();
        if input.first() != Some(&b'\'') {
            return Ok(None);
        }
        let unterminated = || LexError::UnterminatedChar {
            span: self.span_at(self.token_start, self.token_start),
        };

        let (value, len) = match input.get(1) {
            None | Some(b'\'') | Some(b'\n') => return Err(unterminated()),
            Some(b'\\') => {
                let escape = *input.get(2).filter(|&&byte| byte != b'\n').ok_or_else(unterminated)?;
                let byte = self.decode_escape(escape, self.token_start + 1)?;
                (u32::from(byte), 2)
            },
            Some(_) => decode(&input[1..]).map_err(|source| LexError::InvalidUtf8 {
                span: self.span_at(self.token_start + 1, self.token_start + 2),
                source,
            })?,
        };

        if input.get(1 + len) != Some(&b'\'') {
            return Err(unterminated());
        }

        self.cursor.advance_bytes(len + 2);
        Ok(Some(TokenValue::Int(i64::from(value))))
    }

    /// Decodes the escape whose backslash is at `offset`.
    fn decode_escape(&self, escape: u8, offset: usize) -> LexResult<u8> {
        let span = self.span_at(offset, offset + 2);
        match escape {
            b'u' => Err(LexError::UnsupportedEscape { span }),
            _ => escape_byte(escape).ok_or(LexError::InvalidEscape { span }),
        }
    }
}
