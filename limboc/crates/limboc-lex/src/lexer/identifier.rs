//! Identifier lexing.

use limboc_util::unicode::decode;

use crate::error::{LexError, LexResult};
use crate::unicode::{is_identifier_rest, is_identifier_start};
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes an identifier.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// letters, digits or underscores. Codepoints are decoded one at a time;
    /// a malformed UTF-8 sequence is an error.
    ///
    /// # Returns
    ///
    /// true if an identifier was consumed, false if none starts here
    pub fn lex_identifier(&mut self) -> LexResult<bool> {
        let input = self.cursor.remaining();
        let start = self.cursor.position();
        let mut len = 0;

        while len < input.len() {
            let (codepoint, width) =
                decode(&input[len..]).map_err(|source| LexError::InvalidIdentifierChar {
                    span: self.span_at(start + len, start + len + 1),
                    source,
                })?;
            let valid = if len == 0 {
                is_identifier_start(codepoint)
            } else {
                is_identifier_rest(codepoint)
            };
            if !valid {
                break;
            }
            len += width;
        }

        self.cursor.advance_bytes(len);
        Ok(len > 0)
    }
}
