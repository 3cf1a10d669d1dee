//! Keyword and punctuator lexing.
//!
//! Both are fixed tables matched greedily: the tables are ordered longest
//! first, so the first entry that matches is the longest one.

use limboc_util::unicode::decode;

use crate::token::{longest_match, KEYWORDS, PUNCTUATORS};
use crate::unicode::is_identifier_rest;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes a keyword.
    ///
    /// A keyword only matches as a whole word: `integer` is an identifier,
    /// not `int` followed by `eger`.
    ///
    /// # Returns
    ///
    /// true if a keyword was consumed
    pub fn lex_keyword(&mut self) -> bool {
        let input = self.cursor.remaining();
        let len = longest_match(input, KEYWORDS);
        if len == 0 {
            return false;
        }
        let continues_word = decode(&input[len..])
            .is_ok_and(|(codepoint, _)| is_identifier_rest(codepoint));
        if continues_word {
            return false;
        }
        self.cursor.advance_bytes(len);
        true
    }

    /// Lexes an operator or delimiter.
    ///
    /// # Returns
    ///
    /// true if a punctuator was consumed
    pub fn lex_punctuator(&mut self) -> bool {
        let len = longest_match(self.cursor.remaining(), PUNCTUATORS);
        self.cursor.advance_bytes(len);
        len > 0
    }
}
