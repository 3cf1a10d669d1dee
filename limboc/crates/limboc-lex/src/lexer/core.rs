//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the dispatch loop.

use limboc_util::{SourceFile, Span};

use crate::config::LexerConfig;
use crate::cursor::LexerContext;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind, TokenValue};

/// The UTF-8 encoding of U+FEFF.
const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// Lexer for the Limbo programming language.
///
/// The lexer turns the bytes of one source file into tokens. Each call to
/// [`next_token`](Lexer::next_token) skips whitespace and comments, then
/// tries the token grammars in a fixed order: number, string, character,
/// keyword, identifier, punctuator. The first that matches produces the
/// token. Any error ends the scan; there is no recovery.
///
/// # Example
///
/// ```
/// use limboc_lex::{Lexer, LexerConfig, TokenKind};
/// use limboc_util::SourceFile;
///
/// let file = SourceFile::new(1, "cmd.b", "implement Command;");
/// let mut lexer = Lexer::new(&file, LexerConfig::default());
///
/// let kinds: Vec<_> = lexer.tokenize().unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Keyword, TokenKind::Identifier, TokenKind::Punctuator, TokenKind::Eof]
/// );
/// ```
pub struct Lexer<'a> {
    /// The file being lexed.
    file: &'a SourceFile,

    /// Scanning state for the file.
    pub cursor: LexerContext<'a>,

    /// Lexer settings.
    config: LexerConfig,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Whether the byte-order mark has been checked.
    bom_checked: bool,

    /// Whether the iterator has yielded EOF or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source file.
    pub fn new(file: &'a SourceFile, config: LexerConfig) -> Self {
        Self {
            file,
            cursor: LexerContext::new(file.content()),
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// At the end of the input this returns the EOF token, a zero-length
    /// token at the end of the buffer. Calling it again returns another EOF.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments();
        self.begin_token();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof, TokenValue::None));
        }

        let token = if let Some(value) = self.lex_number()? {
            let kind = match value {
                TokenValue::Real(_) => TokenKind::Real,
                _ => TokenKind::Integral,
            };
            self.make_token(kind, value)
        } else if let Some(value) = self.lex_string()? {
            self.make_token(TokenKind::String, value)
        } else if let Some(value) = self.lex_char()? {
            self.make_token(TokenKind::Integral, value)
        } else if self.lex_keyword() {
            self.make_token(TokenKind::Keyword, TokenValue::None)
        } else if self.lex_identifier()? {
            self.make_token(TokenKind::Identifier, TokenValue::None)
        } else if self.lex_punctuator() {
            self.make_token(TokenKind::Punctuator, TokenValue::None)
        } else {
            return Err(LexError::InvalidCharacter {
                span: self.span_at(self.token_start, self.token_start + 1),
            });
        };

        tracing::trace!(
            kind = %token.kind,
            line = token.span.line,
            column = token.span.column,
            len = token.span.len(),
            "token"
        );
        Ok(token)
    }

    /// Lexes the whole file.
    ///
    /// The returned tokens end in exactly one EOF token. The first error
    /// stops the scan and is returned instead.
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        self.by_ref().collect()
    }

    /// Records the position and layout flags of the token about to start.
    fn begin_token(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.config.strip_bom && self.cursor.remaining().starts_with(BYTE_ORDER_MARK) {
                self.cursor.skip_uncounted(BYTE_ORDER_MARK.len());
            }
        }
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token from `token_start` to the cursor.
    fn make_token(&mut self, kind: TokenKind, value: TokenValue) -> Token {
        let token = Token {
            kind,
            value,
            span: self.token_span(),
            at_beginning_of_line: self.cursor.at_beginning_of_line(),
            follows_space: self.cursor.follows_space(),
        };
        self.cursor.clear_flags();
        token
    }

    /// The span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        self.span_at(self.token_start, self.cursor.position())
    }

    /// A span inside the current token's line.
    ///
    /// The line and column are those of the token start, so `start` should
    /// be `token_start` unless the caller only needs the byte offsets.
    pub(crate) fn span_at(&self, start: usize, end: usize) -> Span {
        let column = self.token_start_column
            + self.cursor.source()[self.token_start..start]
                .iter()
                .filter(|&&byte| byte & 0b1100_0000 != 0b1000_0000)
                .count() as u32;
        Span::with_file(start, end, self.file.id(), self.token_start_line, column)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    /// Yields every token including EOF, then `None`. After an error the
    /// iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = !matches!(&result, Ok(token) if !token.is_eof());
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> LexResult<Vec<Token>> {
        let file = SourceFile::new(1, "test.b", source);
        Lexer::new(&file, LexerConfig::default()).tokenize()
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].span.range(), 0..0);
    }

    #[test]
    fn test_eof_span_at_end_of_buffer() {
        let tokens = lex("x  \n").unwrap();
        let eof = tokens.last().unwrap();
        assert_eq!(eof.span.start, 4);
        assert!(eof.span.is_empty());
        assert_eq!(eof.span.line, 2);
    }

    #[test]
    fn test_next_token_after_eof_is_eof() {
        let file = SourceFile::new(1, "t.b", "x");
        let mut lexer = Lexer::new(&file, LexerConfig::default());
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let file = SourceFile::new(1, "t.b", "a b");
        let lexer = Lexer::new(&file, LexerConfig::default());
        assert_eq!(lexer.count(), 3);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let file = SourceFile::new(1, "t.b", "a $ b");
        let mut lexer = Lexer::new(&file, LexerConfig::default());
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_invalid_character() {
        let err = lex("x := $;").unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidCharacter {
                span: Span::with_file(5, 6, limboc_util::FileId(1), 1, 6)
            }
        );
    }

    #[test]
    fn test_priority_number_before_punctuator() {
        let tokens = lex(".5").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Real);
        let tokens = lex(". x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Punctuator);
    }

    #[test]
    fn test_bom_is_skipped() {
        let tokens = lex("\u{FEFF}x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].span.start, 3);
        assert_eq!(tokens[0].span.column, 1);
    }

    #[test]
    fn test_bom_kept_when_disabled() {
        let file = SourceFile::new(1, "t.b", "\u{FEFF}x");
        let err = Lexer::new(&file, LexerConfig { strip_bom: false })
            .tokenize()
            .unwrap_err();
        assert!(matches!(err, LexError::InvalidCharacter { .. }));
    }

    #[test]
    fn test_bom_only_at_start() {
        assert!(lex("x \u{FEFF}").is_err());
    }
}
