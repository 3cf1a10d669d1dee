//! Scanning cursor over a source buffer.
//!
//! This module provides [`LexerContext`], which owns the mutable scanning
//! state for one source file: the byte position, line and column, and the
//! two layout flags copied onto each token.

/// Mutable scanning state for one source file.
///
/// Positions are byte offsets into an immutable buffer. The column counts
/// codepoints (every byte that is not a `10xxxxxx` continuation byte), not
/// display cells.
///
/// # Example
///
/// ```
/// use limboc_lex::cursor::LexerContext;
///
/// let mut cursor = LexerContext::new(b"x := 1;");
/// assert_eq!(cursor.current_byte(), Some(b'x'));
/// cursor.advance_bytes(2);
/// assert_eq!(cursor.remaining(), b":= 1;");
/// assert_eq!(cursor.column(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LexerContext<'a> {
    /// The source bytes being scanned.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in codepoints).
    column: u32,

    /// No token has been produced on the current line yet.
    at_beginning_of_line: bool,

    /// Whitespace or a comment came right before the current position.
    follows_space: bool,
}

impl<'a> LexerContext<'a> {
    /// Creates a cursor at the start of the buffer.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            at_beginning_of_line: true,
            follows_space: false,
        }
    }

    /// Returns the byte at the cursor, or `None` at the end.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Returns true if the cursor has reached the end of the buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advances over `count` bytes, keeping line and column current.
    ///
    /// Never moves past the end of the buffer.
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        for &byte in &self.source[self.position..end] {
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if byte & 0b1100_0000 != 0b1000_0000 {
                self.column += 1;
            }
        }
        self.position = end;
    }

    /// Skips bytes that occupy no column, such as a byte-order mark.
    pub fn skip_uncounted(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
    }

    /// Consumes a newline and starts the next line.
    pub fn newline(&mut self) {
        self.advance_bytes(1);
        self.at_beginning_of_line = true;
        self.follows_space = false;
    }

    /// Consumes `count` bytes of whitespace or comment.
    pub fn skip_space(&mut self, count: usize) {
        self.advance_bytes(count);
        self.follows_space = true;
    }

    /// Clears the layout flags once a token has been produced.
    pub fn clear_flags(&mut self) {
        self.at_beginning_of_line = false;
        self.follows_space = false;
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// See [`Token::at_beginning_of_line`](crate::Token::at_beginning_of_line).
    #[inline]
    pub fn at_beginning_of_line(&self) -> bool {
        self.at_beginning_of_line
    }

    /// See [`Token::follows_space`](crate::Token::follows_space).
    #[inline]
    pub fn follows_space(&self) -> bool {
        self.follows_space
    }

    /// The bytes from the cursor to the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    /// The bytes from `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    /// The whole buffer.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}
