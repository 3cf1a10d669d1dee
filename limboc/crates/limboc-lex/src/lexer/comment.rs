//! Comment and whitespace skipping.

use crate::Lexer;

/// Whitespace other than newline.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

impl Lexer<'_> {
    /// Skips whitespace, newlines and `#` comments.
    ///
    /// A comment runs to the end of its line and leaves the newline in
    /// place, so the newline still starts a new line.
    pub fn skip_whitespace_and_comments(&mut self) {
        while let Some(byte) = self.cursor.current_byte() {
            match byte {
                b'#' => self.skip_line_comment(),
                b'\n' => self.cursor.newline(),
                byte if is_space(byte) => self.cursor.skip_space(1),
                _ => return,
            }
        }
    }

    /// Skips a line comment (from `#` to end of line).
    fn skip_line_comment(&mut self) {
        let len = self
            .cursor
            .remaining()
            .iter()
            .position(|&byte| byte == b'\n')
            .unwrap_or(self.cursor.remaining().len());
        self.cursor.skip_space(len);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerConfig, TokenKind};
    use limboc_util::SourceFile;

    fn first_token(source: &str) -> crate::Token {
        let file = SourceFile::new(1, "t.b", source);
        Lexer::new(&file, LexerConfig::default()).next_token().unwrap()
    }

    #[test]
    fn test_skip_whitespace() {
        let token = first_token(" \t\r\x0b\x0cx");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.span.column, 6);
        assert!(token.follows_space);
        assert!(token.at_beginning_of_line);
    }

    #[test]
    fn test_skip_line_comment() {
        let token = first_token("# comment\nhello");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.span.line, 2);
        assert_eq!(token.span.column, 1);
        assert!(token.at_beginning_of_line);
        assert!(!token.follows_space);
    }

    #[test]
    fn test_comment_at_end_of_file() {
        assert!(first_token("# only a comment").is_eof());
    }

    #[test]
    fn test_comment_after_token_sets_follows_space() {
        let file = SourceFile::new(1, "t.b", "a# note");
        let tokens = Lexer::new(&file, LexerConfig::default()).tokenize().unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(!tokens[0].follows_space);
        assert!(tokens[1].is_eof());
        assert!(tokens[1].follows_space);
        assert!(!tokens[1].at_beginning_of_line);
    }

    #[test]
    fn test_newline_after_comment_clears_follows_space() {
        let file = SourceFile::new(1, "t.b", "a #c\nb");
        let tokens = Lexer::new(&file, LexerConfig::default()).tokenize().unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert!(!tokens[1].follows_space);
        assert!(tokens[1].at_beginning_of_line);
    }

    #[test]
    fn test_comment_may_hold_any_bytes() {
        let file = SourceFile::new(1, "t.b", b"# \xFF\xFE $ \"\nx".to_vec());
        let tokens = Lexer::new(&file, LexerConfig::default()).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_newline_clears_follows_space() {
        let token = first_token("  \nx");
        assert!(!token.follows_space);
        assert!(token.at_beginning_of_line);
    }
}
