//! Edge case tests for limboc-lex

#[cfg(test)]
mod tests {
    use crate::{lex, LexError, Token, TokenKind, TokenValue};
    use limboc_util::SourceMap;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut map = SourceMap::new();
        let file = map.add_file("edge.b", source);
        let stream = lex(&file).unwrap();
        let mut tokens = stream.tokens().to_vec();
        assert!(tokens.pop().is_some_and(|t| t.is_eof()));
        tokens
    }

    fn lex_err(source: &[u8]) -> LexError {
        let mut map = SourceMap::new();
        let file = map.add_file("edge.b", source);
        lex(&file).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_only_whitespace_and_comments() {
        assert!(lex_all("  \t\n# one\n\n   # two").is_empty());
    }

    #[test]
    fn test_edge_exactly_one_eof() {
        let mut map = SourceMap::new();
        let file = map.add_file("edge.b", "a b c\n");
        let stream = lex(&file).unwrap();
        assert_eq!(stream.iter().filter(|t| t.is_eof()).count(), 1);
        assert!(stream.tokens().last().unwrap().is_eof());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].span.len(), 1);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} := 1;", name));
        assert_eq!(t[0].span.len(), 10000);
        assert_eq!(t[1].span.column, 10002);
    }

    #[test]
    fn test_edge_keyword_prefix_of_identifier() {
        let t = lex_all("implementation");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_tokens_without_spaces() {
        let t = lex_all("a:=b+1;");
        let kinds: Vec<_> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Punctuator,
                TokenKind::Identifier,
                TokenKind::Punctuator,
                TokenKind::Integral,
                TokenKind::Punctuator,
            ]
        );
        assert!(t.iter().all(|t| !t.follows_space));
    }

    #[test]
    fn test_edge_follows_space_and_line_start() {
        let t = lex_all("a  b\n  c");
        assert!(t[0].at_beginning_of_line && !t[0].follows_space);
        assert!(!t[1].at_beginning_of_line && t[1].follows_space);
        assert!(t[2].at_beginning_of_line && t[2].follows_space);
        assert_eq!((t[2].span.line, t[2].span.column), (2, 3));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!((t[1].span.line, t[1].span.column), (2, 1));
    }

    #[test]
    fn test_edge_column_after_multibyte_string() {
        let t = lex_all("\"中文\" x");
        assert_eq!(t[1].span.column, 6);
    }

    #[test]
    fn test_edge_radix_then_identifier() {
        let t = lex_all("16r1g");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].value, TokenValue::Int(1));
        assert_eq!(t[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_number_then_dot_method() {
        let t = lex_all("a[1:].b");
        assert_eq!(t[2].value, TokenValue::Int(1));
        assert_eq!(t[5].kind, TokenKind::Punctuator);
    }

    #[test]
    fn test_edge_char_literals_are_integral() {
        let t = lex_all("'a' '\\t' 'é'");
        let values: Vec<_> = t.iter().map(|t| t.int_value()).collect();
        assert_eq!(values, [Some(97), Some(9), Some(0xE9)]);
        assert!(t.iter().all(|t| t.kind == TokenKind::Integral));
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].value, TokenValue::Str(Vec::new()));
    }

    #[test]
    fn test_edge_hash_inside_string_is_not_comment() {
        let t = lex_all("\"# not a comment\"");
        assert_eq!(t[0].str_value(), Some(&b"# not a comment"[..]));
    }

    #[test]
    fn test_edge_max_int() {
        let t = lex_all("9223372036854775807");
        assert_eq!(t[0].int_value(), Some(i64::MAX));
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007")[0].int_value(), Some(7));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string_anchored_at_quote() {
        let err = lex_err(b"a\n  \"abc");
        let span = err.span().unwrap();
        assert_eq!(span.start, 4);
        assert_eq!((span.line, span.column), (2, 3));
        assert_eq!(err.to_string(), "unterminated string literal");
    }

    #[test]
    fn test_err_unterminated_char() {
        assert!(matches!(lex_err(b"'x"), LexError::UnterminatedChar { .. }));
        assert!(matches!(lex_err(b"''"), LexError::UnterminatedChar { .. }));
    }

    #[test]
    fn test_err_invalid_radix() {
        assert!(matches!(lex_err(b"x := 37r1;"), LexError::InvalidRadix { span } if span.start == 5));
    }

    #[test]
    fn test_err_invalid_chars() {
        for source in [&b"$"[..], b"@", b"`", b"?", b"\\"] {
            assert!(
                matches!(lex_err(source), LexError::InvalidCharacter { .. }),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn test_err_non_ascii_letter() {
        let err = lex_err("x := é;".as_bytes());
        assert!(matches!(err, LexError::InvalidCharacter { span } if span.column == 6));
    }

    #[test]
    fn test_err_invalid_utf8() {
        assert!(matches!(
            lex_err(b"x \x80"),
            LexError::InvalidIdentifierChar { span, .. } if span.start == 2
        ));
    }

    #[test]
    fn test_err_after_valid_tokens() {
        assert!(matches!(lex_err(b"x := 1; $"), LexError::InvalidCharacter { span } if span.start == 8));
    }
}
