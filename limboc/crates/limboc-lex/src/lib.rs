//! limboc-lex - Lexical Analyzer for the Limbo Programming Language
//!
//! This crate turns the bytes of a Limbo source file into a stream of
//! classified tokens with exact source positions, decoding number, string
//! and character literals on the way.
//!
//! # Example Usage
//!
//! ```
//! use limboc_lex::{lex, TokenKind, TokenValue};
//! use limboc_util::SourceMap;
//!
//! let mut sources = SourceMap::new();
//! let file = sources.add_file("hello.b", "x := 16r20;");
//!
//! let tokens = lex(&file).unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Punctuator,
//!         TokenKind::Integral,
//!         TokenKind::Punctuator,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert_eq!(tokens.tokens()[2].value, TokenValue::Int(32));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token types and the keyword and punctuator tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Scanning state for one file
//! - [`unicode`] - Identifier classification and radix digits
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! - **Keywords**: reserved words such as `implement`, `include`, `fn`,
//!   `adt`, `pick`, `spawn`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Integral**: `621`, `16r20`, and character literals such as `'a'`
//! - **Real**: `420.69`, `.5`, `1e10`, `16r1.8`
//! - **String**: `"hello\n"`
//! - **Punctuators**: operators and delimiters such as `:=`, `<-`, `->`,
//!   `::`, `**=`, `;`
//! - **EOF**: end of file marker
//!
//! Comments run from `#` to the end of the line.
//!
//! # Errors
//!
//! Every lexical error is fatal. [`lex`] returns the first one as a
//! [`LexError`]; [`lex_or_exit`] reports it and terminates the process.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

use std::sync::Arc;

use limboc_util::{Handler, SourceFile};
use rayon::prelude::*;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::LexerContext;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenStream, TokenValue, KEYWORDS, PUNCTUATORS};
pub use unicode::is_identifier;

/// Lex a whole file with the default settings.
pub fn lex(file: &Arc<SourceFile>) -> LexResult<TokenStream> {
    lex_with_config(file, LexerConfig::default())
}

/// Lex a whole file.
///
/// On success the stream ends in exactly one EOF token. On failure no
/// tokens are returned.
pub fn lex_with_config(file: &Arc<SourceFile>, config: LexerConfig) -> LexResult<TokenStream> {
    tracing::debug!(file = file.name(), number = file.number(), bytes = file.len(), "lexing");
    let tokens = Lexer::new(file, config).tokenize()?;
    tracing::debug!(file = file.name(), tokens = tokens.len(), "lexed");
    Ok(TokenStream::new(Arc::clone(file), tokens))
}

/// Lex a whole file, or report the error and terminate the process.
///
/// # Example
///
/// ```
/// use limboc_lex::lex_or_exit;
/// use limboc_util::{Handler, SourceMap};
///
/// let mut sources = SourceMap::new();
/// let file = sources.add_file("ok.b", "include \"sys.m\";");
///
/// let tokens = lex_or_exit(&file, &Handler::new());
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn lex_or_exit(file: &Arc<SourceFile>, handler: &Handler) -> TokenStream {
    match lex(file) {
        Ok(tokens) => tokens,
        Err(err) => {
            let located = err.span().map(|_| &**file);
            handler.abort(&err.to_diagnostic(), located)
        },
    }
}

/// Lex independent files in parallel.
///
/// Each file gets its own lexer; results come back in input order.
pub fn lex_files(files: &[Arc<SourceFile>]) -> Vec<LexResult<TokenStream>> {
    files.par_iter().map(lex).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use limboc_util::SourceMap;

    fn lex_source(source: &str) -> LexResult<TokenStream> {
        let mut map = SourceMap::new();
        let file = map.add_file("test.b", source);
        lex(&file)
    }

    fn summary(stream: &TokenStream) -> Vec<(TokenKind, String)> {
        stream
            .iter()
            .map(|t| (t.kind, String::from_utf8_lossy(stream.text(t)).into_owned()))
            .collect()
    }

    #[test]
    fn test_implement_command() {
        let stream = lex_source("implement Command;").unwrap();
        assert_eq!(
            summary(&stream),
            vec![
                (TokenKind::Keyword, "implement".to_string()),
                (TokenKind::Identifier, "Command".to_string()),
                (TokenKind::Punctuator, ";".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
        let ident = &stream.tokens()[1];
        assert_eq!((ident.span.line, ident.span.column), (1, 11));
        assert_eq!(ident.span.file_id, stream.file().id());
    }

    #[test]
    fn test_real_literals() {
        let stream = lex_source("420.69").unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.tokens()[0].kind, TokenKind::Real);
        assert_eq!(stream.tokens()[0].real_value(), Some(420.69));

        let stream = lex_source(".5").unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.tokens()[0].real_value(), Some(0.5));
    }

    #[test]
    fn test_hello_world_program() {
        let source = r#"implement Hello;

include "sys.m";
	sys: Sys;

init(nil: ref Draw->Context, argv: list of string)
{
	sys = load Sys Sys->PATH;
	sys->print("hello, world\n");   # greet
}
"#;
        let stream = lex_source(source).unwrap();
        let texts: Vec<_> = summary(&stream).into_iter().map(|(_, text)| text).collect();
        assert!(texts.contains(&"\"sys.m\"".to_string()));
        assert!(texts.contains(&"->".to_string()));
        assert!(!texts.iter().any(|t| t.contains("greet")));

        let print = stream.iter().find(|t| stream.text(t) == b"print").unwrap();
        assert_eq!(print.span.line, 9);
        assert_eq!(print.span.column, 7);

        let brace = stream.iter().find(|t| stream.text(t) == b"{").unwrap();
        assert!(brace.at_beginning_of_line);
        assert!(!brace.follows_space);

        let string = stream.iter().find(|t| t.kind == TokenKind::String && t.span.line == 9).unwrap();
        assert_eq!(string.str_value(), Some(&b"hello, world\n"[..]));
    }

    #[test]
    fn test_error_stops_lexing() {
        let err = lex_source("x := \"abc").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { span } if span.start == 5));
    }

    #[test]
    fn test_lex_files_keeps_order() {
        let mut map = SourceMap::new();
        let files = vec![
            map.add_file("a.b", "a;"),
            map.add_file("b.b", "$"),
            map.add_file("c.b", "c d e"),
        ];
        let results = lex_files(&files);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 3);
        assert!(results[1].is_err());
        let third = results[2].as_ref().unwrap();
        assert_eq!(third.len(), 4);
        assert_eq!(third.file().number(), 3);
    }

    #[test]
    fn test_warn_token_renders_at_token() {
        let stream = lex_source("x = 1;").unwrap();
        let handler = Handler::buffered();
        let eq = &stream.tokens()[1];
        stream.warn_token(&handler, eq, "did you mean `:=`?");
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(
            handler.take_output(),
            format!("test.b:1: x = 1;\n{}^ did you mean `:=`?\n", " ".repeat(10 + 2))
        );
    }
}
