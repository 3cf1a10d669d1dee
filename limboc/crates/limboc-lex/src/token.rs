//! Token definitions for the Limbo lexer.
//!
//! Tokens do not copy their source text. Each carries a [`Span`] into the
//! owning [`SourceFile`], and a [`TokenStream`] keeps that file alive for as
//! long as its tokens are in use.

use std::fmt;
use std::sync::Arc;

use limboc_util::{Handler, SourceFile, Span};
use static_assertions::const_assert;

/// The class of a token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name that is not a keyword
    Identifier,
    /// An operator or delimiter from [`PUNCTUATORS`]
    Punctuator,
    /// A reserved word from [`KEYWORDS`]
    Keyword,
    /// A string literal
    String,
    /// An integer or character literal
    Integral,
    /// A real (floating-point) literal
    Real,
    /// The end of the input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Punctuator => "punctuator",
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Integral => "integral",
            TokenKind::Real => "real",
            TokenKind::Eof => "end of file",
        };
        f.write_str(name)
    }
}

/// The decoded value of a literal
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// No value: identifiers, keywords, punctuators and EOF
    None,
    /// The bytes of a string literal after escape decoding
    Str(Vec<u8>),
    /// An integer literal, or the codepoint of a character literal
    Int(i64),
    /// A real literal
    Real(f64),
}

/// A lexical token
///
/// The layout flags are snapshotted from the scanner when the token starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Token class
    pub kind: TokenKind,
    /// Decoded literal value
    pub value: TokenValue,
    /// Raw source bytes of the token, with the line and column of its start
    pub span: Span,
    /// No other token precedes this one on its line
    pub at_beginning_of_line: bool,
    /// Whitespace or a comment comes right before this token
    pub follows_space: bool,
}

impl Token {
    /// Returns true for the end-of-file token
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The integer value of an integral token
    pub fn int_value(&self) -> Option<i64> {
        match self.value {
            TokenValue::Int(value) => Some(value),
            _ => None,
        }
    }

    /// The value of a real token
    pub fn real_value(&self) -> Option<f64> {
        match self.value {
            TokenValue::Real(value) => Some(value),
            _ => None,
        }
    }

    /// The decoded bytes of a string token
    pub fn str_value(&self) -> Option<&[u8]> {
        match &self.value {
            TokenValue::Str(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// Reserved words, longest first.
pub const KEYWORDS: &[&str] = &[
    "implement", "continue", "include", "module", "return", "string", "cyclic", "import", "spawn",
    "tagof", "array", "break", "while", "byte", "case", "chan", "else", "exit", "list", "load",
    "pick", "real", "self", "type", "adt", "alt", "big", "con", "for", "int", "len", "nil", "ref",
    "do", "fn", "hd", "if", "of", "or", "tl", "to",
];

/// Operators and delimiters, longest first.
pub const PUNCTUATORS: &[&str] = &[
    "<<=", ">>=", "**=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", ":=", "::", "<-", "->",
    "=>", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "<<", ">>", "**", "+", "-", "*", "/",
    "%", "&", "|", "^", "~", "!", "=", "<", ">", "(", ")", "[", "]", "{", "}", ",", ";", ":",
    ".",
];

/// Check that no entry is longer than the one before it.
///
/// In such a table an entry that is a prefix of another always comes after
/// it, so the first match is the longest one.
pub const fn is_longest_first(table: &[&str]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i].len() > table[i - 1].len() {
            return false;
        }
        i += 1;
    }
    true
}

const_assert!(is_longest_first(KEYWORDS));
const_assert!(is_longest_first(PUNCTUATORS));

/// Length of the first table entry that is a prefix of `input`.
///
/// Returns 0 if no entry matches. With a longest-first table this is the
/// longest match.
///
/// # Example
///
/// ```
/// use limboc_lex::token::{longest_match, PUNCTUATORS};
///
/// assert_eq!(longest_match(b"<<= 1", PUNCTUATORS), 3);
/// assert_eq!(longest_match(b"<- c", PUNCTUATORS), 2);
/// assert_eq!(longest_match(b"< b", PUNCTUATORS), 1);
/// assert_eq!(longest_match(b"$", PUNCTUATORS), 0);
/// ```
pub fn longest_match(input: &[u8], table: &[&str]) -> usize {
    table
        .iter()
        .find(|entry| input.starts_with(entry.as_bytes()))
        .map_or(0, |entry| entry.len())
}

/// The tokens of one source file, ending in exactly one EOF token
#[derive(Clone, Debug)]
pub struct TokenStream {
    file: Arc<SourceFile>,
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wrap the tokens lexed from `file`
    pub fn new(file: Arc<SourceFile>, tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_eof));
        Self { file, tokens }
    }

    /// The file the tokens point into
    pub fn file(&self) -> &Arc<SourceFile> {
        &self.file
    }

    /// All tokens, EOF included
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the tokens in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of tokens, EOF included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens at all
    ///
    /// A stream produced by the lexer always holds at least the EOF token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The raw source bytes of a token
    pub fn text(&self, token: &Token) -> &[u8] {
        &self.file.content()[token.span.range()]
    }

    /// Report a fatal error at a token and terminate
    pub fn error_token(&self, handler: &Handler, token: &Token, message: impl Into<String>) -> ! {
        handler.error_at(&self.file, token.span, message)
    }

    /// Report a warning at a token
    pub fn warn_token(&self, handler: &Handler, token: &Token, message: impl Into<String>) {
        handler.warn_at(&self.file, token.span, message);
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
