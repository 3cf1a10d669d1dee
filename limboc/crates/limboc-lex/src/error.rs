//! Lexical errors.
//!
//! Every lexical error is fatal. Scanners return them as values and the
//! caller decides how to report them; [`crate::lex_or_exit`] renders the
//! error and terminates the process.

use limboc_util::error::Utf8Error;
use limboc_util::{Diagnostic, Span};
use thiserror::Error;

/// Error type for lexical analysis
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character literal holds a malformed UTF-8 sequence
    #[error("invalid UTF-8 sequence in character literal")]
    InvalidUtf8 {
        span: Span,
        #[source]
        source: Utf8Error,
    },

    /// A malformed UTF-8 sequence where an identifier was expected
    #[error("invalid character in identifier")]
    InvalidIdentifierChar {
        span: Span,
        #[source]
        source: Utf8Error,
    },

    /// A string literal runs into the end of its line or of the file
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    /// A character literal is empty or lacks its closing quote
    #[error("unterminated character literal")]
    UnterminatedChar { span: Span },

    /// The base of a radix literal is not between 2 and 36
    #[error("invalid radix in number literal")]
    InvalidRadix { span: Span },

    /// A number literal stops where a digit was required
    #[error("malformed number literal")]
    MalformedNumber { span: Span },

    /// An integer literal does not fit in 64 signed bits
    #[error("integer literal out of range")]
    IntegerOutOfRange { span: Span },

    /// A `\u` escape
    #[error("\\u escape sequences are not yet supported")]
    UnsupportedEscape { span: Span },

    /// An escape character outside the supported set
    #[error("invalid escape sequence")]
    InvalidEscape { span: Span },

    /// Input that starts no token
    #[error("invalid character")]
    InvalidCharacter { span: Span },

    /// The scanner reached a state it should never reach
    #[error("internal error: {0}")]
    Internal(String),
}

impl LexError {
    /// The source location the error is anchored at
    ///
    /// Internal errors have none.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::InvalidUtf8 { span, .. }
            | LexError::InvalidIdentifierChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedChar { span }
            | LexError::InvalidRadix { span }
            | LexError::MalformedNumber { span }
            | LexError::IntegerOutOfRange { span }
            | LexError::UnsupportedEscape { span }
            | LexError::InvalidEscape { span }
            | LexError::InvalidCharacter { span } => Some(*span),
            LexError::Internal(_) => None,
        }
    }

    /// Convert to a fatal diagnostic for the reporter
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string());
        match self.span() {
            Some(span) => diagnostic.with_span(span),
            None => diagnostic,
        }
    }
}

/// Result type alias for lexing
pub type LexResult<T> = std::result::Result<T, LexError>;
