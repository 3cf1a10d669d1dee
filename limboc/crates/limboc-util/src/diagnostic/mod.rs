//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! A located diagnostic is printed as the offending source line, prefixed
//! with the file name and file number, followed by a caret under the
//! offending position and the message:
//!
//! ```text
//! hello.b:1: x := "abc
//!                 ^ unterminated string literal
//! ```
//!
//! The caret column is measured in display cells, so wide and combining
//! characters earlier on the line do not push it out of alignment.
//!
//! # Examples
//!
//! ```
//! use limboc_util::diagnostic::{render, Diagnostic};
//! use limboc_util::span::{SourceFile, Span};
//!
//! let file = SourceFile::new(1, "hello.b", "x := $;");
//! let diag = Diagnostic::error("invalid character").with_span(Span::new(5, 6, 1, 6));
//!
//! assert_eq!(
//!     render(&diag, Some(&file)),
//!     format!("hello.b:1: x := $;\n{}^ invalid character\n", " ".repeat(16))
//! );
//! ```

mod emitter;

pub use emitter::{render, Handler, Sink};

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use limboc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that ends the run
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and optional location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location, if the diagnostic is tied to one
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create a new diagnostic without a location
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Anchor the diagnostic at a source location
    ///
    /// Only `span.start` determines where the caret is drawn.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns true if this diagnostic ends the run
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.level == Level::Error
    }
}
