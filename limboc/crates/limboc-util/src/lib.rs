//! limboc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the limboc front end:
//!
//! - [`unicode`]: a narrow UTF-8 codec, compile-time checked codepoint
//!   interval tables, and terminal display width.
//! - [`span`]: source files, the source map, and byte spans with line and
//!   column information.
//! - [`diagnostic`]: diagnostics, caret rendering, and the [`Handler`] that
//!   reports them.
//! - [`config`]: settings for the diagnostic handler.
//! - [`error`]: the error types returned by this crate.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod span;
pub mod unicode;

pub use config::EmitterConfig;
pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::{FileId, SourceFile, SourceMap, Span};

#[doc(hidden)]
pub mod __private {
    pub use static_assertions::const_assert;
}
